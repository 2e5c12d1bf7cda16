use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_one_shot_prints_header_and_one_cycle() {
    let output = cargo_bin_cmd!("rslstatus").arg("-1").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "unexpected output: {stdout}");

    let header: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(header["version"], 1);
    assert_eq!(header["stop_signal"], signal_number("TSTP"));
    assert_eq!(header["cont_signal"], signal_number("CONT"));

    assert_eq!(lines[1], "[");
    assert_eq!(lines[2], "[");
    assert_eq!(lines[4], "],");

    let blocks: Vec<serde_json::Value> = serde_json::from_str(&format!("[{}]", lines[3])).unwrap();
    assert!(!blocks.is_empty());
    for block in blocks {
        assert!(block["full_text"].is_string());
        assert!(block["color"].as_str().unwrap().starts_with('#'));
        assert!(block["background"].as_str().unwrap().starts_with('#'));
    }
}

#[test]
fn test_positional_argument_is_a_usage_error() {
    cargo_bin_cmd!("rslstatus")
        .args(["-s", "extra"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    cargo_bin_cmd!("rslstatus")
        .arg("-x")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("rslstatus")
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rslstatus-"));
}

#[test]
fn test_root_title_without_display_fails() {
    cargo_bin_cmd!("rslstatus")
        .env("DISPLAY", ":4242")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("display"))
        .stderr(predicate::str::contains("rslstatus: failed to open display"));
}

/// Platform numbers for the pause and resume signals.
fn signal_number(name: &str) -> i64 {
    match name {
        "TSTP" if cfg!(target_os = "linux") => 20,
        "CONT" if cfg!(target_os = "linux") => 18,
        "TSTP" => 18,
        "CONT" => 19,
        other => panic!("no number for SIG{other}"),
    }
}

#[cfg(unix)]
mod signals {
    use std::io::{BufRead, BufReader};
    use std::process::{Child, Command, Stdio};
    use std::sync::mpsc::{self, Receiver};
    use std::time::Duration;

    fn spawn() -> (Child, Receiver<String>) {
        let mut child = Command::new(env!("CARGO_BIN_EXE_rslstatus"))
            .args(["-s", "--interval", "100"])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();

        let stdout = child.stdout.take().unwrap();
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        (child, rx)
    }

    fn kill(child: &Child, signal: &str) {
        let status = Command::new("kill")
            .args([format!("-{signal}"), child.id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());
    }

    fn recv(rx: &Receiver<String>) -> String {
        rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    fn drain(rx: &Receiver<String>) -> usize {
        rx.try_iter().count()
    }

    #[test]
    fn test_pause_resume_and_terminate() {
        let (mut child, rx) = spawn();

        assert!(recv(&rx).starts_with('{'));
        assert_eq!(recv(&rx), "[");
        // Two full cycles.
        for _ in 0..6 {
            recv(&rx);
        }

        // The no-op signal leaves the process running.
        kill(&child, "USR1");
        std::thread::sleep(Duration::from_millis(300));
        assert!(drain(&rx) > 0);
        assert!(child.try_wait().unwrap().is_none());

        kill(&child, "TSTP");
        std::thread::sleep(Duration::from_millis(300));
        drain(&rx);
        std::thread::sleep(Duration::from_millis(600));
        assert_eq!(drain(&rx), 0, "output continued while paused");

        kill(&child, "CONT");
        assert_eq!(recv(&rx), "[");

        kill(&child, "TERM");
        let status = child.wait().unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_interrupt_exits_cleanly() {
        let (mut child, rx) = spawn();
        recv(&rx);

        kill(&child, "INT");
        let status = child.wait().unwrap();
        assert!(status.success());
    }
}

//! The closed set of status components and the code that reads them.
//!
//! Each [`Component`] turns into one short text value per cycle. Reading goes
//! through [`Sources`], which resolves `/proc` and `/sys` relative to
//! configurable roots so the same code runs against [`MockFs`](super::MockFs).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

use crate::collector::procfs::parser::{
    CpuTimes, MemInfo, parse_cpu_times, parse_loadavg, parse_meminfo, parse_uptime,
};
use crate::collector::traits::FileSystem;
use crate::util::fmt::{format_bytes, format_uptime, percent};

/// Errors raised while reading a single component.
///
/// These never leave the sampler: a failed read renders as the unknown marker.
#[derive(Debug)]
pub enum CollectError {
    /// I/O error reading a source file.
    Io(std::io::Error),
    /// Source file had unexpected content.
    Parse(String),
    /// Nothing to report (no battery, first CPU reading, empty file).
    Unavailable(&'static str),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::Parse(msg) => write!(f, "parse error: {}", msg),
            CollectError::Unavailable(what) => write!(f, "{} unavailable", what),
        }
    }
}

impl std::error::Error for CollectError {}

impl From<std::io::Error> for CollectError {
    fn from(e: std::io::Error) -> Self {
        CollectError::Io(e)
    }
}

impl From<crate::collector::procfs::ParseError> for CollectError {
    fn from(e: crate::collector::procfs::ParseError) -> Self {
        CollectError::Parse(e.message)
    }
}

/// One data source in the status line.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// Fixed text.
    Literal(String),
    /// Local time rendered with a strftime-style format.
    Datetime(String),
    /// 1, 5 and 15 minute load averages.
    LoadAvg,
    /// CPU busy percentage since the previous cycle.
    CpuPerc,
    RamPerc,
    RamUsed,
    RamFree,
    RamTotal,
    SwapPerc,
    SwapUsed,
    Uptime,
    Hostname,
    KernelRelease,
    /// Available kernel entropy in bits.
    Entropy,
    /// Battery charge; `None` picks the first `BAT*` supply.
    BatteryPerc(Option<String>),
    /// Battery charging state as `+`, `-`, `o` or `?`.
    BatteryState(Option<String>),
    /// Temperature from a millidegree file such as
    /// `/sys/class/thermal/thermal_zone0/temp`.
    Temp(PathBuf),
    /// First line of an arbitrary file.
    Cat(PathBuf),
}

impl Component {
    /// Short name used in log messages.
    pub fn name(&self) -> &'static str {
        match self {
            Component::Literal(_) => "literal",
            Component::Datetime(_) => "datetime",
            Component::LoadAvg => "load_avg",
            Component::CpuPerc => "cpu_perc",
            Component::RamPerc => "ram_perc",
            Component::RamUsed => "ram_used",
            Component::RamFree => "ram_free",
            Component::RamTotal => "ram_total",
            Component::SwapPerc => "swap_perc",
            Component::SwapUsed => "swap_used",
            Component::Uptime => "uptime",
            Component::Hostname => "hostname",
            Component::KernelRelease => "kernel_release",
            Component::Entropy => "entropy",
            Component::BatteryPerc(_) => "battery_perc",
            Component::BatteryState(_) => "battery_state",
            Component::Temp(_) => "temp",
            Component::Cat(_) => "cat",
        }
    }
}

/// Filesystem plus the roots components resolve their paths against.
pub struct Sources<F: FileSystem> {
    fs: F,
    proc_path: String,
    sys_path: String,
}

impl<F: FileSystem> Sources<F> {
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    /// * `sys_path` - Base path to sysfs (usually "/sys")
    pub fn new(fs: F, proc_path: impl Into<String>, sys_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
            sys_path: sys_path.into(),
        }
    }

    fn read_proc(&self, rel: &str) -> Result<String, CollectError> {
        let path = format!("{}/{}", self.proc_path, rel);
        Ok(self.fs.read_to_string(Path::new(&path))?)
    }

    fn read_trimmed(&self, path: &Path) -> Result<String, CollectError> {
        let content = self.fs.read_to_string(path)?;
        let line = content.lines().next().unwrap_or("").trim();
        if line.is_empty() {
            return Err(CollectError::Unavailable("empty file"));
        }
        Ok(line.to_string())
    }

    fn meminfo(&self) -> Result<MemInfo, CollectError> {
        Ok(parse_meminfo(&self.read_proc("meminfo")?)?)
    }

    /// Reads the aggregate CPU counters; callers keep the previous reading.
    pub fn cpu_times(&self) -> Result<CpuTimes, CollectError> {
        Ok(parse_cpu_times(&self.read_proc("stat")?)?)
    }

    /// Reads every stateless component. `CpuPerc` needs the previous
    /// reading and is handled by the sampler.
    pub fn read(&self, component: &Component) -> Result<String, CollectError> {
        match component {
            Component::Literal(text) => Ok(text.clone()),
            Component::Datetime(fmt) => format_datetime(&Local::now(), fmt),
            Component::LoadAvg => {
                let load = parse_loadavg(&self.read_proc("loadavg")?)?;
                Ok(format!(
                    "{:.2} {:.2} {:.2}",
                    load.load1, load.load5, load.load15
                ))
            }
            Component::CpuPerc => Err(CollectError::Unavailable("cpu_perc without history")),
            Component::RamPerc => {
                let mem = self.meminfo()?;
                percent(mem.mem_used(), mem.mem_total)
                    .map(|p| p.to_string())
                    .ok_or(CollectError::Unavailable("memory"))
            }
            Component::RamUsed => Ok(format_bytes(self.meminfo()?.mem_used() * 1024)),
            Component::RamFree => Ok(format_bytes(self.meminfo()?.mem_free * 1024)),
            Component::RamTotal => Ok(format_bytes(self.meminfo()?.mem_total * 1024)),
            Component::SwapPerc => {
                let mem = self.meminfo()?;
                percent(mem.swap_used(), mem.swap_total)
                    .map(|p| p.to_string())
                    .ok_or(CollectError::Unavailable("swap"))
            }
            Component::SwapUsed => {
                let mem = self.meminfo()?;
                if mem.swap_total == 0 {
                    return Err(CollectError::Unavailable("swap"));
                }
                Ok(format_bytes(mem.swap_used() * 1024))
            }
            Component::Uptime => Ok(format_uptime(parse_uptime(&self.read_proc("uptime")?)?)),
            Component::Hostname => {
                self.read_trimmed(Path::new(&format!("{}/sys/kernel/hostname", self.proc_path)))
            }
            Component::KernelRelease => {
                self.read_trimmed(Path::new(&format!("{}/sys/kernel/osrelease", self.proc_path)))
            }
            Component::Entropy => {
                let path = format!("{}/sys/kernel/random/entropy_avail", self.proc_path);
                let raw = self.read_trimmed(Path::new(&path))?;
                let bits: u64 = raw
                    .parse()
                    .map_err(|_| CollectError::Parse(format!("invalid entropy {raw:?}")))?;
                Ok(bits.to_string())
            }
            Component::BatteryPerc(name) => {
                let dir = self.battery_dir(name.as_deref())?;
                let raw = self.read_trimmed(&dir.join("capacity"))?;
                let capacity: u8 = raw
                    .parse()
                    .map_err(|_| CollectError::Parse(format!("invalid capacity {raw:?}")))?;
                Ok(capacity.to_string())
            }
            Component::BatteryState(name) => {
                let dir = self.battery_dir(name.as_deref())?;
                let status = self.read_trimmed(&dir.join("status"))?;
                Ok(battery_symbol(&status).to_string())
            }
            Component::Temp(path) => {
                let raw = self.read_trimmed(path)?;
                let milli: i64 = raw
                    .parse()
                    .map_err(|_| CollectError::Parse(format!("invalid temperature {raw:?}")))?;
                Ok((milli / 1000).to_string())
            }
            Component::Cat(path) => self.read_trimmed(path),
        }
    }

    fn battery_dir(&self, name: Option<&str>) -> Result<PathBuf, CollectError> {
        let supplies = PathBuf::from(format!("{}/class/power_supply", self.sys_path));
        if let Some(name) = name {
            return Ok(supplies.join(name));
        }

        let mut batteries: Vec<PathBuf> = self
            .fs
            .read_dir(&supplies)?
            .into_iter()
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("BAT"))
            })
            .collect();
        batteries.sort();
        batteries
            .into_iter()
            .next()
            .ok_or(CollectError::Unavailable("battery"))
    }
}

/// Renders `now` with a strftime-style format.
///
/// Unknown specifiers produce an error instead of the panic `to_string`
/// would raise.
pub fn format_datetime<Tz>(now: &DateTime<Tz>, fmt: &str) -> Result<String, CollectError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", now.format(fmt))
        .map_err(|_| CollectError::Parse(format!("invalid datetime format {fmt:?}")))?;
    Ok(out)
}

fn battery_symbol(status: &str) -> &'static str {
    match status {
        "Charging" => "+",
        "Discharging" => "-",
        "Full" | "Not charging" => "o",
        _ => "?",
    }
}

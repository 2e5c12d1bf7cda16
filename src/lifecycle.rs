//! Process lifecycle driven by signals.
//!
//! The whole control state is one [`AtomicU8`]. Signal handlers only store to
//! it and the scheduler polls it, so nothing else is shared with
//! asynchronous signal context.
//!
//! | Signal                    | Effect                                  |
//! |---------------------------|-----------------------------------------|
//! | `SIGINT`/`SIGTERM`/`SIGHUP` | Terminating (sticky)                  |
//! | `SIGTSTP`                 | Paused: no sampling, no output          |
//! | `SIGCONT`                 | Running                                 |
//! | `SIGUSR1`                 | nothing; safe for liveness probes       |

use std::io;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::{Duration, Instant};

use signal_hook::consts::{SIGCONT, SIGTSTP, SIGUSR1};
use tracing::{debug, info};

/// Longest uninterrupted sleep; bounds how late a state change is noticed.
const POLL_SLICE: Duration = Duration::from_millis(100);

const RUNNING: u8 = 0;
const PAUSED: u8 = 1;
const TERMINATING: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Paused,
    Terminating,
}

/// Shared lifecycle flag.
#[derive(Debug)]
pub struct Lifecycle {
    state: AtomicU8,
}

static GLOBAL: Lifecycle = Lifecycle::new();

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(RUNNING),
        }
    }

    /// The instance the signal handlers write to.
    pub fn global() -> &'static Lifecycle {
        &GLOBAL
    }

    pub fn state(&self) -> State {
        match self.state.load(Ordering::SeqCst) {
            RUNNING => State::Running,
            PAUSED => State::Paused,
            _ => State::Terminating,
        }
    }

    pub fn is_terminating(&self) -> bool {
        self.state() == State::Terminating
    }

    /// Stops output until [`resume`](Self::resume). Ignored once terminating.
    pub fn pause(&self) {
        self.set_unless_terminating(PAUSED);
    }

    /// Ignored once terminating.
    pub fn resume(&self) {
        self.set_unless_terminating(RUNNING);
    }

    pub fn terminate(&self) {
        self.state.store(TERMINATING, Ordering::SeqCst);
    }

    // Lock-free CAS loop; safe to call from a signal handler.
    fn set_unless_terminating(&self, to: u8) {
        let _ = self
            .state
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |cur| {
                (cur != TERMINATING).then_some(to)
            });
    }

    /// Blocks while paused. Returns the state that ended the wait.
    pub fn wait_while_paused(&self) -> State {
        let mut state = self.state();
        if state != State::Paused {
            return state;
        }
        debug!("paused");
        while state == State::Paused {
            std::thread::sleep(POLL_SLICE);
            state = self.state();
        }
        debug!("resumed ({:?})", state);
        state
    }

    /// Sleeps until `deadline` in short slices.
    ///
    /// Returns early when terminating. Time spent paused counts towards the
    /// deadline, so resuming after a long pause starts the next cycle at once.
    pub fn sleep_until(&self, deadline: Instant) {
        loop {
            match self.state() {
                State::Terminating => return,
                State::Paused => {
                    self.wait_while_paused();
                    continue;
                }
                State::Running => {}
            }
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            std::thread::sleep((deadline - now).min(POLL_SLICE));
        }
    }
}

/// Routes process signals to `lifecycle`.
///
/// `SIGINT`, `SIGTERM` and `SIGHUP` go through `ctrlc`; the pause, resume and
/// no-op signals are registered directly with `signal-hook`.
pub fn install_handlers(lifecycle: &'static Lifecycle) -> io::Result<()> {
    ctrlc::set_handler(move || {
        info!("received termination signal");
        lifecycle.terminate();
    })
    .map_err(|e| io::Error::other(e.to_string()))?;

    // SAFETY: the closures only touch an atomic, which is async-signal-safe.
    unsafe {
        signal_hook::low_level::register(SIGTSTP, move || lifecycle.pause())?;
        signal_hook::low_level::register(SIGCONT, move || lifecycle.resume())?;
        signal_hook::low_level::register(SIGUSR1, || {})?;
    }

    debug!("signal handlers installed");
    Ok(())
}

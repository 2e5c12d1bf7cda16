//! Command-line arguments.

use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::config::INTERVAL_MS;
use crate::sink::OutputMode;

/// Status line generator for i3bar-compatible bars and the X root window.
#[derive(Parser, Debug)]
#[command(name = "rslstatus")]
pub struct Args {
    /// Print version and exit.
    #[arg(short = 'v')]
    pub print_version: bool,

    /// Write the i3bar protocol to stdout instead of setting the root window name.
    #[arg(short = 's')]
    pub streaming: bool,

    /// Emit a single status line and exit (implies -s).
    #[arg(short = '1')]
    pub once: bool,

    /// Cycle interval in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = INTERVAL_MS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Increase logging verbosity on stderr (--verbose for debug, twice for trace).
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Runtime settings resolved from [`Args`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub mode: OutputMode,
    pub one_shot: bool,
    pub interval: Duration,
}

impl Args {
    pub fn settings(&self) -> Settings {
        let mode = if self.streaming || self.once {
            OutputMode::Streaming
        } else {
            OutputMode::RootTitle
        };
        Settings {
            mode,
            one_shot: self.once,
            interval: Duration::from_millis(self.interval),
        }
    }
}

//! rslstatus - status line generator.
//!
//! Samples an ordered set of modules once per interval and publishes the
//! result either as the i3bar JSON protocol on stdout or as the X root
//! window name.
//!
//! - `registry` — module descriptors, in display order
//! - `collector` — sampling sources over `/proc` and `/sys`
//! - `format` — templates and the bounded status line
//! - `sink` — streaming and root-title outputs
//! - `lifecycle` — signal-driven run/pause/terminate state
//! - `scheduler` — the drift-compensated cycle loop
//! - `config` / `cli` — compile-time defaults and command-line flags

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod format;
pub mod lifecycle;
pub mod registry;
pub mod scheduler;
pub mod sink;
pub mod util;

pub use error::{ConfigError, Error};

//! Compile-time configuration.
//!
//! Edit [`default_registry`] and the constants below to change what the status
//! line shows. There is no config file.

use crate::collector::Component;
use crate::error::ConfigError;
use crate::registry::{ModuleDescriptor, Registry};

/// Time between the starts of two cycles, in milliseconds.
pub const INTERVAL_MS: u64 = 1000;

/// Text shown when a module has nothing to report.
pub const UNKNOWN_STR: &str = "n/a";

/// Capacity of the status line in bytes.
pub const MAX_LEN: usize = 2048;

/// Sampled values longer than this are clipped before templating.
pub const MAX_VALUE_LEN: usize = 128;

/// Longest accepted template. Together with [`MAX_VALUE_LEN`] this bounds a
/// single block well below [`MAX_LEN`] even after JSON escaping.
pub const MAX_TEMPLATE_LEN: usize = 128;

pub const DEFAULT_FG: &str = "#ffffff";
pub const DEFAULT_BG: &str = "#000000";

pub const PROC_PATH: &str = "/proc";
pub const SYS_PATH: &str = "/sys";

/// Modules shown by default, left to right.
pub fn default_registry() -> Result<Registry, ConfigError> {
    Registry::new(vec![
        ModuleDescriptor::new(Component::CpuPerc, "cpu %s%%")?.with_fg("#8ec07c"),
        ModuleDescriptor::new(Component::RamUsed, "mem %s")?.with_fg("#83a598"),
        ModuleDescriptor::new(Component::LoadAvg, "load %s")?,
        ModuleDescriptor::new(Component::BatteryPerc(None), "bat %s%%")?.with_fg("#fabd2f"),
        ModuleDescriptor::new(Component::Uptime, "up %s")?,
        ModuleDescriptor::new(Component::Datetime("%a %d %b %H:%M".into()), "%s")?,
    ])
}

//! Fatal error types.
//!
//! Anything here ends the process with a non-zero status. Per-module sampling
//! failures never reach this level; see
//! [`CollectError`](crate::collector::CollectError).

use crate::sink::SinkError;

/// Invalid module registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The registry has no modules.
    Empty,
    /// A color is not `#rgb` or `#rrggbb`.
    InvalidColor(String),
    /// A template is too long or has more than one placeholder.
    InvalidTemplate { template: String, reason: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Empty => write!(f, "no modules configured"),
            ConfigError::InvalidColor(c) => write!(f, "invalid color {:?}", c),
            ConfigError::InvalidTemplate { template, reason } => {
                write!(f, "invalid template {:?}: {}", template, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level error returned by the binary's run loop.
#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    Sink(SinkError),
    /// Installing a signal handler failed.
    Signal(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e),
            Error::Sink(e) => write!(f, "{}", e),
            Error::Signal(e) => write!(f, "signal handler: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::Sink(e) => Some(e),
            Error::Signal(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<SinkError> for Error {
    fn from(e: SinkError) -> Self {
        Error::Sink(e)
    }
}

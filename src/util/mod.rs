//! Utility modules for rslstatus.

pub mod fmt;

//! Mock filesystem implementations for testing.
//!
//! This module provides `MockFs` and pre-built scenarios for testing
//! samplers without requiring actual Linux `/proc` or `/sys` access.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;

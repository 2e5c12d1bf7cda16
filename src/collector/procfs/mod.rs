//! Parsers for the `/proc` files the components read.

pub mod parser;

pub use parser::{CpuTimes, MemInfo, ParseError};

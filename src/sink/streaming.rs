//! i3bar protocol writer.
//!
//! ```text
//! {"version":1,"stop_signal":20,"cont_signal":18}
//! [
//! [
//! {"full_text":"..."},{"full_text":"..."}
//! ],
//! ```
//!
//! The infinite array is never closed; the host reads until EOF.

use std::io::Write;

use serde::Serialize;
use signal_hook::consts::{SIGCONT, SIGTSTP};
use tracing::debug;

use super::{Sink, SinkError};

/// Protocol header announcing which signals pause and resume output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    pub version: u32,
    pub stop_signal: i32,
    pub cont_signal: i32,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            version: 1,
            stop_signal: SIGTSTP,
            cont_signal: SIGCONT,
        }
    }
}

pub struct StreamingSink<W: Write> {
    out: W,
}

impl<W: Write> StreamingSink<W> {
    /// Writes the header and opens the outer array.
    pub fn start(mut out: W) -> Result<Self, SinkError> {
        let header = Header::default();
        serde_json::to_writer(&mut out, &header).map_err(std::io::Error::from)?;
        out.write_all(b"\n[\n")?;
        out.flush()?;
        debug!(
            "streaming header sent (stop_signal={}, cont_signal={})",
            header.stop_signal, header.cont_signal
        );
        Ok(Self { out })
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for StreamingSink<W> {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.out, "[")?;
        writeln!(self.out, "{}", line)?;
        writeln!(self.out, "],")?;
        self.out.flush()?;
        Ok(())
    }

    fn shutdown(mut self: Box<Self>) -> Result<(), SinkError> {
        self.out.flush()?;
        Ok(())
    }
}

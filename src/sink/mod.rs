//! Output sinks.
//!
//! One sink is chosen at startup and owns its output channel until
//! [`Sink::shutdown`]:
//!
//! - [`StreamingSink`] writes the i3bar JSON protocol to a text stream.
//! - [`RootTitleSink`] stores the line as the X root window name, which is
//!   what dwm and similar window managers display.
//!
//! Any sink error is fatal to the process.

mod root_title;
mod streaming;

pub use root_title::RootTitleSink;
pub use streaming::{Header, StreamingSink};

use std::io;

use x11rb::errors::{ConnectError, ConnectionError, ReplyError};

/// Where status lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Streaming,
    RootTitle,
}

/// Destination for rendered status lines.
pub trait Sink {
    /// Publishes one cycle's line.
    fn emit(&mut self, line: &str) -> Result<(), SinkError>;

    /// Releases the output channel. Called once, after the last `emit`.
    fn shutdown(self: Box<Self>) -> Result<(), SinkError>;
}

#[derive(Debug)]
pub enum SinkError {
    /// Writing or flushing the output stream failed.
    Io(io::Error),
    /// Could not connect to the X server.
    Connect(ConnectError),
    /// The X connection broke.
    Connection(ConnectionError),
    /// The X server rejected a request.
    Reply(ReplyError),
    /// The display has no screen with the default index.
    NoScreen(usize),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkError::Io(e) => write!(f, "write: {}", e),
            SinkError::Connect(e) => write!(f, "failed to open display: {}", e),
            SinkError::Connection(e) => write!(f, "X connection: {}", e),
            SinkError::Reply(e) => write!(f, "X request failed: {}", e),
            SinkError::NoScreen(n) => write!(f, "display has no screen {}", n),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Io(e) => Some(e),
            SinkError::Connect(e) => Some(e),
            SinkError::Connection(e) => Some(e),
            SinkError::Reply(e) => Some(e),
            SinkError::NoScreen(_) => None,
        }
    }
}

impl From<io::Error> for SinkError {
    fn from(e: io::Error) -> Self {
        SinkError::Io(e)
    }
}

impl From<ConnectError> for SinkError {
    fn from(e: ConnectError) -> Self {
        SinkError::Connect(e)
    }
}

impl From<ConnectionError> for SinkError {
    fn from(e: ConnectionError) -> Self {
        SinkError::Connection(e)
    }
}

impl From<ReplyError> for SinkError {
    fn from(e: ReplyError) -> Self {
        SinkError::Reply(e)
    }
}

/// Opens the sink for `mode`: stdout for streaming, `$DISPLAY` for the root
/// window title.
pub fn open(mode: OutputMode) -> Result<Box<dyn Sink>, SinkError> {
    match mode {
        OutputMode::Streaming => Ok(Box::new(StreamingSink::start(io::stdout().lock())?)),
        OutputMode::RootTitle => Ok(Box::new(RootTitleSink::connect(None)?)),
    }
}

//! X root window name sink.

use tracing::{debug, info};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{AtomEnum, PropMode, Window};
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use super::{Sink, SinkError};

/// Writes each line to `WM_NAME` of the default screen's root window.
pub struct RootTitleSink {
    conn: RustConnection,
    root: Window,
}

impl RootTitleSink {
    /// Connects to `display`, or to `$DISPLAY` when `None`.
    pub fn connect(display: Option<&str>) -> Result<Self, SinkError> {
        let (conn, screen_num) = x11rb::connect(display)?;
        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .map(|screen| screen.root)
            .ok_or(SinkError::NoScreen(screen_num))?;
        info!("connected to X display, root window {:#x}", root);
        Ok(Self { conn, root })
    }

    fn set_title(&self, title: &str) -> Result<(), SinkError> {
        self.conn
            .change_property8(
                PropMode::REPLACE,
                self.root,
                AtomEnum::WM_NAME,
                AtomEnum::STRING,
                title.as_bytes(),
            )?
            .check()?;
        Ok(())
    }
}

impl Sink for RootTitleSink {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        self.set_title(line)
    }

    fn shutdown(self: Box<Self>) -> Result<(), SinkError> {
        self.set_title("")?;
        self.conn.flush()?;
        debug!("root window title cleared");
        Ok(())
    }
}

//! Fixed-capacity status buffer.

use crate::config::MAX_LEN;

/// Returned when an append would exceed the buffer capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncated {
    pub needed: usize,
    pub remaining: usize,
}

impl std::fmt::Display for Truncated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "status line full: {} bytes needed, {} remaining",
            self.needed, self.remaining
        )
    }
}

impl std::error::Error for Truncated {}

/// Append-or-truncate buffer rebuilt every cycle.
///
/// Appends are all-or-nothing: a piece that does not fit leaves the buffer
/// unchanged, so the contents are always a sequence of whole pieces and never
/// longer than the capacity. The backing allocation is made once.
#[derive(Debug)]
pub struct StatusLine {
    buf: String,
    capacity: usize,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::with_capacity(MAX_LEN)
    }
}

impl StatusLine {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Appends `piece` if it fits, returning the number of bytes written.
    pub fn try_push(&mut self, piece: &str) -> Result<usize, Truncated> {
        if piece.len() > self.remaining() {
            return Err(Truncated {
                needed: piece.len(),
                remaining: self.remaining(),
            });
        }
        self.buf.push_str(piece);
        Ok(piece.len())
    }

    /// Removes a trailing `sep` if present; returns whether one was removed.
    pub fn strip_trailing(&mut self, sep: char) -> bool {
        if self.buf.ends_with(sep) {
            self.buf.pop();
            true
        } else {
            false
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_push_within_capacity() {
        let mut line = StatusLine::with_capacity(8);
        assert_eq!(line.try_push("abc,"), Ok(4));
        assert_eq!(line.try_push("defg"), Ok(4));
        assert_eq!(line.remaining(), 0);
        assert_eq!(line.as_str(), "abc,defg");
    }

    #[test]
    fn test_try_push_is_all_or_nothing() {
        let mut line = StatusLine::with_capacity(6);
        line.try_push("abc,").unwrap();
        let err = line.try_push("def,").unwrap_err();
        assert_eq!(
            err,
            Truncated {
                needed: 4,
                remaining: 2
            }
        );
        assert_eq!(line.as_str(), "abc,");
    }

    #[test]
    fn test_strip_trailing_only_when_present() {
        let mut line = StatusLine::with_capacity(16);
        assert!(!line.strip_trailing(','));
        line.try_push("{},").unwrap();
        assert!(line.strip_trailing(','));
        assert_eq!(line.as_str(), "{}");
        assert!(!line.strip_trailing(','));
        assert_eq!(line.as_str(), "{}");
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut line = StatusLine::default();
        line.try_push("x").unwrap();
        line.clear();
        assert!(line.is_empty());
        assert_eq!(line.capacity(), MAX_LEN);
    }
}

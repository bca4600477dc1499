//! # Output Sink
//!
//! The document is written into any `std::io::Write`: an in-memory buffer,
//! a file, a socket. The engine assumes exclusive, ordered access to the
//! sink for the duration of one export, does no buffering of its own and
//! never retries a failed write.

use std::io::{self, Write};

/// Pass-through writer that counts the bytes the inner sink accepted.
pub struct CountingSink<'a, W: Write + ?Sized> {
    inner: &'a mut W,
    written: u64,
}

impl<'a, W: Write + ?Sized> CountingSink<'a, W> {
    pub fn new(inner: &'a mut W) -> Self {
        Self { inner, written: 0 }
    }

    /// Bytes accepted so far.
    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl<W: Write + ?Sized> Write for CountingSink<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written = self.written.saturating_add(n as u64);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn counts_accepted_bytes() {
        let mut buffer = Vec::new();
        let mut sink = CountingSink::new(&mut buffer);
        sink.write_all(b"{\"a\":").unwrap();
        sink.write_all(b"1}").unwrap();
        assert_eq!(sink.written(), 7);
        assert_eq!(buffer, b"{\"a\":1}");
    }

    #[test]
    fn propagates_inner_failure() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut closed = Closed;
        let mut sink = CountingSink::new(&mut closed);
        let err = sink.write_all(b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(sink.written(), 0);
    }
}

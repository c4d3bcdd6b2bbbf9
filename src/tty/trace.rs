//! Byte-level tracing of terminal traffic
//!
//! Logs each read and write at debug level as `<prefix>: <n> <bytes>`,
//! with bytes escaped so control characters stay visible.

use std::io::{self, Read, Write};

pub struct LoggingWriter<W> {
    prefix: &'static str,
    inner: W,
}

impl<W: Write> LoggingWriter<W> {
    pub fn new(prefix: &'static str, inner: W) -> Self {
        Self { prefix, inner }
    }
}

impl<W: Write> Write for LoggingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.inner.write(buf);
        match &result {
            Ok(n) => log::debug!("{}: {} {}", self.prefix, n, buf[..*n].escape_ascii()),
            Err(e) => log::debug!("{}: error {}", self.prefix, e),
        }
        result
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

pub struct LoggingReader<R> {
    prefix: &'static str,
    inner: R,
}

impl<R: Read> LoggingReader<R> {
    pub fn new(prefix: &'static str, inner: R) -> Self {
        Self { prefix, inner }
    }
}

impl<R: Read> Read for LoggingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let result = self.inner.read(buf);
        match &result {
            Ok(n) => log::debug!("{}: {} {}", self.prefix, n, buf[..*n].escape_ascii()),
            Err(e) => log::debug!("{}: error {}", self.prefix, e),
        }
        result
    }
}

//! Splits long payloads into several screen DCS envelopes
//!
//! screen truncates a single DCS string past a fixed length, so every
//! `CHUNK_SIZE` payload bytes the envelope is closed and reopened.
//! Based on hterm's osc52.sh.

use std::io::{self, Write};

use super::framer::{DCS_CLOSE, DCS_OPEN};

/// base64 MIME line length
pub const CHUNK_SIZE: u64 = 76;

const REOPEN: [u8; 4] = [DCS_CLOSE[0], DCS_CLOSE[1], DCS_OPEN[0], DCS_OPEN[1]];

pub struct ChunkingWriter<W> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> ChunkingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }
}

impl<W: Write> Write for ChunkingWriter<W> {
    fn write(&mut self, mut buf: &[u8]) -> io::Result<usize> {
        let mut total = 0;

        while !buf.is_empty() {
            let until_boundary = CHUNK_SIZE - self.bytes_written % CHUNK_SIZE;
            let take = buf.len().min(until_boundary as usize);

            let n = self.inner.write(&buf[..take])?;
            if n == 0 {
                break;
            }
            self.bytes_written += n as u64;
            total += n;
            buf = &buf[n..];

            if self.bytes_written % CHUNK_SIZE == 0 {
                self.inner.write_all(&REOPEN)?;
            }
        }

        Ok(total)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
#[path = "chunking_tests.rs"]
mod chunking_tests;

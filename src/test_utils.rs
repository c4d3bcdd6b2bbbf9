//! Shared test utilities for osc
//!
//! Simulated terminals used across the clipboard tests.

#[cfg(test)]
pub mod test_helpers {
    use std::io::{self, Read};

    /// Terminal that never answers: every read blocks forever
    pub struct SilentTerminal;

    impl Read for SilentTerminal {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            loop {
                std::thread::park();
            }
        }
    }

    /// Terminal that delivers its response one byte per read
    pub struct OneByteReader {
        data: Vec<u8>,
        pos: usize,
    }

    impl OneByteReader {
        pub fn new(data: &[u8]) -> Self {
            Self {
                data: data.to_vec(),
                pos: 0,
            }
        }
    }

    impl Read for OneByteReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos >= self.data.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }
}

// Stdin/stdout transport for platforms without a tty device to open

use std::io::{self, Stdout, Write};
use std::path::Path;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::error::OscError;

pub type TtyReader = io::Stdin;

pub struct Tty {
    stdout: Stdout,
}

impl Tty {
    pub fn open(device: &Path) -> Result<Self, OscError> {
        log::debug!("Using stdio tty, ignoring device {}", device.display());
        enable_raw_mode().map_err(|source| OscError::OpenTty {
            device: device.to_path_buf(),
            source,
        })?;
        Ok(Tty {
            stdout: io::stdout(),
        })
    }

    pub fn reader(&self) -> io::Result<TtyReader> {
        Ok(io::stdin())
    }
}

impl Write for Tty {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Drop for Tty {
    fn drop(&mut self) {
        let _ = self.stdout.flush();
        let _ = disable_raw_mode();
    }
}

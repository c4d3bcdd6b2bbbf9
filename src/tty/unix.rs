use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use nix::sys::termios::{self, SetArg, Termios};

use crate::error::OscError;

/// Read half handed to the header reader thread
pub type TtyReader = File;

pub struct Tty {
    file: File,
    saved: Termios,
}

impl Tty {
    pub fn open(device: &Path) -> Result<Self, OscError> {
        log::debug!("Using tty device: {}", device.display());
        let open_error = |source: io::Error| OscError::OpenTty {
            device: device.to_path_buf(),
            source,
        };

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(device)
            .map_err(open_error)?;

        let saved = termios::tcgetattr(&file).map_err(|e| open_error(e.into()))?;
        let mut raw = saved.clone();
        termios::cfmakeraw(&mut raw);
        termios::tcsetattr(&file, SetArg::TCSANOW, &raw).map_err(|e| open_error(e.into()))?;

        Ok(Tty { file, saved })
    }

    /// Independent read handle on the same device
    ///
    /// An abandoned header read keeps this descriptor open until the process exits.
    pub fn reader(&self) -> io::Result<TtyReader> {
        self.file.try_clone()
    }
}

impl Write for Tty {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Drop for Tty {
    fn drop(&mut self) {
        if let Err(e) = termios::tcdrain(&self.file) {
            log::debug!("tcdrain failed: {}", e);
        }
        if let Err(e) = termios::tcsetattr(&self.file, SetArg::TCSANOW, &self.saved) {
            log::error!("Failed to restore terminal mode: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_device() {
        let result = Tty::open(Path::new("/nonexistent/tty"));
        assert!(matches!(result, Err(OscError::OpenTty { .. })));
    }

    #[test]
    fn test_open_regular_file_is_not_a_tty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = Tty::open(file.path());
        assert!(matches!(result, Err(OscError::OpenTty { .. })));
    }
}

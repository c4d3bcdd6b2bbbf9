//! Copy payload loading
//!
//! All input is read before the terminal is touched, so a missing file never
//! leaves half an escape sequence on screen.

use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use crate::error::OscError;

/// Concatenate `files` in order, or read stdin when there are none
pub fn load_payload(files: &[PathBuf]) -> Result<Vec<u8>, OscError> {
    if files.is_empty() {
        read_stdin()
    } else {
        read_files(files)
    }
}

fn read_stdin() -> Result<Vec<u8>, OscError> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(OscError::NothingOnStdin);
    }

    let mut data = Vec::new();
    stdin
        .read_to_end(&mut data)
        .map_err(|source| OscError::ReadInput {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    log::debug!("Read {} bytes from stdin", data.len());
    Ok(data)
}

pub fn read_files(files: &[PathBuf]) -> Result<Vec<u8>, OscError> {
    let mut data = Vec::new();
    for path in files {
        let n = append_file(path, &mut data).map_err(|source| OscError::ReadInput {
            path: path.clone(),
            source,
        })?;
        log::debug!("Read {} bytes from {}", n, path.display());
    }
    Ok(data)
}

fn append_file(path: &Path, data: &mut Vec<u8>) -> io::Result<u64> {
    let mut file = File::open(path)?;
    io::copy(&mut file, data)
}

//! tmux command interface
//!
//! tmux does not reliably forward an OSC 52 reply from the outer terminal,
//! so paste under tmux goes through tmux's own paste buffer instead.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use std::thread;
use std::time::Duration;

use crate::error::{OscError, Phase};

/// Time given to tmux to sync its buffer with the outer terminal's clipboard
/// after a client refresh. Same delay as oscclip.
pub const DEFAULT_SYNC_DELAY: Duration = Duration::from_millis(50);

/// Runs tmux subcommands and returns their stdout
pub trait TmuxRunner {
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, OscError>;
}

impl<T: TmuxRunner + ?Sized> TmuxRunner for &T {
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, OscError> {
        (**self).run(args)
    }
}

/// Runs the `tmux` binary found in PATH
pub struct SystemTmux {
    binary: PathBuf,
}

impl SystemTmux {
    pub fn locate() -> Result<Self, OscError> {
        let binary = which::which("tmux").map_err(|_| OscError::TmuxNotFound)?;
        log::debug!("Using tmux binary {:?}", binary);
        Ok(Self { binary })
    }
}

impl TmuxRunner for SystemTmux {
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, OscError> {
        let command = format!("tmux {}", args.join(" "));
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|source| OscError::TmuxSpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OscError::TmuxFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

pub struct TmuxBridge<R> {
    runner: R,
    sync_delay: Duration,
}

impl<R: TmuxRunner> TmuxBridge<R> {
    pub fn new(runner: R, sync_delay: Duration) -> Self {
        Self { runner, sync_delay }
    }

    /// Copy under tmux needs `allow-passthrough` for the DCS envelope
    pub fn check_allow_passthrough(&self) -> Result<(), OscError> {
        self.check_option(
            &["show", "-gwsv", "allow-passthrough"],
            "allow-passthrough",
            &["on", "all"],
            "'on' or 'all'",
        )
    }

    /// Paste under tmux needs tmux to track the outer clipboard
    pub fn check_set_clipboard(&self) -> Result<(), OscError> {
        self.check_option(
            &["show", "-v", "set-clipboard"],
            "set-clipboard",
            &["on", "external"],
            "'on' or 'external'",
        )
    }

    fn check_option(
        &self,
        args: &[&str],
        option: &'static str,
        accepted: &[&str],
        expected: &'static str,
    ) -> Result<(), OscError> {
        let out = self.runner.run(args)?;
        let value = String::from_utf8_lossy(&out).trim().to_string();
        log::debug!("'tmux {}': {}", args.join(" "), value);

        if accepted.contains(&value.as_str()) {
            Ok(())
        } else {
            Err(OscError::TmuxOption {
                option,
                expected,
                actual: value,
            })
        }
    }

    /// Write tmux's paste buffer, synced from the outer clipboard, to `out`
    pub fn paste<W: Write>(&self, out: &mut W) -> Result<usize, OscError> {
        self.check_set_clipboard()?;

        let refreshed = self.runner.run(&["refresh-client", "-l"])?;
        log::debug!(
            "tmux refresh-client output: {}",
            String::from_utf8_lossy(&refreshed)
        );

        thread::sleep(self.sync_delay);

        let buffer = self.runner.run(&["save-buffer", "-"])?;
        out.write_all(&buffer)
            .and_then(|_| out.flush())
            .map_err(OscError::io(Phase::Output))?;
        Ok(buffer.len())
    }
}

#[cfg(test)]
#[path = "tmux_tests.rs"]
mod tmux_tests;

// Validated settings for one copy or paste invocation

use std::path::PathBuf;
use std::time::Duration;

use super::env::Environment;
use crate::clipboard::tmux::DEFAULT_SYNC_DELAY;
use crate::clipboard::{ClipboardSelector, MultiplexerMode, SequenceWrapper};
use crate::error::OscError;

pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Raw user-supplied options, before validation
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub clipboard: String,
    pub timeout_secs: f64,
    pub device: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub selector: ClipboardSelector,
    pub mode: MultiplexerMode,
    pub device: PathBuf,
    pub timeout: Duration,
    pub tmux_sync_delay: Duration,
}

impl Settings {
    /// Validate `options`, rejecting bad input before any I/O happens
    pub fn resolve(options: &Options, env: &Environment) -> Result<Self, OscError> {
        let selector = ClipboardSelector::new(&options.clipboard)?;
        let timeout = parse_timeout(options.timeout_secs)?;

        let mode = env.multiplexer_mode();
        let device = options
            .device
            .clone()
            .unwrap_or_else(|| env.default_device(mode));

        Ok(Settings {
            selector,
            mode,
            device,
            timeout,
            tmux_sync_delay: DEFAULT_SYNC_DELAY,
        })
    }

    pub fn wrapper(&self) -> SequenceWrapper {
        SequenceWrapper::new(self.mode, &self.selector)
    }
}

fn parse_timeout(secs: f64) -> Result<Duration, OscError> {
    Duration::try_from_secs_f64(secs).map_err(|_| OscError::InvalidTimeout(secs))
}

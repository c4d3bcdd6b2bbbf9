//! Copy and paste commands
//!
//! Wires settings, input, the tty transport and the clipboard engine together.

use std::io::Write;
use std::path::PathBuf;

use crate::clipboard::tmux::{SystemTmux, TmuxBridge, TmuxRunner};
use crate::clipboard::{self, MultiplexerMode, PasteOptions};
use crate::config::Settings;
use crate::error::{OscError, Phase};
use crate::input::load_payload;
use crate::tty::{LoggingReader, LoggingWriter, Tty};

/// Copy the contents of `files` (stdin when empty) to the clipboard
pub fn run_copy(settings: &Settings, files: &[PathBuf]) -> Result<u64, OscError> {
    copy_with_tmux(settings, files, || tmux_bridge(settings))
}

// Under tmux, passthrough is checked before input is read or the tty opened
fn copy_with_tmux<T, F>(
    settings: &Settings,
    files: &[PathBuf],
    tmux: F,
) -> Result<u64, OscError>
where
    T: TmuxRunner,
    F: FnOnce() -> Result<TmuxBridge<T>, OscError>,
{
    if settings.mode == MultiplexerMode::Tmux {
        tmux()?.check_allow_passthrough()?;
    }

    let payload = load_payload(files)?;

    let mut tty = Tty::open(&settings.device)?;
    clipboard::copy(
        LoggingWriter::new("tty write", &mut tty),
        &settings.wrapper(),
        settings.mode,
        &mut payload.as_slice(),
    )
}

/// Write the clipboard contents to `out`
pub fn run_paste<W: Write>(settings: &Settings, out: &mut W) -> Result<usize, OscError> {
    match settings.mode {
        MultiplexerMode::Tmux => tmux_bridge(settings)?.paste(out),
        MultiplexerMode::Zellij => Err(OscError::UnsupportedMode),
        MultiplexerMode::None | MultiplexerMode::Screen => {
            let data = paste_from_tty(settings)?;
            out.write_all(&data)
                .and_then(|_| out.flush())
                .map_err(OscError::io(Phase::Output))?;
            Ok(data.len())
        }
    }
}

// The tty is restored before anything is written to `out`
fn paste_from_tty(settings: &Settings) -> Result<Vec<u8>, OscError> {
    let mut tty = Tty::open(&settings.device)?;
    let reader = tty.reader().map_err(|source| OscError::OpenTty {
        device: settings.device.clone(),
        source,
    })?;

    clipboard::paste(
        &settings.wrapper(),
        LoggingReader::new("tty read", reader),
        &mut LoggingWriter::new("tty write", &mut tty),
        &PasteOptions::new(settings.timeout),
    )
}

fn tmux_bridge(settings: &Settings) -> Result<TmuxBridge<SystemTmux>, OscError> {
    Ok(TmuxBridge::new(
        SystemTmux::locate()?,
        settings.tmux_sync_delay,
    ))
}

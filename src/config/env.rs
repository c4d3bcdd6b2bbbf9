// Environment signals used to pick the multiplexer mode and tty device

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::clipboard::MultiplexerMode;

const DEFAULT_TTY: &str = "/dev/tty";

/// Snapshot of the environment variables osc cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub tmux: Option<OsString>,
    pub zellij: Option<OsString>,
    pub term: Option<String>,
    pub ssh_tty: Option<PathBuf>,
}

impl Environment {
    pub fn from_env() -> Self {
        Environment {
            tmux: env::var_os("TMUX"),
            zellij: env::var_os("ZELLIJ"),
            term: env::var("TERM").ok(),
            ssh_tty: env::var_os("SSH_TTY").map(PathBuf::from),
        }
    }

    /// Mode precedence: tmux, then zellij, then a screen-family terminal
    pub fn multiplexer_mode(&self) -> MultiplexerMode {
        if is_set(&self.tmux) {
            MultiplexerMode::Tmux
        } else if is_set(&self.zellij) {
            MultiplexerMode::Zellij
        } else if self.is_screen_term() {
            MultiplexerMode::Screen
        } else {
            MultiplexerMode::None
        }
    }

    fn is_screen_term(&self) -> bool {
        self.term
            .as_deref()
            .is_some_and(|term| term.starts_with("screen"))
    }

    /// Device to talk to when none was given explicitly
    pub fn default_device(&self, mode: MultiplexerMode) -> PathBuf {
        if mode == MultiplexerMode::Screen {
            return PathBuf::from(DEFAULT_TTY);
        }
        match &self.ssh_tty {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => PathBuf::from(DEFAULT_TTY),
        }
    }
}

fn is_set(var: &Option<OsString>) -> bool {
    var.as_ref().is_some_and(|v| !v.is_empty())
}

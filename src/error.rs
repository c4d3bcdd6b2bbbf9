use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// The step of a copy or paste operation an error happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    WriteOpen,
    WritePayload,
    FinishEncoder,
    WriteClose,
    Flush,
    Query,
    AwaitHeader,
    SkipMetadata,
    ReadBody,
    Output,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::WriteOpen => "writing osc open",
            Phase::WritePayload => "writing data",
            Phase::FinishEncoder => "closing encoder",
            Phase::WriteClose => "writing osc close",
            Phase::Flush => "flushing tty",
            Phase::Query => "writing osc query",
            Phase::AwaitHeader => "reading osc header",
            Phase::SkipMetadata => "reading clipboard metadata",
            Phase::ReadBody => "reading clipboard body",
            Phase::Output => "writing output",
        };
        f.write_str(name)
    }
}

/// Coarse classification of [`OscError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Precondition,
    Transport,
    Protocol,
    Timeout,
    Unsupported,
}

#[derive(Debug, Error)]
pub enum OscError {
    #[error("Invalid clipboard flag: {0:?} (expected zero or more of c, p, q, s, 0-7)")]
    InvalidSelector(String),

    #[error("Invalid timeout: {0} (expected a non-negative number of seconds)")]
    InvalidTimeout(f64),

    #[error("Nothing on stdin")]
    NothingOnStdin,

    #[error("Error reading {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tmux {option} must be set to {expected} (currently '{actual}')")]
    TmuxOption {
        option: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("tmux binary not found in PATH")]
    TmuxNotFound,

    #[error("Error running '{command}': {source}")]
    TmuxSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed ({status}): {stderr}")]
    TmuxFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Error opening tty {}: {source}", .device.display())]
    OpenTty {
        device: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error {phase}: {source}")]
    Io {
        phase: Phase,
        #[source]
        source: std::io::Error,
    },

    #[error("osc header mismatch: \"{}\"", .0.escape_ascii())]
    HeaderMismatch(Vec<u8>),

    #[error("Malformed response while {phase}: {reason}: \"{}\"", .bytes.escape_ascii())]
    MalformedFrame {
        phase: Phase,
        reason: &'static str,
        bytes: Vec<u8>,
    },

    #[error("Error decoding clipboard body \"{}\": {source}", .body.escape_ascii())]
    Decode {
        #[source]
        source: base64::DecodeError,
        body: Vec<u8>,
    },

    #[error("tty read timeout after {0:?}")]
    Timeout(Duration),

    #[error("tty read cancelled")]
    Cancelled,

    #[error("paste unsupported under zellij, unset ZELLIJ env var to force")]
    UnsupportedMode,
}

impl OscError {
    pub fn io(phase: Phase) -> impl FnOnce(std::io::Error) -> Self {
        move |source| OscError::Io { phase, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            OscError::InvalidSelector(_)
            | OscError::InvalidTimeout(_)
            | OscError::NothingOnStdin
            | OscError::ReadInput { .. } => ErrorKind::Validation,
            OscError::TmuxOption { .. } => ErrorKind::Precondition,
            OscError::TmuxNotFound
            | OscError::TmuxSpawn { .. }
            | OscError::TmuxFailed { .. }
            | OscError::OpenTty { .. }
            | OscError::Io { .. } => ErrorKind::Transport,
            OscError::HeaderMismatch(_)
            | OscError::MalformedFrame { .. }
            | OscError::Decode { .. } => ErrorKind::Protocol,
            OscError::Timeout(_) | OscError::Cancelled => ErrorKind::Timeout,
            OscError::UnsupportedMode => ErrorKind::Unsupported,
        }
    }
}

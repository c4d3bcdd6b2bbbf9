//! OSC 52 paste
//!
//! Sends the query sequence, then parses the terminal's reply
//! `ESC ] 5 2 ; <selectors> ; <base64> (BEL | ESC \)`.
//! Only the header read is bounded by the timeout: once a header arrives
//! the terminal has proven it speaks OSC 52, and the rest is read blocking.

use std::io::{BufRead, BufReader, Read, Write};
use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use memchr::memchr2;
use tokio_util::sync::CancellationToken;

use super::framer::{BEL, ESC, OSC52_HEADER, SequenceWrapper};
use super::timed_read::{ReadOutcome, read_until_timeout};
use crate::error::{OscError, Phase};

/// Largest body excerpt carried by a protocol error
const MAX_ERROR_EXCERPT: usize = 64;

#[derive(Debug, Clone)]
pub struct PasteOptions {
    pub timeout: Duration,
    pub cancel: CancellationToken,
}

impl PasteOptions {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            cancel: CancellationToken::new(),
        }
    }
}

/// Query the clipboard through `tty` and decode the reply read from `reader`
pub fn paste<R, W>(
    wrapper: &SequenceWrapper,
    reader: R,
    tty: &mut W,
    options: &PasteOptions,
) -> Result<Vec<u8>, OscError>
where
    R: Read + Send + 'static,
    W: Write,
{
    log::debug!(
        "Beginning osc52 paste operation, timeout: {:?}",
        options.timeout
    );

    tty.write_all(&wrapper.query())
        .and_then(|_| tty.flush())
        .map_err(OscError::io(Phase::Query))?;

    let mut reader = await_header(BufReader::new(reader), options)?;

    let mut metadata = Vec::new();
    reader
        .read_until(b';', &mut metadata)
        .map_err(OscError::io(Phase::SkipMetadata))?;
    if metadata.last() != Some(&b';') {
        return Err(OscError::MalformedFrame {
            phase: Phase::SkipMetadata,
            reason: "response ended inside clipboard metadata",
            bytes: metadata,
        });
    }
    log::debug!("Clipboard metadata: {}", metadata.escape_ascii());

    let body = read_body(&mut reader)?;
    log::debug!("Read {} byte clipboard body", body.len());

    let data = decode_body(body)?;
    log::debug!("Ended osc52");
    Ok(data)
}

fn await_header<R>(reader: BufReader<R>, options: &PasteOptions) -> Result<BufReader<R>, OscError>
where
    R: Read + Send + 'static,
{
    let outcome = read_until_timeout(reader, b';', options.timeout, &options.cancel)
        .map_err(OscError::io(Phase::AwaitHeader))?;

    match outcome {
        ReadOutcome::Data((reader, result)) => {
            let header = result.map_err(OscError::io(Phase::AwaitHeader))?;
            if header != OSC52_HEADER {
                return Err(OscError::HeaderMismatch(header));
            }
            Ok(reader)
        }
        ReadOutcome::Timeout => Err(OscError::Timeout(options.timeout)),
        ReadOutcome::Cancelled => Err(OscError::Cancelled),
    }
}

/// Read up to the string terminator, which is excluded from the result
///
/// An `ESC` ending one read is matched against the first byte of the next.
pub fn read_body<R: BufRead>(reader: &mut R) -> Result<Vec<u8>, OscError> {
    let mut body = Vec::new();
    let mut pending_esc = false;

    loop {
        let available = reader.fill_buf().map_err(OscError::io(Phase::ReadBody))?;
        if available.is_empty() {
            body.truncate(MAX_ERROR_EXCERPT);
            return Err(OscError::MalformedFrame {
                phase: Phase::ReadBody,
                reason: "response ended before string terminator",
                bytes: body,
            });
        }

        if pending_esc {
            let next = available[0];
            if next != b'\\' {
                return Err(OscError::MalformedFrame {
                    phase: Phase::ReadBody,
                    reason: "ESC not followed by '\\'",
                    bytes: vec![ESC, next],
                });
            }
            reader.consume(1);
            return Ok(body);
        }

        match memchr2(BEL, ESC, available) {
            Some(i) => {
                let terminator = available[i];
                body.extend_from_slice(&available[..i]);
                reader.consume(i + 1);
                if terminator == BEL {
                    return Ok(body);
                }
                pending_esc = true;
            }
            None => {
                let n = available.len();
                body.extend_from_slice(available);
                reader.consume(n);
            }
        }
    }
}

fn decode_body(body: Vec<u8>) -> Result<Vec<u8>, OscError> {
    STANDARD.decode(&body).map_err(|source| {
        let mut body = body;
        body.truncate(MAX_ERROR_EXCERPT);
        OscError::Decode { source, body }
    })
}

#[cfg(test)]
#[path = "paste_tests.rs"]
mod paste_tests;

//! OSC 52 copy
//!
//! Streams the payload through a base64 encoder into the terminal:
//! `open base64(payload) close`. Under screen the encoded text is split into
//! several DCS envelopes by [`ChunkingWriter`].

use std::io::{self, BufWriter, Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::write::EncoderWriter;

use super::chunking::ChunkingWriter;
use super::framer::{MultiplexerMode, SequenceWrapper};
use crate::error::{OscError, Phase};

/// Write `payload` to the clipboard through `tty`
///
/// Returns the number of payload bytes copied. Any I/O error aborts the
/// whole sequence.
pub fn copy<W: Write, R: Read>(
    tty: W,
    wrapper: &SequenceWrapper,
    mode: MultiplexerMode,
    payload: &mut R,
) -> Result<u64, OscError> {
    log::debug!("Beginning osc52 copy operation");
    let mut out = BufWriter::new(tty);

    out.write_all(wrapper.open())
        .map_err(OscError::io(Phase::WriteOpen))?;

    let copied = if mode.chunks_payload() {
        encode_payload(ChunkingWriter::new(&mut out), payload)?
    } else {
        encode_payload(&mut out, payload)?
    };
    log::debug!("Encoded {} payload bytes", copied);

    out.write_all(wrapper.close())
        .map_err(OscError::io(Phase::WriteClose))?;
    out.flush().map_err(OscError::io(Phase::Flush))?;

    Ok(copied)
}

fn encode_payload<W: Write, R: Read>(sink: W, payload: &mut R) -> Result<u64, OscError> {
    let mut encoder = EncoderWriter::new(sink, &STANDARD);
    let copied = io::copy(payload, &mut encoder).map_err(OscError::io(Phase::WritePayload))?;
    encoder
        .finish()
        .map_err(OscError::io(Phase::FinishEncoder))?;
    Ok(copied)
}

/// Encode a complete copy sequence in memory
pub fn encode_osc52(
    wrapper: &SequenceWrapper,
    mode: MultiplexerMode,
    payload: &[u8],
) -> Result<Vec<u8>, OscError> {
    let mut sequence = Vec::new();
    copy(&mut sequence, wrapper, mode, &mut &payload[..])?;
    Ok(sequence)
}

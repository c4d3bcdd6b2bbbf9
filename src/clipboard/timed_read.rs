//! Timeout-bounded, cancellable delimiter read
//!
//! Blocking terminal reads cannot be interrupted portably, so the read runs
//! on its own thread and the caller waits on a channel. When the deadline
//! passes or the token is cancelled first, the thread is left blocked on the
//! device: at most one idle read leaks per timed-out call, and its late
//! result is dropped into a channel nobody listens to. The channel holds one
//! value so that late send never blocks.

use std::io::{self, BufRead};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

/// How often the waiting side checks the cancellation token
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Debug)]
pub enum ReadOutcome<T> {
    Data(T),
    Timeout,
    Cancelled,
}

/// Bytes read up to and including the delimiter, plus the reader to continue with
pub type DelimitedRead<R> = (R, io::Result<Vec<u8>>);

/// Read until `delim` on a helper thread, giving up after `timeout`
///
/// Never reports `Timeout` before `timeout` has elapsed. A timeout too large
/// to represent as an `Instant` waits without a deadline.
pub fn read_until_timeout<R>(
    reader: R,
    delim: u8,
    timeout: Duration,
    cancel: &CancellationToken,
) -> io::Result<ReadOutcome<DelimitedRead<R>>>
where
    R: BufRead + Send + 'static,
{
    let deadline = Instant::now().checked_add(timeout);
    let (tx, rx) = mpsc::sync_channel(1);

    thread::Builder::new()
        .name("osc52-header-read".to_string())
        .spawn(move || {
            let mut reader = reader;
            let mut buf = Vec::new();
            let result = reader.read_until(delim, &mut buf).map(|_| buf);
            let _ = tx.send((reader, result));
        })?;

    loop {
        if cancel.is_cancelled() {
            log::debug!("Timed read cancelled");
            return Ok(ReadOutcome::Cancelled);
        }

        let wait = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    log::debug!("Timed read gave up after {:?}", timeout);
                    return Ok(ReadOutcome::Timeout);
                }
                (deadline - now).min(CANCEL_POLL_INTERVAL)
            }
            None => CANCEL_POLL_INTERVAL,
        };

        match rx.recv_timeout(wait) {
            Ok(read) => return Ok(ReadOutcome::Data(read)),
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                return Err(io::Error::other("reader thread exited without a result"));
            }
        }
    }
}

#[cfg(test)]
#[path = "timed_read_tests.rs"]
mod timed_read_tests;

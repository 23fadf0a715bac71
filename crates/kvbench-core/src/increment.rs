//! Timed read-then-increment, the measurement at the heart of the harness.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

use crate::backend::{CounterBackend, COUNTER_KEY};
use crate::error::KvBenchError;

/// Which of the two provider calls failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Read,
    Write,
}

impl Phase {
    /// The backend op behind the phase, as a stable label value.
    pub fn op(self) -> &'static str {
        match self {
            Phase::Read => "get",
            Phase::Write => "set",
        }
    }
}

/// An increment that failed in one of its two provider calls.
///
/// The underlying error propagates unchanged in `error`; `phase` records
/// whether it was the `get` or the `set` that failed.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct IncrementError {
    pub phase: Phase,
    pub error: KvBenchError,
}

/// Durations captured for one increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    pub read: Duration,
    pub write: Duration,
    pub total: Duration,
}

/// Immutable snapshot of one increment against one backend.
///
/// `count` is the value *read*, not the value written: after a successful
/// call the store holds `count + 1`. Presentation shows the pre-increment
/// value on purpose.
#[derive(Debug, Clone)]
pub struct IncrementOutcome {
    pub backend: String,
    pub count: u64,
    pub sample: TimingSample,
}

/// Run one read-compute-write cycle against `backend`, timing each phase.
///
/// Exactly one `get` and one `set` per call. The two are separate provider
/// calls with no compare-and-swap or locking: two concurrent invocations on
/// the same key can read the same pre-value and silently lose an increment.
/// An absent key reads as 0.
///
/// If `get` fails the `set` is never attempted; if `set` fails no outcome
/// is produced. Either way the failure surfaces as an [`IncrementError`]
/// naming the phase.
pub async fn timed_increment(
    backend: &dyn CounterBackend,
) -> Result<IncrementOutcome, IncrementError> {
    let t0 = Instant::now();
    let value = backend
        .get(COUNTER_KEY)
        .await
        .map_err(|error| IncrementError { phase: Phase::Read, error })?;
    // Write phase starts where the read ended; no gap accounting.
    let t1 = Instant::now();
    let read = t1 - t0;

    let count = value.unwrap_or(0);
    backend
        .set(COUNTER_KEY, count + 1)
        .await
        .map_err(|error| IncrementError { phase: Phase::Write, error })?;
    let t3 = Instant::now();

    let sample = TimingSample { read, write: t3 - t1, total: t3 - t0 };
    debug!(
        backend = backend.name(),
        count,
        read_us = sample.read.as_micros() as u64,
        write_us = sample.write.as_micros() as u64,
        "incremented counter"
    );

    Ok(IncrementOutcome { backend: backend.name().to_string(), count, sample })
}

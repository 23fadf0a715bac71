//! Best-effort reset across all registered backends.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::error;

use crate::backend::{CounterBackend, COUNTER_KEY};
use crate::error::Result;

/// Per-backend outcomes of one reset fan-out.
#[derive(Debug)]
pub struct ResetReport {
    /// (display name, result) in registration order.
    pub outcomes: Vec<(String, Result<()>)>,
}

impl ResetReport {
    pub fn all_ok(&self) -> bool {
        self.outcomes.iter().all(|(_, r)| r.is_ok())
    }

    /// Display names of the backends whose reset failed.
    pub fn failed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, r)| r.is_err())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Set every backend's counter to 0, in parallel.
///
/// Backends are independent I/O targets with no transaction across them: a
/// failure on one does not stop or roll back the others. The report carries
/// each backend's individual result.
pub async fn reset_all(backends: &[Arc<dyn CounterBackend>]) -> ResetReport {
    let futs = backends.iter().map(|b| async move {
        let res = b.set(COUNTER_KEY, 0).await;
        if let Err(e) = &res {
            error!(backend = b.name(), %e, "reset failed");
        }
        (b.name().to_string(), res)
    });

    ResetReport { outcomes: join_all(futs).await }
}

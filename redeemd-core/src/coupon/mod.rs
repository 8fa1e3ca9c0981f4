//! Coupon-code validation pipeline.
//!
//! A candidate is genuine only if it recurs in the configured source
//! directory: large, unsorted text files holding one code per line. One
//! producer task streams each file into a bounded queue, a fixed pool of
//! workers compares lines against the candidate, and a single aggregator
//! tallies the matches. The run ends as soon as a decision is possible:
//! the threshold is reached, a source fails, or everything drains. A
//! one-shot [`CancellationToken`] then stops the remaining tasks
//! cooperatively.

pub mod config;
pub mod outcome;

mod aggregator;
mod producer;
mod sources;
mod worker;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub use config::{MAX_CODE_LEN, MIN_CODE_LEN, OCCURRENCE_THRESHOLD, ValidatorConfig};
pub use outcome::{Outcome, RejectReason};

use crate::error::{CouponError, Result};

/// Validates candidate coupon codes against a directory of code files.
///
/// The validator holds no per-call state; a single instance can serve any
/// number of concurrent calls, each with its own channels, tally, and
/// cancellation token.
#[derive(Debug, Clone)]
pub struct CouponValidator {
    root: PathBuf,
    config: ValidatorConfig,
}

impl CouponValidator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, ValidatorConfig::default())
    }

    pub fn with_config(root: impl Into<PathBuf>, mut config: ValidatorConfig) -> Self {
        // A worker retires after its first match, so fewer than threshold
        // workers can never deliver enough reports to accept a genuine code.
        config.workers = config.workers.max(OCCURRENCE_THRESHOLD);
        config.queue_capacity = config.queue_capacity.max(1);
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate a candidate code against the source directory.
    ///
    /// Returns `Ok` with the accept/reject decision, or `Err` when a source
    /// could not be enumerated, opened, or read. A failure aborts the whole
    /// call rather than degrading to a reduced source set. Exactly one
    /// outcome is produced per
    /// call, and every task spawned for the call is joined before this
    /// returns, so no background work survives it.
    pub async fn validate(&self, code: &str) -> Result<Outcome> {
        if code.len() < MIN_CODE_LEN || code.len() > MAX_CODE_LEN {
            return Ok(Outcome::Invalid(RejectReason::LengthOutOfBounds));
        }

        let paths = sources::enumerate_sources(&self.root)?;
        debug!(sources = paths.len(), "starting coupon scan");

        let (jobs_tx, jobs_rx) = mpsc::channel::<Vec<u8>>(self.config.queue_capacity);
        // Buffered to the threshold so a matching worker never blocks on the
        // report it exits on.
        let (results_tx, results_rx) = mpsc::channel::<Vec<u8>>(OCCURRENCE_THRESHOLD);
        let (errors_tx, errors_rx) = mpsc::channel::<CouponError>(1);
        let cancel = CancellationToken::new();

        let mut handles = Vec::with_capacity(self.config.workers + paths.len());

        let jobs_rx = Arc::new(Mutex::new(jobs_rx));
        let candidate: Arc<[u8]> = Arc::from(code.as_bytes());
        for id in 0..self.config.workers {
            handles.push(tokio::spawn(worker::match_lines(
                id,
                Arc::clone(&jobs_rx),
                results_tx.clone(),
                Arc::clone(&candidate),
                cancel.clone(),
            )));
        }
        // Workers hold the only result senders; the channel closes when the
        // last worker exits.
        drop(results_tx);

        for path in paths {
            handles.push(tokio::spawn(producer::read_source(
                path,
                jobs_tx.clone(),
                errors_tx.clone(),
                cancel.clone(),
            )));
        }
        // Same protocol for the jobs and error channels: producers own the
        // remaining senders, so both close once all producers are done.
        drop(jobs_tx);
        drop(errors_tx);

        let decision = aggregator::decide(results_rx, errors_rx, &cancel).await;

        // The receivers are dropped by now and the token has fired, so any
        // straggler blocked on a send observes closure and exits.
        for handle in handles {
            let _ = handle.await;
        }

        decision
    }
}

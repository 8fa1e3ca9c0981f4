/// Minimum accepted candidate length, checked before any I/O.
pub const MIN_CODE_LEN: usize = 8;

/// Maximum accepted candidate length, checked before any I/O.
pub const MAX_CODE_LEN: usize = 10;

/// Independent occurrences required before a code is trusted.
///
/// A single occurrence could be coincidental or corrupted data; the code must
/// recur to be accepted. This is a fixed consensus policy, not a tuning
/// parameter, and it does not scale with input size.
pub const OCCURRENCE_THRESHOLD: usize = 2;

/// Tuning knobs for the scan pipeline.
///
/// Capacities bound memory regardless of file size or count; they affect
/// throughput, never the decision.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Number of match workers draining the shared line queue.
    pub workers: usize,
    /// Capacity of the bounded line queue between producers and workers.
    pub queue_capacity: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            workers: 5,
            queue_capacity: 1000,
        }
    }
}

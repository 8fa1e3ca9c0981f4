use std::fmt;

use serde::Serialize;

/// Why a candidate code was rejected.
///
/// Rejection messages are client-facing and never leak file-system details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Candidate length fell outside the accepted bounds; no sources were
    /// touched.
    LengthOutOfBounds,
    /// All sources were exhausted without reaching the occurrence threshold.
    NotFound,
}

impl RejectReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::LengthOutOfBounds => {
                "invalid coupon code, must be between 8 and 10 characters long"
            }
            Self::NotFound => "invalid coupon code, not found",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Terminal decision of a validation call.
///
/// Infrastructure failures are not an `Outcome`; they surface as the `Err`
/// arm of [`crate::Result`] so callers can tell "code is wrong" from
/// "system could not check".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid(RejectReason),
}

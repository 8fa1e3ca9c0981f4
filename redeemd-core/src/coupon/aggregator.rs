use std::collections::HashMap;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::config::OCCURRENCE_THRESHOLD;
use super::outcome::{Outcome, RejectReason};
use crate::error::{CouponError, Result};

/// Consume match and error reports until a terminal decision is possible.
///
/// The occurrence tally is owned here exclusively; no other task ever sees
/// it. The select is biased toward the error channel so an infrastructure
/// failure takes precedence over pending matches. Every terminal path fires
/// the cancellation token before returning, and the token is never un-set,
/// so later-arriving reports are ignored by construction.
pub(crate) async fn decide(
    mut results: mpsc::Receiver<Vec<u8>>,
    mut errors: mpsc::Receiver<CouponError>,
    cancel: &CancellationToken,
) -> Result<Outcome> {
    let mut tally: HashMap<Vec<u8>, usize> = HashMap::new();
    // The error channel closes once every producer has exited normally.
    let mut errors_open = true;

    loop {
        tokio::select! {
            biased;

            err = errors.recv(), if errors_open => match err {
                Some(err) => {
                    cancel.cancel();
                    return Err(err);
                }
                None => errors_open = false,
            },
            report = results.recv() => match report {
                Some(line) => {
                    let count = tally.entry(line).or_insert(0);
                    *count += 1;
                    if *count >= OCCURRENCE_THRESHOLD {
                        info!("occurrence threshold reached, coupon accepted");
                        cancel.cancel();
                        return Ok(Outcome::Valid);
                    }
                }
                None => {
                    debug!("pipeline drained without reaching threshold");
                    cancel.cancel();
                    return Ok(Outcome::Invalid(RejectReason::NotFound));
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels() -> (
        mpsc::Sender<Vec<u8>>,
        mpsc::Receiver<Vec<u8>>,
        mpsc::Sender<CouponError>,
        mpsc::Receiver<CouponError>,
    ) {
        let (results_tx, results_rx) = mpsc::channel(OCCURRENCE_THRESHOLD);
        let (errors_tx, errors_rx) = mpsc::channel(1);
        (results_tx, results_rx, errors_tx, errors_rx)
    }

    #[tokio::test]
    async fn threshold_of_same_content_is_valid() {
        let (results_tx, results_rx, errors_tx, errors_rx) = channels();
        let cancel = CancellationToken::new();

        results_tx.send(b"FIFTYOFF".to_vec()).await.unwrap();
        results_tx.send(b"FIFTYOFF".to_vec()).await.unwrap();
        drop(results_tx);
        drop(errors_tx);

        let outcome = decide(results_rx, errors_rx, &cancel).await.unwrap();
        assert_eq!(outcome, Outcome::Valid);
        assert!(cancel.is_cancelled());
    }

    #[tokio::test]
    async fn drained_channels_mean_not_found() {
        let (results_tx, results_rx, errors_tx, errors_rx) = channels();
        let cancel = CancellationToken::new();

        results_tx.send(b"SUPER100".to_vec()).await.unwrap();
        drop(results_tx);
        drop(errors_tx);

        let outcome = decide(results_rx, errors_rx, &cancel).await.unwrap();
        assert_eq!(outcome, Outcome::Invalid(RejectReason::NotFound));
        assert!(cancel.is_cancelled());
    }

    #[tokio::test]
    async fn error_takes_precedence_over_pending_matches() {
        let (results_tx, results_rx, errors_tx, errors_rx) = channels();
        let cancel = CancellationToken::new();

        results_tx.send(b"FIFTYOFF".to_vec()).await.unwrap();
        results_tx.send(b"FIFTYOFF".to_vec()).await.unwrap();
        errors_tx
            .send(CouponError::Internal("read failed".into()))
            .await
            .unwrap();
        drop(results_tx);
        drop(errors_tx);

        let err = decide(results_rx, errors_rx, &cancel).await.unwrap_err();
        assert!(matches!(err, CouponError::Internal(_)));
        assert!(cancel.is_cancelled());
    }
}

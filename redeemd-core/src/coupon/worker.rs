use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Drain the shared line queue and report lines equal to the candidate code.
///
/// Workers share one receiver behind a mutex; each line is taken by exactly
/// one of them. A worker emits at most one report: after its first match it
/// exits instead of continuing to drain, so the pool shrinks by one per match
/// for the remainder of the run. The aggregator only ever needs
/// [`super::config::OCCURRENCE_THRESHOLD`] reports, so the shrinkage never
/// affects the decision.
pub(crate) async fn match_lines(
    id: usize,
    jobs: Arc<Mutex<mpsc::Receiver<Vec<u8>>>>,
    results: mpsc::Sender<Vec<u8>>,
    code: Arc<[u8]>,
    cancel: CancellationToken,
) {
    debug!(worker = id, "worker start processing");

    loop {
        let line = {
            let mut rx = jobs.lock().await;
            tokio::select! {
                _ = cancel.cancelled() => None,
                line = rx.recv() => line,
            }
        };

        let Some(line) = line else {
            debug!(worker = id, "no more to process, worker exiting");
            return;
        };

        if line == *code {
            debug!(worker = id, "match found");
            // A closed result channel means a decision was already made.
            let _ = results.send(line).await;
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared(rx: mpsc::Receiver<Vec<u8>>) -> Arc<Mutex<mpsc::Receiver<Vec<u8>>>> {
        Arc::new(Mutex::new(rx))
    }

    #[tokio::test]
    async fn reports_once_then_exits() {
        let (jobs_tx, jobs_rx) = mpsc::channel(8);
        let (results_tx, mut results_rx) = mpsc::channel(8);

        for line in [b"DECOY001".to_vec(), b"FIFTYOFF".to_vec(), b"FIFTYOFF".to_vec()] {
            jobs_tx.send(line).await.unwrap();
        }
        drop(jobs_tx);

        match_lines(
            0,
            shared(jobs_rx),
            results_tx,
            Arc::from(&b"FIFTYOFF"[..]),
            CancellationToken::new(),
        )
        .await;

        // The second occurrence stays queued for another worker.
        assert_eq!(results_rx.recv().await, Some(b"FIFTYOFF".to_vec()));
        assert!(results_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn exits_on_queue_closure_without_match() {
        let (jobs_tx, jobs_rx) = mpsc::channel(8);
        let (results_tx, mut results_rx) = mpsc::channel(8);

        jobs_tx.send(b"DECOY001".to_vec()).await.unwrap();
        drop(jobs_tx);

        match_lines(
            0,
            shared(jobs_rx),
            results_tx,
            Arc::from(&b"FIFTYOFF"[..]),
            CancellationToken::new(),
        )
        .await;

        assert!(results_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn exits_on_cancellation() {
        let (_jobs_tx, jobs_rx) = mpsc::channel::<Vec<u8>>(8);
        let (results_tx, _results_rx) = mpsc::channel(8);

        let cancel = CancellationToken::new();
        cancel.cancel();

        match_lines(
            0,
            shared(jobs_rx),
            results_tx,
            Arc::from(&b"FIFTYOFF"[..]),
            cancel,
        )
        .await;
    }
}

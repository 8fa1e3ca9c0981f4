use std::path::PathBuf;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::CouponError;

/// Stream one source file line-by-line into the shared jobs queue.
///
/// Each line is handed downstream as an independently owned buffer; the read
/// buffer is never lent out. The token is checked before every push: once it
/// fires the producer stops reading without pushing further lines, though a
/// line mid-read is finished first. Open or read failures go to the dedicated
/// error channel and end this producer without touching the process. The file
/// handle is released on every exit path.
pub(crate) async fn read_source(
    path: PathBuf,
    jobs: mpsc::Sender<Vec<u8>>,
    errors: mpsc::Sender<CouponError>,
    cancel: CancellationToken,
) {
    debug!(path = %path.display(), "producer start reading");

    let file = match File::open(&path).await {
        Ok(file) => file,
        Err(source) => {
            let _ = errors.send(CouponError::OpenSource { path, source }).await;
            return;
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    loop {
        if cancel.is_cancelled() {
            debug!(path = %path.display(), "producer cancelled");
            return;
        }

        buf.clear();
        let read = match reader.read_until(b'\n', &mut buf).await {
            Ok(read) => read,
            Err(source) => {
                let _ = errors.send(CouponError::ReadSource { path, source }).await;
                return;
            }
        };
        if read == 0 {
            break;
        }

        // Strip the newline convention; a final line without one still counts.
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = buf.clone();
        tokio::select! {
            _ = cancel.cancelled() => return,
            sent = jobs.send(line) => {
                // Workers are gone; nothing left to feed.
                if sent.is_err() {
                    return;
                }
            }
        }
    }

    debug!(path = %path.display(), "producer done reading");
}

//! Serializes all appends to the CSV log through one background task.
//!
//! Request handlers never touch the file. They hold a [`RowWriter`], a clonable
//! handle that pushes [`AppendRequest`]s into a bounded MPSC channel and waits
//! for the outcome on a oneshot reply channel.
//!
//! `start_row_writer` is the only consumer of that channel. It performs one
//! append at a time on the blocking thread pool, so concurrent submissions can
//! neither interleave partial rows nor both decide to write the header.

use crate::error::StorageError;
use crate::storage::csv_log::CsvLog;
use log::{debug, info};
use tokio::sync::{mpsc, oneshot};

/// One row waiting to be appended.
#[derive(Debug)]
pub struct AppendRequest {
    pub(crate) questions: Vec<String>,
    pub(crate) answers: Vec<String>,
    pub(crate) reply: oneshot::Sender<Result<(), StorageError>>,
}

/// Handle used by request handlers to queue appends.
///
/// Created in `main.rs` and shared with every worker as `web::Data`.
#[derive(Clone)]
pub struct RowWriter {
    tx: mpsc::Sender<AppendRequest>,
}

impl RowWriter {
    pub fn new(tx: mpsc::Sender<AppendRequest>) -> Self {
        Self { tx }
    }

    /// Queues a row and waits until the writer has flushed it to disk.
    pub async fn append(
        &self,
        questions: Vec<String>,
        answers: Vec<String>,
    ) -> Result<(), StorageError> {
        let (reply, outcome) = oneshot::channel();
        self.tx
            .send(AppendRequest {
                questions,
                answers,
                reply,
            })
            .await
            .map_err(|_| StorageError::WriterClosed)?;
        outcome.await.map_err(|_| StorageError::WriterClosed)?
    }
}

/// Starts the row writer loop.
///
/// Spawn this as a long-running task. It runs until every `RowWriter` handle
/// has been dropped and the queue is drained.
pub async fn start_row_writer(log: CsvLog, mut rx: mpsc::Receiver<AppendRequest>) {
    info!("Row writer appending to {}", log.path().display());

    while let Some(request) = rx.recv().await {
        let AppendRequest {
            questions,
            answers,
            reply,
        } = request;

        let task_log = log.clone();
        let result = match tokio::task::spawn_blocking(move || {
            task_log.append(&questions, &answers)
        })
        .await
        {
            Ok(result) => result,
            Err(join_err) => Err(StorageError::Task(join_err.to_string())),
        };

        if let Err(e) = &result {
            debug!("Append to {} failed: {}", log.path().display(), e);
        }
        // Receiver is gone if the client disconnected mid-request.
        let _ = reply.send(result);
    }

    info!("Row writer stopped");
}

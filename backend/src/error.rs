use thiserror::Error;

/// Faults raised while appending a row to the CSV log.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("row writer is not running")]
    WriterClosed,

    #[error("row writer task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("No data received")]
    NoData,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

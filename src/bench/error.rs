use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid workload size {0}, number of operations must be positive")]
    InvalidWorkload(i64),

    // worker thread panicked before its report was written
    #[error("{0} worker aborted before finishing its run")]
    WorkerAborted(&'static str),

    #[error("fail to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("fail to write report: {0}")]
    Sink(#[from] io::Error),

    #[error("output sink lock is poisoned")]
    SinkPoisoned,
}

impl BenchError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, BenchError::WorkerAborted(_))
    }
}

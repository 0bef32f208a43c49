use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelError {
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Square matrix required, got {rows}x{cols}")]
    SquareMatrixRequired { rows: usize, cols: usize },

    #[error("Matrix is singular (|pivot| = {magnitude:e})")]
    SingularMatrix { magnitude: f64 },

    #[error("Unknown operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Result is not finite: {0}")]
    NonFiniteResult(&'static str),

    #[error("No reply within {waited_ms} ms")]
    Timeout { waited_ms: u64 },

    #[error("Compute worker is not running")]
    WorkerDisconnected,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type KernelResult<T> = Result<T, KernelError>;

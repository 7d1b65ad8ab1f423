//! Error types for matrix-chunk operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not enough memory to hold {rows} rows of {cols} elements")]
    OutOfMemory { rows: usize, cols: usize },

    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: expected {expected}, found `{token}`")]
    Parse {
        path: String,
        line: usize,
        expected: &'static str,
        token: String,
    },

    #[error("{path}: input ended after {found} of {expected} tokens")]
    Truncated {
        path: String,
        expected: usize,
        found: usize,
    },

    #[error("matrix dimension mismatch: A is {0}x{1}, B is {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),

    #[error("right operand holds rows {start}..{end} of {rows}, all rows are required")]
    PartialOperand { start: usize, end: usize, rows: usize },

    #[error("window {start}..{end} does not fit in a matrix of {rows} rows")]
    InvalidWindow { start: usize, end: usize, rows: usize },

    #[error("cell ({row}, {col}) is outside rows {start}..{end} and columns 0..{cols}")]
    OutOfBounds {
        row: usize,
        col: usize,
        start: usize,
        end: usize,
        cols: usize,
    },

    #[error("row {row} has {found} elements, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("chunk id {id} is outside the range 0..{workers}")]
    InvalidChunk { id: usize, workers: usize },

    #[error("{0}")]
    Usage(String),

    #[error("invalid argument: {0}")]
    Argument(String),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }

    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

use thiserror::Error;

/// Errors produced by the fallible parts of the crate
///
/// Out-of-range indexing and `*` on incompatible matrices are programming errors and panic
/// instead, in the same way slice indexing does.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot multiply a {lhs_rows}x{lhs_cols} matrix by a {rhs_rows}x{rhs_cols} matrix")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    #[error("basis of rank {rank} is too large to enumerate (limit is {limit})")]
    RankTooLarge { rank: usize, limit: usize },

    #[error("invalid design parameters: {0}")]
    InvalidParameters(String),

    #[error("matrix does not match the expected design: {0}")]
    ParameterMismatch(String),

    #[error("negative matrix dimension {0}")]
    NegativeDimension(i64),

    #[error("a {rows}x{cols} matrix has more entries than can be addressed")]
    TooLarge { rows: usize, cols: usize },

    #[error("could not parse {token:?} as an integer")]
    Parse { token: String },

    #[error("input ended early: expected {expected} more value(s)")]
    UnexpectedEof { expected: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

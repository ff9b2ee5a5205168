use thiserror::Error;

/// Exit status used by the binary when `dig` cannot be found (sysexits `EX_UNAVAILABLE`).
pub const EXIT_UNAVAILABLE: i32 = 69;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("dig unavailable: {0}")]
    Unavailable(String),

    #[error("dig execution failed: {0}")]
    ExecutionFailed(String),
}

impl QueryError {
    pub fn exit_code(&self) -> i32 {
        match self {
            QueryError::InvalidArgument(_) => 2,
            QueryError::Unavailable(_) => EXIT_UNAVAILABLE,
            QueryError::ExecutionFailed(_) => 1,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, QueryError::InvalidArgument(_))
    }
}

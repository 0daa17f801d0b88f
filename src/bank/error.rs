use thiserror::Error;

/// Failure kinds a query can report. Exhausting a quiz pool is a normal
/// result and not represented here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unprocessable: {0}")]
    Unprocessable(String),
}

impl QueryError {
    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::InvalidInput(detail.into())
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::Unprocessable(detail.into())
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidInput(d) | Self::NotFound(d) | Self::Unprocessable(d) => d,
        }
    }
}

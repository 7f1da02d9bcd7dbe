//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the container contract.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("index out of range: {index} (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

//! Domain errors

mod domain_error;

pub use domain_error::DomainError;

/// Result alias used by domain operations
pub type DomainResult<T> = Result<T, DomainError>;

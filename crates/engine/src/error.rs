//! The module contains the error the engine can throw.
//!
//! There is a single recoverable error, [`InvalidArgument`], raised when a
//! new expense fails validation. Storing and reading expenses cannot fail.
//!
//!  [`InvalidArgument`]: EngineError::InvalidArgument
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The message names the offending field, e.g. `"name is required"`.
    #[error("{0}")]
    InvalidArgument(String),
}

//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`NotFound`] thrown when a wallet or a transaction does not exist.
//! - [`InvalidAmount`] thrown when a transaction amount is not positive.
//! - [`NotAuthorized`] thrown when a non-owner tries to approve.
//! - [`InvalidConfiguration`] thrown when a wallet is created with an
//!   impossible owners/threshold combination.
//!
//! Every check runs before any record is touched, so a failed call never
//! leaves the store half-updated.
//!
//!  [`NotFound`]: EngineError::NotFound
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`NotAuthorized`]: EngineError::NotAuthorized
//!  [`InvalidConfiguration`]: EngineError::InvalidConfiguration
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("\"{0}\" not found!")]
    NotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Not authorized: {0}")]
    NotAuthorized(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

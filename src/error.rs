//! Crate-wide error types.

use thiserror::Error;

/// Errors produced by the notification dispatch path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid channel type: {label}")]
    InvalidChannel { label: String },
}

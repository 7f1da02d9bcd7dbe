//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Failures loading stock/order files or filling orders.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid item in {path}: {message}")]
    InvalidItem { path: PathBuf, message: String },

    #[error("order cannot be filled, missing: {name}")]
    Unavailable { name: String },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

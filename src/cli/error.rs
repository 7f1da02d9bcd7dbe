//! CLI-level errors and process exit codes

use thiserror::Error;

use crate::application::ApplicationError;

/// Exit codes. Failures use BSD sysexits.h values; `SHORT` is larder's own.
pub mod code {
    pub const OK: i32 = 0;
    /// `check` found the order cannot be filled (a verdict, not a failure)
    pub const SHORT: i32 = 1;
    /// EX_DATAERR
    pub const DATAERR: i32 = 65;
    /// EX_NOINPUT
    pub const NOINPUT: i32 = 66;
    /// EX_UNAVAILABLE
    pub const UNAVAILABLE: i32 = 69;
    /// EX_IOERR
    pub const IOERR: i32 = 74;
    /// EX_CONFIG
    pub const CONFIG: i32 = 78;
}

/// Top-level error, shown to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Writing help or completions to stdout failed.
    #[error("{action}: {source}")]
    Terminal {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Terminal { .. } => code::IOERR,
            CliError::Application(e) => match e {
                ApplicationError::Read { .. } => code::NOINPUT,
                ApplicationError::Parse { .. } | ApplicationError::InvalidItem { .. } => {
                    code::DATAERR
                }
                ApplicationError::Unavailable { .. } => code::UNAVAILABLE,
                ApplicationError::Config { .. } => code::CONFIG,
            },
        }
    }
}

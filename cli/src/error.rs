use std::io;

use thiserror::Error;

use swasth_contracts::SwasthError;

/// Errors that end a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Swasth(#[from] SwasthError),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

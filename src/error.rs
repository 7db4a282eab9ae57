/// Errors raised by the truck factor pipeline.
use thiserror::Error;

/// Coarse classification of a [`TruckFactorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad caller input, detected before touching the repository.
    Validation,
    /// git is missing or the path is not a repository.
    Environment,
    /// A git invocation failed mid-pipeline.
    Backend,
    /// The history yields nothing to analyze.
    Domain,
}

#[derive(Debug, Error)]
pub enum TruckFactorError {
    #[error("invalid argument: {0}")]
    Validation(String),

    #[error("invalid configuration {path}: {message}")]
    Config { path: String, message: String },

    #[error("{0}")]
    Environment(String),

    #[error("git command failed: {0}")]
    Backend(String),

    #[error("{0}")]
    Domain(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TruckFactorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TruckFactorError::Validation(_) | TruckFactorError::Config { .. } => {
                ErrorKind::Validation
            }
            TruckFactorError::Environment(_) => ErrorKind::Environment,
            TruckFactorError::Backend(_) | TruckFactorError::Io(_) => ErrorKind::Backend,
            TruckFactorError::Domain(_) => ErrorKind::Domain,
        }
    }
}

pub type Result<T> = std::result::Result<T, TruckFactorError>;

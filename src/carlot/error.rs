use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarlotError {
    #[error("Car not found: {0}")]
    CarNotFound(String),

    #[error("Cannot delete: car {0} is currently rented")]
    CarRented(String),

    #[error("Car {0} already rented")]
    AlreadyRented(String),

    #[error("Days must be > 0")]
    InvalidDays(i64),

    #[error("Customer name required")]
    MissingCustomer,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to save {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt car record on line {line}: {reason}")]
    Corrupt { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Coarse classification adapters use to pick a response (HTTP status, exit message).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidArgument,
    Persistence,
    Corrupt,
    Internal,
}

impl CarlotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CarlotError::CarNotFound(_) => ErrorKind::NotFound,
            CarlotError::CarRented(_) | CarlotError::AlreadyRented(_) => ErrorKind::Conflict,
            CarlotError::InvalidDays(_)
            | CarlotError::MissingCustomer
            | CarlotError::InvalidInput(_)
            | CarlotError::Config(_) => ErrorKind::InvalidArgument,
            CarlotError::Persistence { .. } => ErrorKind::Persistence,
            CarlotError::Corrupt { .. } => ErrorKind::Corrupt,
            CarlotError::Io(_) | CarlotError::Serialization(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, CarlotError>;

//! Error types for QuickCart Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Could not determine data directory")]
    DataDirUnavailable,
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Error::PasswordHash(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

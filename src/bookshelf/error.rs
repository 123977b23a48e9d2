use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Book id {0} already exists")]
    DuplicateId(u32),

    #[error("Catalog file {} is malformed: {reason}", path.display())]
    MalformedStorage { path: PathBuf, reason: String },

    #[error("Book with id {0} not found")]
    NotFound(u32),

    #[error("Invalid status '{0}', expected one of: available, checked_out")]
    InvalidStatus(String),

    #[error("Unknown field '{0}', expected one of: id, title, author, year, status")]
    UnknownField(String),

    #[error("Failed to save catalog to {}: {reason}", path.display())]
    Persistence { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

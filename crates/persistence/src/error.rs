use thiserror::Error;
use std::io;
use std::path::PathBuf;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound {
        path: PathBuf,
    },
    #[error("Invalid replica id: {0:?}")]
    InvalidReplicaId(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

use thiserror::Error;

use orfmap_core::OrfmapError;

#[derive(Error, Debug)]
pub enum DecoyError {
    #[error("Invalid FASTA record in {0}: {1}")]
    InvalidRecord(String, String),
    #[error("Unknown database type: {0}")]
    UnknownDatabaseType(String),
    #[error(transparent)]
    Core(#[from] OrfmapError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecoyError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrfmapError {
    #[error("Malformed annotation: {0}")]
    MalformedAnnotation(String),

    #[error("Locus not found in table: {0}")]
    UnresolvedLocus(String),

    #[error("Identifier matches neither ORF coding scheme: {0}")]
    AmbiguousIdentifierFormat(String),

    #[error("Malformed PSM table: {0}")]
    MalformedPsmTable(String),

    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, OrfmapError>;

use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::DecoyError;

/// Directory, under each database type's folder, read by the rescoring step.
pub const PERCOLATOR_DIR: &str = "Percolator";

///
/// Which target database a set of decoys was built from.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseType {
    Genome,
    Transcriptome,
}

impl Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseType::Genome => write!(f, "Genome"),
            DatabaseType::Transcriptome => write!(f, "Transcriptome"),
        }
    }
}

impl FromStr for DatabaseType {
    type Err = DecoyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "genome" => Ok(DatabaseType::Genome),
            "transcriptome" => Ok(DatabaseType::Transcriptome),
            _ => Err(DecoyError::UnknownDatabaseType(s.to_string())),
        }
    }
}

///
/// Location of the decoy database for `db_type`:
/// `<outdir>/<Type>/Percolator/<Type>_decoy.fasta`.
///
pub fn decoy_path(outdir: &Path, db_type: DatabaseType) -> PathBuf {
    outdir
        .join(db_type.to_string())
        .join(PERCOLATOR_DIR)
        .join(format!("{}_decoy.fasta", db_type))
}

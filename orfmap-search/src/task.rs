use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use glob::glob;
use log::info;

use crate::errors::Result;

pub const SPECTRA_EXTENSION: &str = "mzML";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Target,
    Decoy,
}

impl Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Target => write!(f, "target"),
            TaskKind::Decoy => write!(f, "decoy"),
        }
    }
}

///
/// One search of a spectral file against one database.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTask {
    pub spectra: PathBuf,
    pub database: PathBuf,
    pub kind: TaskKind,
    /// Output path without extension; engines add their own.
    pub output: PathBuf,
}

impl Display for SearchTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} search of {} against {}",
            self.kind,
            self.spectra.display(),
            self.database.display()
        )
    }
}

///
/// Spectral files in `folder`, sorted by path.
///
pub fn discover_spectra(folder: &Path) -> Result<Vec<PathBuf>> {
    let pattern = folder.join(format!("*.{}", SPECTRA_EXTENSION));
    let mut files = glob(&pattern.to_string_lossy())?
        .map(|entry| entry.map_err(|e| e.into_error()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    files.sort();

    info!("Found {} spectral files in {}", files.len(), folder.display());
    Ok(files)
}

///
/// Pair every spectral file with the target and the decoy database.
///
/// # Arguments
/// - spectra: spectral files to search
/// - target: target protein database
/// - decoy: decoy protein database
/// - outdir: folder receiving the search results
pub fn plan_tasks(spectra: &[PathBuf], target: &Path, decoy: &Path, outdir: &Path) -> Vec<SearchTask> {
    spectra
        .iter()
        .flat_map(|file| {
            let stem = file
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            [(TaskKind::Target, target), (TaskKind::Decoy, decoy)]
                .into_iter()
                .map(move |(kind, database)| SearchTask {
                    spectra: file.clone(),
                    database: database.to_path_buf(),
                    kind,
                    output: outdir.join(format!("{}_{}", stem, kind)),
                })
        })
        .collect()
}

//! Loaders turning 9-column feature files into a [LocusTable].
//!
//! Two variants share the [AnnotationLoader] contract:
//!
//! - [ReferenceLoader] reads a curated reference annotation (GFF) and keeps
//!   rows whose `source` column marks curated provenance.
//! - [TranscriptLoader] reads the transcript file written by the assembler,
//!   whose version marker line stands where a header should be, and keeps
//!   `transcript` rows.
//!
//! # Example
//!
//! ```no_run
//! use orfmap_annotation::{AnnotationLoader, ReferenceLoader};
//!
//! let loci = ReferenceLoader::default().load("reference.gff").unwrap();
//! let dnaa = loci.get("gene-Rv0001");
//! ```
use std::path::Path;

use log::info;

use orfmap_core::Result;
use orfmap_core::models::LocusTable;
use orfmap_core::utils::read_to_string;

pub mod consts;
pub mod feature;
pub mod reference;
pub mod transcript;

// re-exports
pub use reference::ReferenceLoader;
pub use transcript::TranscriptLoader;

pub trait AnnotationLoader {
    ///
    /// Build a [LocusTable] from the full text of a feature file.
    ///
    fn parse(&self, source: &str) -> Result<LocusTable>;

    ///
    /// Read a (optionally gzip'd) feature file and build its [LocusTable].
    ///
    /// # Arguments
    /// - path: path to the feature file
    fn load<P: AsRef<Path>>(&self, path: P) -> Result<LocusTable> {
        let path = path.as_ref();
        let text = read_to_string(path)?;
        let table = self.parse(&text)?;
        info!("Loaded {} from {}", table, path.display());
        Ok(table)
    }
}

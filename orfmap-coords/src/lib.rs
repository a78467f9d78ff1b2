//! # Coordinate resolution and peptide provenance
//!
//! Turns the protein ids claimed by each peptide-spectrum match into absolute
//! genome intervals, then decides which peptides point at a single locus.
//!
//! Resolution comes in two flavours behind the [CoordinateResolver] trait:
//! [GenomeResolver] for databases built from the genome, and
//! [TranscriptResolver] for databases built from assembled transcripts, whose
//! ORF spans are local to their parent transcript.
//!
//! ```no_run
//! use orfmap_annotation::{AnnotationLoader, ReferenceLoader};
//! use orfmap_coords::{GenomeResolver, ProvenanceMatcher};
//! use orfmap_io::read_psm_table;
//!
//! let reference = ReferenceLoader::default().load("reference.gff").unwrap();
//! let matcher = ProvenanceMatcher::new(GenomeResolver::new(reference));
//!
//! let psms = read_psm_table("genome_psms.txt").unwrap();
//! let annotated = matcher.annotate(psms).unwrap();
//! ```
pub mod filter;
pub mod matcher;
pub mod resolver;
pub mod stage;
pub mod unique;

// re-exports
pub use filter::PsmFilter;
pub use matcher::ProvenanceMatcher;
pub use resolver::{CoordinateResolver, GenomeResolver, TranscriptResolver};
pub use unique::{KeepMode, UniquenessClassifier};

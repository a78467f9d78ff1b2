//! # Decoy databases for target-decoy FDR control
//!
//! Every target protein is reversed, except for its C-terminal residue,
//! which stays at the end so that enzymatic cleavage sites look like the
//! ones in the target database. A contaminant library is appended to the
//! decoys.
//!
//! ```no_run
//! use std::path::Path;
//! use orfmap_decoy::{DatabaseType, DecoyGenerator, decoy_path};
//!
//! let generator = DecoyGenerator::new(DatabaseType::Genome).unwrap();
//! let output = decoy_path(Path::new("results"), DatabaseType::Genome);
//! generator.write("genome_database.fasta", &output).unwrap();
//! ```
pub mod database;
pub mod errors;
pub mod generator;

// re-exports
pub use database::{DatabaseType, decoy_path};
pub use errors::DecoyError;
pub use generator::{DecoyGenerator, reverse_keep_cterm, strip_ambiguous};

//! # Core models for proteogenomic coordinate resolution.
//!
//! This crate holds the shared data model used by the rest of the workspace:
//! named loci and the lookup table built from an annotation, the ORF
//! identifier codec, resolved genome intervals and the peptide-spectrum match
//! table. It also carries the pipeline configuration and small file helpers.
//!
pub mod config;
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use config::PipelineConfig;
pub use errors::{OrfmapError, Result};

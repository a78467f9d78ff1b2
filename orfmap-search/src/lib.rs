//! # Running the external search engine
//!
//! Every spectral file is searched twice, once against the target database
//! and once against the decoy database. Those searches are independent, so
//! they run on a worker pool capped by the configured process count.
//! [run_search] returns only once every task has finished.
//!
//! ```no_run
//! use std::path::Path;
//! use orfmap_search::{ExternalCommand, discover_spectra, plan_tasks, run_search};
//!
//! let spectra = discover_spectra(Path::new("mzml")).unwrap();
//! let tasks = plan_tasks(
//!     &spectra,
//!     Path::new("genome_database.fasta"),
//!     Path::new("Genome/Percolator/Genome_decoy.fasta"),
//!     Path::new("Genome/search"),
//! );
//!
//! let engine = ExternalCommand::new(
//!     "msgf",
//!     ["-s", "{spectra}", "-d", "{database}", "-o", "{output}.mzid"],
//! );
//! run_search(&engine, &tasks, 4).unwrap();
//! ```
pub mod engine;
pub mod errors;
pub mod fasta;
pub mod runner;
pub mod task;

// re-exports
pub use engine::{ExternalCommand, SearchEngine};
pub use errors::SearchError;
pub use fasta::concat_fastas;
pub use runner::run_search;
pub use task::{SearchTask, TaskKind, discover_spectra, plan_tasks};

//! # orfmap
//!
//! Proteogenomic coordinate resolution: decode ORF identifiers, place them
//! on the genome through either the reference annotation or the assembled
//! transcripts, attach those coordinates to peptide-spectrum matches and
//! flag the peptides that point at a single locus. Decoy databases and the
//! bounded search runner live here too.
//!
//! Each part is its own crate, re-exported behind a feature of the same name.
#[cfg(feature = "core")]
#[doc(inline)]
pub use orfmap_core as core;

#[cfg(feature = "io")]
#[doc(inline)]
pub use orfmap_io as io;

#[cfg(feature = "annotation")]
#[doc(inline)]
pub use orfmap_annotation as annotation;

#[cfg(feature = "coords")]
#[doc(inline)]
pub use orfmap_coords as coords;

#[cfg(feature = "decoy")]
#[doc(inline)]
pub use orfmap_decoy as decoy;

#[cfg(feature = "search")]
#[doc(inline)]
pub use orfmap_search as search;

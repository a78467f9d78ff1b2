//! # Input/Output utilities for PSM score tables.
//!
//! Reads the tab-separated tables produced by the external scoring step and
//! writes them back, with any derived columns, in the same layout. Files
//! ending in `.gz` are transparently (de)compressed.
//!
pub mod psm;

// re-expose core functions
pub use psm::*;

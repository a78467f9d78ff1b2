use log::info;

use orfmap_core::consts::{GENOME_COORDINATES_COL, GENOME_COORDINATES_POS};
use orfmap_core::errors::Result;
use orfmap_core::models::{PsmTable, ResolvedCoordinateSet};

use crate::resolver::CoordinateResolver;

///
/// Applies a [CoordinateResolver] to every protein id claimed by every
/// peptide match.
///
/// Rows are not filtered here. Composite accessions should be dropped by
/// the caller beforehand (see [crate::PsmFilter]).
///
pub struct ProvenanceMatcher<R: CoordinateResolver> {
    resolver: R,
}

impl<R: CoordinateResolver> ProvenanceMatcher<R> {
    pub fn new(resolver: R) -> Self {
        ProvenanceMatcher { resolver }
    }

    ///
    /// Resolve each id on its own, keeping the order of `ids`.
    ///
    pub fn resolve_ids(&self, ids: &[String]) -> ResolvedCoordinateSet {
        ids.iter()
            .map(|id| self.resolver.resolve_slot(id))
            .collect::<Vec<_>>()
            .into()
    }

    ///
    /// Insert the `Genome Coordinates` column into a PSM table.
    ///
    /// # Arguments
    /// - table: PSM table with a `proteinIds` column
    ///
    /// # Returns
    /// - the table with the coordinate column at position 5
    pub fn annotate(&self, table: PsmTable) -> Result<PsmTable> {
        let coordinates: Vec<ResolvedCoordinateSet> = table
            .protein_ids()?
            .iter()
            .map(|ids| self.resolve_ids(ids))
            .collect();

        let unresolved = coordinates.iter().filter(|c| c.has_not_found()).count();
        info!(
            "Resolved coordinates for {} rows, {} with unresolved ids",
            coordinates.len(),
            unresolved
        );

        table.insert_column(
            GENOME_COORDINATES_POS,
            GENOME_COORDINATES_COL,
            coordinates.iter().map(|c| c.to_string()).collect(),
        )
    }
}

use log::{debug, warn};

use orfmap_core::errors::{OrfmapError, Result};
use orfmap_core::models::{GenomicInterval, LocusTable, OrfId, ResolvedSlot};

///
/// Turns a decoded ORF identifier into an absolute, ordered genome interval.
///
/// Loci coming from a reference annotation are reported with the start and
/// end they were loaded with, in every implementation.
///
pub trait CoordinateResolver {
    ///
    /// Resolve one decoded id.
    ///
    /// Returns `UnresolvedLocus` when the parent locus is not in the table.
    ///
    fn resolve(&self, id: &OrfId) -> Result<GenomicInterval>;

    ///
    /// Decode and resolve one raw protein id into a slot of a coordinate set.
    ///
    /// Never fails: ids that can't be decoded or resolved become
    /// [ResolvedSlot::NotFound].
    ///
    fn resolve_slot(&self, raw: &str) -> ResolvedSlot {
        let resolved = OrfId::decode(raw).and_then(|id| self.resolve(&id));
        match resolved {
            Ok(interval) => ResolvedSlot::Resolved(interval),
            Err(OrfmapError::AmbiguousIdentifierFormat(id)) => {
                warn!("Unrecognised protein id format: {:?}", id);
                ResolvedSlot::NotFound
            }
            Err(e) => {
                debug!("{}", e);
                ResolvedSlot::NotFound
            }
        }
    }
}

fn lookup(table: &LocusTable, name: &str) -> Result<GenomicInterval> {
    table
        .get(name)
        .map(|locus| GenomicInterval::ordered(locus.start(), locus.end()))
        .ok_or_else(|| OrfmapError::UnresolvedLocus(name.to_string()))
}

///
/// Resolver for genome databases.
///
/// Genome-anchored ORFs carry their absolute span; annotated proteins are
/// looked up in the reference annotation.
///
#[derive(Debug, Clone, Default)]
pub struct GenomeResolver {
    pub reference: LocusTable,
}

impl GenomeResolver {
    pub fn new(reference: LocusTable) -> Self {
        GenomeResolver { reference }
    }
}

impl CoordinateResolver for GenomeResolver {
    fn resolve(&self, id: &OrfId) -> Result<GenomicInterval> {
        match id {
            OrfId::GenomeAnchored { start, end, .. } => Ok(GenomicInterval::ordered(*start, *end)),
            OrfId::ReferenceAnnotated { name } => lookup(&self.reference, name),
            OrfId::TranscriptAnchored { .. } => Err(OrfmapError::UnresolvedLocus(format!(
                "{} is transcript-anchored, no transcripts loaded",
                id
            ))),
        }
    }
}

///
/// Resolver for transcriptome databases.
///
/// A transcript-anchored ORF span is local to its parent transcript:
/// the absolute interval is `parent.start + local_start` to
/// `parent.start + local_end`, swapped into order for reverse-strand ORFs.
///
#[derive(Debug, Clone, Default)]
pub struct TranscriptResolver {
    pub transcripts: LocusTable,
    pub reference: LocusTable,
}

impl TranscriptResolver {
    pub fn new(transcripts: LocusTable, reference: LocusTable) -> Self {
        TranscriptResolver {
            transcripts,
            reference,
        }
    }
}

impl CoordinateResolver for TranscriptResolver {
    fn resolve(&self, id: &OrfId) -> Result<GenomicInterval> {
        match id {
            OrfId::TranscriptAnchored { start, end, .. } => {
                // decode guarantees a name for transcript-anchored ids
                let name = id.transcript_name().unwrap_or_default();
                let parent = self
                    .transcripts
                    .get(&name)
                    .ok_or(OrfmapError::UnresolvedLocus(name))?;
                let offset = |local: u64| {
                    parent.start().checked_add(local).ok_or_else(|| {
                        OrfmapError::AmbiguousIdentifierFormat(format!(
                            "{} lies past the end of the coordinate range",
                            id
                        ))
                    })
                };
                Ok(GenomicInterval::ordered(offset(*start)?, offset(*end)?))
            }
            OrfId::GenomeAnchored { start, end, .. } => Ok(GenomicInterval::ordered(*start, *end)),
            OrfId::ReferenceAnnotated { name } => lookup(&self.reference, name),
        }
    }
}

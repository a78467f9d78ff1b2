//! Pipeline stages: one full read and one full write of a PSM table each.
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use orfmap_annotation::{AnnotationLoader, ReferenceLoader, TranscriptLoader};
use orfmap_core::PipelineConfig;
use orfmap_core::models::PsmTable;
use orfmap_io::{PsmWrite, read_psm_table};

use crate::filter::PsmFilter;
use crate::matcher::ProvenanceMatcher;
use crate::resolver::{GenomeResolver, TranscriptResolver};
use crate::unique::{KeepMode, UniquenessClassifier};

///
/// Attach genome coordinates to matches against the genome database.
///
/// # Arguments
/// - psm: PSM score table from the search
/// - reference_gff: curated reference annotation
/// - output: where to write the augmented table
/// - config: pipeline configuration
pub fn genome_coordinates(
    psm: &Path,
    reference_gff: &Path,
    output: &Path,
    config: &PipelineConfig,
) -> Result<PsmTable> {
    info!("Resolving genome coordinates for {}", psm.display());

    let reference = ReferenceLoader::from(config)
        .load(reference_gff)
        .with_context(|| format!("Failed to load reference annotation {}", reference_gff.display()))?;

    let table = read_psm_table(psm)
        .with_context(|| format!("Failed to read PSM table {}", psm.display()))?;
    let table = PsmFilter::genome().apply(table)?;

    let table = ProvenanceMatcher::new(GenomeResolver::new(reference)).annotate(table)?;

    table
        .write_tsv(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(table)
}

///
/// Attach genome coordinates to matches against the transcriptome database.
///
/// Annotated proteins that didn't come from an assembled transcript are
/// looked up in the reference annotation.
///
pub fn transcript_coordinates(
    psm: &Path,
    transcript_gtf: &Path,
    reference_gff: &Path,
    output: &Path,
    config: &PipelineConfig,
) -> Result<PsmTable> {
    info!("Resolving transcript coordinates for {}", psm.display());

    let transcripts = TranscriptLoader::from(config)
        .load(transcript_gtf)
        .with_context(|| format!("Failed to load transcripts {}", transcript_gtf.display()))?;
    let reference = ReferenceLoader::from(config)
        .load(reference_gff)
        .with_context(|| format!("Failed to load reference annotation {}", reference_gff.display()))?;

    let table = read_psm_table(psm)
        .with_context(|| format!("Failed to read PSM table {}", psm.display()))?;
    let table = PsmFilter::transcriptome().apply(table)?;

    let resolver = TranscriptResolver::new(transcripts, reference);
    let table = ProvenanceMatcher::new(resolver).annotate(table)?;

    table
        .write_tsv(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(table)
}

///
/// Classify confident ORF matches as unique or not.
///
/// # Arguments
/// - coordinate_table: output of [genome_coordinates] or [transcript_coordinates]
/// - output: where to write the classified table
/// - keep: write every row, or only the unique ones
/// - config: pipeline configuration
pub fn unique_peptides(
    coordinate_table: &Path,
    output: &Path,
    keep: KeepMode,
    config: &PipelineConfig,
) -> Result<PsmTable> {
    info!(
        "Classifying peptides from {} (keep {})",
        coordinate_table.display(),
        keep
    );

    let table = read_psm_table(coordinate_table)
        .with_context(|| format!("Failed to read {}", coordinate_table.display()))?;
    let table = PsmFilter::confident(config).apply(table)?;

    let table = UniquenessClassifier::from(config).annotate(table)?;
    let table = keep.apply(table)?;

    table
        .write_tsv(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(table)
}

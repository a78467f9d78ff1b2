/// Column names of the tab-separated PSM score table.
pub const PROTEIN_IDS_COL: &str = "proteinIds";
pub const PEPTIDE_COL: &str = "peptide";
pub const Q_VALUE_COL: &str = "q-value";
pub const PEP_COL: &str = "posterior_error_prob";

/// Derived columns written by the coordinate and uniqueness stages.
pub const GENOME_COORDINATES_COL: &str = "Genome Coordinates";
pub const UNIQUE_PEPTIDE_COL: &str = "Unique Peptide";
pub const GENOME_COORDINATES_POS: usize = 5;
pub const UNIQUE_PEPTIDE_POS: usize = 6;

/// Delimiter between protein ids, and between resolved intervals.
pub const ID_DELIMITER: char = ',';
/// Marks a composite accession already tied to an external format.
pub const COMPOSITE_ACCESSION_MARK: char = '|';

pub const NOT_FOUND: &str = "not found";
pub const NOT_FOUND_ALT: &str = "not-found";

pub const GENOME_ORF_TAG: &str = "gORF";
pub const TRANSCRIPT_ORF_TAG: &str = "tORF";

/// Canonical header of a 9-column feature file.
pub const ANNOTATION_COLUMNS: [&str; 9] = [
    "seqname",
    "source",
    "feature",
    "start",
    "end",
    "score",
    "strand",
    "frame",
    "attributes",
];

pub const DEFAULT_AMBIGUITY_CEILING: usize = 10;
pub const DEFAULT_MAX_Q_VALUE: f64 = 0.05;
pub const DEFAULT_MAX_PEP: f64 = 0.01;
pub const DEFAULT_TRANSCRIPT_LABEL: &str = "STRG";
pub const DEFAULT_REFERENCE_SOURCES: &[&str] = &["RefSeq", "ena"];
pub const DEFAULT_PROCESSES: usize = 1;

/// Marker the search engine puts in decoy protein ids.
pub const DECOY_TAG: &str = "Decoy";

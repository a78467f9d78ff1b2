use log::warn;

use orfmap_core::PipelineConfig;
use orfmap_core::consts::DEFAULT_TRANSCRIPT_LABEL;
use orfmap_core::errors::{OrfmapError, Result};
use orfmap_core::models::{Locus, LocusTable};

use crate::AnnotationLoader;
use crate::consts::{TRANSCRIPT_FEATURE, TRANSCRIPT_VERSION_MARKER};
use crate::feature::{canonical_header, parse_feature_table, second_attribute_value};

///
/// Loader for the transcript feature file written by the assembler.
///
#[derive(Debug, Clone)]
pub struct TranscriptLoader {
    /// Prefix of assembler-generated transcript ids.
    pub label: String,
    pub version_marker: String,
}

impl Default for TranscriptLoader {
    fn default() -> Self {
        TranscriptLoader {
            label: DEFAULT_TRANSCRIPT_LABEL.to_string(),
            version_marker: TRANSCRIPT_VERSION_MARKER.to_string(),
        }
    }
}

impl From<&PipelineConfig> for TranscriptLoader {
    fn from(config: &PipelineConfig) -> Self {
        TranscriptLoader {
            label: config.transcript_label.clone(),
            ..Default::default()
        }
    }
}

impl TranscriptLoader {
    ///
    /// Replace the version marker line with the canonical header.
    ///
    /// Comment lines before the marker are dropped. The marker must show up
    /// before the first feature row.
    ///
    pub fn rewrite_header(&self, source: &str) -> Result<String> {
        let mut lines = source.lines();
        let mut found = false;

        for line in lines.by_ref() {
            if line.starts_with(&self.version_marker) {
                found = true;
                break;
            }
            if !line.starts_with('#') && !line.trim().is_empty() {
                break;
            }
        }

        if !found {
            return Err(OrfmapError::MalformedAnnotation(format!(
                "Version marker {:?} not found before the first feature row",
                self.version_marker
            )));
        }

        let mut text = canonical_header();
        for line in lines {
            text.push('\n');
            text.push_str(line);
        }
        text.push('\n');
        Ok(text)
    }

    ///
    /// Assembler ids come as `LABEL.gene.isoform`; they are keyed by
    /// `LABEL.gene`. Any other id is kept as is.
    ///
    pub fn transcript_key(&self, id: &str) -> String {
        let parts: Vec<&str> = id.split('.').collect();
        if parts.len() >= 3 && parts[0] == self.label {
            parts[..2].join(".")
        } else {
            id.to_string()
        }
    }
}

impl AnnotationLoader for TranscriptLoader {
    fn parse(&self, source: &str) -> Result<LocusTable> {
        let rows = parse_feature_table(&self.rewrite_header(source)?)?;

        let mut loci = Vec::new();
        for row in rows.into_iter().filter(|r| r.feature == TRANSCRIPT_FEATURE) {
            match second_attribute_value(&row.attributes) {
                Some(id) => loci.push(Locus::new(
                    self.transcript_key(&id),
                    row.start,
                    row.end,
                    row.strand,
                )),
                None => warn!("No transcript id in attributes, skipping row: {}", row.attributes),
            }
        }

        Ok(LocusTable::from(loci))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use orfmap_core::models::Strand;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/annotation")
            .join(file_name)
    }

    #[rstest]
    fn test_load_transcripts() {
        let loci = TranscriptLoader::default()
            .load(get_test_path("transcripts.gtf"))
            .unwrap();

        // exon rows are dropped
        assert_eq!(loci.len(), 3);

        let strg = loci.get("STRG.1").unwrap();
        assert_eq!((strg.start(), strg.end()), (500, 2000));

        let guided = loci.get("gene-Rv0001").unwrap();
        assert_eq!((guided.start(), guided.end()), (1, 1524));

        assert_eq!(loci.get("STRG.3").unwrap().strand, Strand::Reverse);
    }

    #[rstest]
    fn test_missing_marker() {
        let result = TranscriptLoader::default().load(get_test_path("no_marker.gtf"));
        assert!(matches!(result, Err(OrfmapError::MalformedAnnotation(_))));
    }

    #[rstest]
    fn test_rewrite_header() {
        let source = "# command line\n# StringTie version 2.2.1\nrow\n";
        let text = TranscriptLoader::default().rewrite_header(source).unwrap();
        assert_eq!(text, format!("{}\nrow\n", canonical_header()));
    }

    #[rstest]
    #[case("STRG.12.3", "STRG.12")]
    #[case("STRG.12", "STRG.12")]
    #[case("gene-Rv0001", "gene-Rv0001")]
    #[case("rna-NC_000962.3.1", "rna-NC_000962.3.1")]
    fn test_transcript_key(#[case] id: &str, #[case] expected: &str) {
        assert_eq!(TranscriptLoader::default().transcript_key(id), expected);
    }

    #[rstest]
    fn test_label_from_config() {
        let config = PipelineConfig {
            transcript_label: "uprot".to_string(),
            ..Default::default()
        };
        let loader = TranscriptLoader::from(&config);
        assert_eq!(loader.transcript_key("uprot.4.2"), "uprot.4");
        assert_eq!(loader.transcript_key("STRG.4.2"), "STRG.4.2");
    }
}

use log::{debug, warn};

use orfmap_core::PipelineConfig;
use orfmap_core::Result;
use orfmap_core::consts::DEFAULT_REFERENCE_SOURCES;
use orfmap_core::models::{Locus, LocusTable};

use crate::AnnotationLoader;
use crate::feature::{canonical_header, parse_feature_table, second_attribute_value};

///
/// Loader for a curated reference annotation.
///
/// Only rows whose `source` column is one of `sources` are kept. The locus
/// name is the value of the second attribute (`Parent=gene-Rv0001` gives
/// `gene-Rv0001`).
///
#[derive(Debug, Clone)]
pub struct ReferenceLoader {
    pub sources: Vec<String>,
}

impl Default for ReferenceLoader {
    fn default() -> Self {
        ReferenceLoader {
            sources: DEFAULT_REFERENCE_SOURCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl From<&PipelineConfig> for ReferenceLoader {
    fn from(config: &PipelineConfig) -> Self {
        ReferenceLoader {
            sources: config.reference_sources.clone(),
        }
    }
}

///
/// Drop `#` directives and put the canonical header in front of the rows,
/// unless the file already starts with it.
///
fn with_canonical_header(source: &str) -> String {
    let header = canonical_header();
    let mut body: Vec<&str> = source
        .lines()
        .filter(|l| !l.starts_with('#') && !l.trim().is_empty())
        .collect();

    if body.first().map(|l| l.trim_end()) == Some(header.as_str()) {
        body.remove(0);
    }

    let mut text = header;
    for line in body {
        text.push('\n');
        text.push_str(line);
    }
    text.push('\n');
    text
}

impl AnnotationLoader for ReferenceLoader {
    fn parse(&self, source: &str) -> Result<LocusTable> {
        let rows = parse_feature_table(&with_canonical_header(source))?;

        let mut loci = Vec::new();
        for row in rows {
            if !self.sources.iter().any(|s| *s == row.source) {
                debug!("Skipping {} feature from source {}", row.feature, row.source);
                continue;
            }
            match second_attribute_value(&row.attributes) {
                Some(name) => loci.push(Locus::new(name, row.start, row.end, row.strand)),
                None => warn!(
                    "No locus name in attributes, skipping row: {}",
                    row.attributes
                ),
            }
        }

        Ok(LocusTable::from(loci))
    }
}

use csv::{ReaderBuilder, StringRecord};

use orfmap_core::consts::ANNOTATION_COLUMNS;
use orfmap_core::errors::{OrfmapError, Result};
use orfmap_core::models::Strand;

///
/// One row of a 9-column feature file. Coordinates are taken verbatim.
///
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub seqname: String,
    pub source: String,
    pub feature: String,
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
    pub attributes: String,
}

pub fn canonical_header() -> String {
    ANNOTATION_COLUMNS.join("\t")
}

struct ColumnIndex {
    seqname: usize,
    source: usize,
    feature: usize,
    start: usize,
    end: usize,
    strand: usize,
    attributes: usize,
}

impl ColumnIndex {
    fn from_header(header: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            header.iter().position(|h| h.trim() == name).ok_or_else(|| {
                OrfmapError::MalformedAnnotation(format!("Missing required column: {}", name))
            })
        };
        Ok(ColumnIndex {
            seqname: find("seqname")?,
            source: find("source")?,
            feature: find("feature")?,
            start: find("start")?,
            end: find("end")?,
            strand: find("strand")?,
            attributes: find("attributes")?,
        })
    }
}

///
/// Parse tab-separated feature rows under a named header line.
///
/// The first line of `text` must be a header naming the 9 canonical columns.
/// Lines starting with `#` after it are ignored.
///
pub fn parse_feature_table(text: &str) -> Result<Vec<FeatureRow>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .comment(Some(b'#'))
        .flexible(true)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let header = rdr
        .headers()
        .map_err(|e| OrfmapError::MalformedAnnotation(format!("Unreadable header: {}", e)))?
        .clone();
    let idx = ColumnIndex::from_header(&header)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record
            .map_err(|e| OrfmapError::MalformedAnnotation(format!("Unreadable row: {}", e)))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() < header.len() {
            return Err(OrfmapError::MalformedAnnotation(format!(
                "Line {} has {} columns, expected {}",
                line,
                record.len(),
                header.len()
            )));
        }

        let coordinate = |i: usize, name: &str| {
            record[i].trim().parse::<u64>().map_err(|_| {
                OrfmapError::MalformedAnnotation(format!(
                    "Invalid {} on line {}: {:?}",
                    name, line, &record[i]
                ))
            })
        };

        rows.push(FeatureRow {
            seqname: record[idx.seqname].to_string(),
            source: record[idx.source].to_string(),
            feature: record[idx.feature].to_string(),
            start: coordinate(idx.start, "start")?,
            end: coordinate(idx.end, "end")?,
            strand: record[idx.strand].trim().parse()?,
            attributes: record[idx.attributes].to_string(),
        });
    }

    Ok(rows)
}

///
/// Value of the second `;`-delimited attribute, with its key removed.
///
/// Handles both GFF (`key=value`) and GTF (`key "value"`) layouts.
///
pub fn second_attribute_value(attributes: &str) -> Option<String> {
    let field = attributes.split(';').nth(1)?.trim();
    let value = match field.split_once('=') {
        Some((_, value)) => value,
        None => field.split_whitespace().last()?,
    };
    let value = value.trim().trim_matches('"');
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

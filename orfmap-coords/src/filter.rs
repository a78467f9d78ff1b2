use log::info;

use orfmap_core::PipelineConfig;
use orfmap_core::consts::*;
use orfmap_core::errors::Result;
use orfmap_core::models::{PsmRecord, PsmTable};

///
/// Row filter applied to PSM tables before coordinate resolution and
/// before uniqueness classification.
///
/// Every criterion is optional; the [Default] filter keeps everything.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PsmFilter {
    /// Drop rows claiming an id with a pipe-delimited composite accession.
    pub drop_composite: bool,
    /// Keep only rows claiming at least one ORF id.
    pub require_orf: bool,
    /// Drop rows whose ids contain this tag.
    pub decoy_tag: Option<String>,
    /// Keep rows with `q-value` strictly below this.
    pub max_q_value: Option<f64>,
    /// Keep rows with `posterior_error_prob` strictly below this.
    pub max_posterior_error_prob: Option<f64>,
    /// Drop rows whose `Genome Coordinates` carry an unresolved slot.
    pub drop_not_found: bool,
}

impl PsmFilter {
    /// Filter for genome database matches, ahead of resolution.
    pub fn genome() -> Self {
        PsmFilter {
            drop_composite: true,
            ..Default::default()
        }
    }

    /// Filter for transcriptome database matches, ahead of resolution.
    pub fn transcriptome() -> Self {
        PsmFilter {
            drop_composite: true,
            require_orf: true,
            ..Default::default()
        }
    }

    ///
    /// Filter for confident ORF matches with fully resolved coordinates,
    /// ahead of uniqueness classification.
    ///
    pub fn confident(config: &PipelineConfig) -> Self {
        PsmFilter {
            drop_composite: true,
            require_orf: true,
            decoy_tag: Some(DECOY_TAG.to_string()),
            max_q_value: Some(config.max_q_value),
            max_posterior_error_prob: Some(config.max_posterior_error_prob),
            drop_not_found: true,
        }
    }

    ///
    /// Keep the rows passing every criterion.
    ///
    /// The table needs the `peptide`, `proteinIds`, `q-value` and
    /// `posterior_error_prob` columns, plus `Genome Coordinates` when
    /// `drop_not_found` is set.
    ///
    pub fn apply(&self, table: PsmTable) -> Result<PsmTable> {
        let records = table.records()?;
        let coordinates = if self.drop_not_found {
            Some(table.column(GENOME_COORDINATES_COL)?)
        } else {
            None
        };

        let mask: Vec<bool> = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let unresolved = coordinates
                    .as_ref()
                    .is_some_and(|c| c[i].contains(NOT_FOUND) || c[i].contains(NOT_FOUND_ALT));
                self.keep(record) && !unresolved
            })
            .collect();

        let before = table.len();
        let table = table.retain_rows(&mask)?;
        info!("Kept {} of {} peptide matches", table.len(), before);
        Ok(table)
    }

    ///
    /// Whether a single match passes the id and score criteria.
    ///
    /// NaN scores never pass a threshold.
    ///
    pub fn keep(&self, record: &PsmRecord) -> bool {
        if self.drop_composite && record.has_composite_accession() {
            return false;
        }
        if self.require_orf && !record.claims_orf() {
            return false;
        }
        if let Some(tag) = &self.decoy_tag {
            if record.protein_ids.iter().any(|id| id.contains(tag.as_str())) {
                return false;
            }
        }
        let below = |value: f64, max: Option<f64>| max.is_none_or(|max| value < max);
        below(record.q_value, self.max_q_value)
            && below(record.posterior_error_prob, self.max_posterior_error_prob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use orfmap_core::OrfmapError;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[fixture]
    fn table() -> PsmTable {
        PsmTable::new(
            strings(&["PSMId", "q-value", "posterior_error_prob", "peptide", GENOME_COORDINATES_COL, "proteinIds"]),
            vec![
                strings(&["ok", "0.001", "0.001", "K.A.R", "600-750", "tORF_STRG.1.1_100-250_"]),
                strings(&["pipe", "0.001", "0.001", "K.B.R", "1-10", "lcl|NC_000962.3_cds_1"]),
                strings(&["ref", "0.001", "0.001", "K.C.R", "1-1524", "gene-Rv0001"]),
                strings(&["decoy", "0.001", "0.001", "K.D.R", "1-10", "Decoy_tORF_STRG.1.1_5-80_"]),
                strings(&["weak", "0.05", "0.001", "K.E.R", "600-750", "tORF_STRG.1.1_100-250_"]),
                strings(&["pep", "0.001", "0.2", "K.F.R", "600-750", "tORF_STRG.1.1_100-250_"]),
                strings(&["lost", "0.001", "0.001", "K.G.R", "600-750,not found", "tORF_STRG.1.1_100-250_,tORF_X.1_1-2_"]),
            ],
        )
        .unwrap()
    }

    fn kept(table: &PsmTable) -> Vec<&str> {
        table.rows().iter().map(|r| r[0].as_str()).collect()
    }

    #[rstest]
    fn test_default_keeps_everything(table: PsmTable) {
        let filtered = PsmFilter::default().apply(table).unwrap();
        assert_eq!(filtered.len(), 7);
    }

    #[rstest]
    fn test_genome_filter(table: PsmTable) {
        let filtered = PsmFilter::genome().apply(table).unwrap();
        assert_eq!(kept(&filtered), vec!["ok", "ref", "decoy", "weak", "pep", "lost"]);
    }

    #[rstest]
    fn test_transcriptome_filter(table: PsmTable) {
        let filtered = PsmFilter::transcriptome().apply(table).unwrap();
        assert_eq!(kept(&filtered), vec!["ok", "decoy", "weak", "pep", "lost"]);
    }

    #[rstest]
    fn test_confident_filter(table: PsmTable) {
        let filtered = PsmFilter::confident(&PipelineConfig::default())
            .apply(table)
            .unwrap();
        assert_eq!(kept(&filtered), vec!["ok"]);
    }

    #[rstest]
    fn test_bad_score() {
        let table = PsmTable::new(
            strings(&["q-value", "posterior_error_prob", "peptide", "proteinIds"]),
            vec![strings(&["high", "0.001", "K.A.R", "gORF__1_1-2_"])],
        )
        .unwrap();
        assert!(matches!(
            PsmFilter::default().apply(table),
            Err(OrfmapError::MalformedPsmTable(_))
        ));
    }

    #[rstest]
    #[case(f64::NAN, 0.001, false)]
    #[case(0.001, f64::NAN, false)]
    #[case(0.049, 0.009, true)]
    #[case(0.05, 0.001, false)]
    fn test_thresholds_are_strict(#[case] q_value: f64, #[case] pep: f64, #[case] expected: bool) {
        let record = PsmRecord {
            peptide: "K.A.R".to_string(),
            protein_ids: strings(&["gORF__1_398-493_"]),
            q_value,
            posterior_error_prob: pep,
        };
        let filter = PsmFilter::confident(&PipelineConfig::default());
        assert_eq!(filter.keep(&record), expected);
    }
}

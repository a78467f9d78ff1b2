use std::fmt::{self, Display};
use std::str::FromStr;

use log::info;

use orfmap_core::PipelineConfig;
use orfmap_core::consts::{
    DEFAULT_AMBIGUITY_CEILING, GENOME_COORDINATES_COL, UNIQUE_PEPTIDE_COL, UNIQUE_PEPTIDE_POS,
};
use orfmap_core::errors::{OrfmapError, Result};
use orfmap_core::models::{PsmTable, ResolvedCoordinateSet};

const TRUE: &str = "True";
const FALSE: &str = "False";

///
/// Decides whether a peptide's evidence points at exactly one genomic locus.
///
#[derive(Debug, Clone)]
pub struct UniquenessClassifier {
    /// Coordinate sets with at least this many intervals are never unique.
    pub ambiguity_ceiling: usize,
}

impl Default for UniquenessClassifier {
    fn default() -> Self {
        UniquenessClassifier {
            ambiguity_ceiling: DEFAULT_AMBIGUITY_CEILING,
        }
    }
}

impl From<&PipelineConfig> for UniquenessClassifier {
    fn from(config: &PipelineConfig) -> Self {
        UniquenessClassifier {
            ambiguity_ceiling: config.ambiguity_ceiling,
        }
    }
}

impl UniquenessClassifier {
    ///
    /// `true` only when every slot resolved, there are fewer intervals than
    /// the ceiling, and all of them are the same span.
    ///
    pub fn classify(&self, coordinates: &ResolvedCoordinateSet) -> bool {
        if coordinates.len() >= self.ambiguity_ceiling {
            return false;
        }
        let Some(intervals) = coordinates.intervals() else {
            return false;
        };
        match intervals.split_first() {
            Some((first, rest)) => rest.iter().all(|i| i == first),
            None => false,
        }
    }

    ///
    /// Insert the `Unique Peptide` column, computed from the
    /// `Genome Coordinates` column.
    ///
    pub fn annotate(&self, table: PsmTable) -> Result<PsmTable> {
        let verdicts = table
            .column(GENOME_COORDINATES_COL)?
            .into_iter()
            .map(|raw| -> Result<bool> {
                let set = ResolvedCoordinateSet::from_str(raw)?;
                Ok(self.classify(&set))
            })
            .collect::<Result<Vec<_>>>()?;

        let unique = verdicts.iter().filter(|v| **v).count();
        info!("{} of {} peptide matches are unique", unique, verdicts.len());

        table.insert_column(
            UNIQUE_PEPTIDE_POS,
            UNIQUE_PEPTIDE_COL,
            verdicts
                .into_iter()
                .map(|v| if v { TRUE } else { FALSE }.to_string())
                .collect(),
        )
    }
}

///
/// Which rows the uniqueness stage writes out.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeepMode {
    #[default]
    All,
    Unique,
}

impl KeepMode {
    ///
    /// Keep the rows selected by this mode from a table
    /// already carrying the `Unique Peptide` column.
    ///
    pub fn apply(&self, table: PsmTable) -> Result<PsmTable> {
        match self {
            KeepMode::All => Ok(table),
            KeepMode::Unique => {
                let mask: Vec<bool> = table
                    .column(UNIQUE_PEPTIDE_COL)?
                    .into_iter()
                    .map(|v| v == TRUE)
                    .collect();
                table.retain_rows(&mask)
            }
        }
    }
}

impl FromStr for KeepMode {
    type Err = OrfmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(KeepMode::All),
            "unique" => Ok(KeepMode::Unique),
            other => Err(OrfmapError::MalformedPsmTable(format!(
                "Unknown keep mode: {}",
                other
            ))),
        }
    }
}

impl Display for KeepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepMode::All => write!(f, "all"),
            KeepMode::Unique => write!(f, "unique"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn set(raw: &str) -> ResolvedCoordinateSet {
        raw.parse().unwrap()
    }

    #[rstest]
    #[case("398-493", true)]
    #[case("398-493,398-493", true)]
    #[case("493-398,398-493", true)]
    #[case("398-493,2052-3260", false)]
    #[case("398-493,not found", false)]
    #[case("not found", false)]
    #[case("", false)]
    fn test_classify(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(UniquenessClassifier::default().classify(&set(raw)), expected);
    }

    #[rstest]
    fn test_ceiling_overrides_agreement() {
        let classifier = UniquenessClassifier::default();

        let nine = vec!["100-200"; 9].join(",");
        let ten = vec!["100-200"; 10].join(",");
        let twenty = vec!["100-200"; 20].join(",");

        assert!(classifier.classify(&set(&nine)));
        assert!(!classifier.classify(&set(&ten)));
        assert!(!classifier.classify(&set(&twenty)));
    }

    #[rstest]
    fn test_configured_ceiling() {
        let config = PipelineConfig {
            ambiguity_ceiling: 2,
            ..Default::default()
        };
        let classifier = UniquenessClassifier::from(&config);
        assert!(classifier.classify(&set("1-5")));
        assert!(!classifier.classify(&set("1-5,1-5")));
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[fixture]
    fn table() -> PsmTable {
        PsmTable::new(
            strings(&["PSMId", "score", "q-value", "posterior_error_prob", "peptide", GENOME_COORDINATES_COL, "proteinIds"]),
            vec![
                strings(&["s1", "2.3", "0.001", "0.001", "K.A.R", "398-493", "gORF__1_398-493_"]),
                strings(&["s2", "1.1", "0.01", "0.005", "K.B.R", "398-493,2052-3260", "gORF__1_398-493_,gene-Rv0002"]),
            ],
        )
        .unwrap()
    }

    #[rstest]
    fn test_annotate_and_keep(table: PsmTable) {
        let table = UniquenessClassifier::default().annotate(table).unwrap();

        assert_eq!(table.columns()[6], UNIQUE_PEPTIDE_COL);
        assert_eq!(table.column(UNIQUE_PEPTIDE_COL).unwrap(), vec!["True", "False"]);

        let all = KeepMode::All.apply(table.clone()).unwrap();
        assert_eq!(all.len(), 2);

        let unique = KeepMode::Unique.apply(table).unwrap();
        assert_eq!(unique.len(), 1);
        assert_eq!(unique.rows()[0][0], "s1");
    }

    #[rstest]
    fn test_annotate_needs_coordinates() {
        let table = PsmTable::new(strings(&["peptide"]), vec![strings(&["K.A.R"])]).unwrap();
        assert!(matches!(
            UniquenessClassifier::default().annotate(table),
            Err(OrfmapError::MalformedPsmTable(_))
        ));
    }

    #[rstest]
    #[case("all", KeepMode::All)]
    #[case("Unique", KeepMode::Unique)]
    fn test_keep_mode_from_str(#[case] raw: &str, #[case] expected: KeepMode) {
        assert_eq!(raw.parse::<KeepMode>().unwrap(), expected);
    }
}

use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

///
/// Tunable thresholds and conventions of the coordinate pipeline.
///
/// Every field has a default, so a config file only needs to name the
/// values it changes:
///
/// ```toml
/// ambiguity_ceiling = 5
/// max_q_value = 0.01
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Peptides claiming at least this many intervals are never unique.
    pub ambiguity_ceiling: usize,
    pub max_q_value: f64,
    pub max_posterior_error_prob: f64,
    /// Prefix of transcript ids generated by the assembler, e.g. `STRG.12.1`.
    pub transcript_label: String,
    /// Values of the `source` column marking curated reference features.
    pub reference_sources: Vec<String>,
    pub processes: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            ambiguity_ceiling: DEFAULT_AMBIGUITY_CEILING,
            max_q_value: DEFAULT_MAX_Q_VALUE,
            max_posterior_error_prob: DEFAULT_MAX_PEP,
            transcript_label: DEFAULT_TRANSCRIPT_LABEL.to_string(),
            reference_sources: DEFAULT_REFERENCE_SOURCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            processes: DEFAULT_PROCESSES,
        }
    }
}

#[derive(Error, Debug)]
pub enum PipelineConfigError {
    #[error("Invalid pipeline config: {0}")]
    InvalidValue(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type PipelineConfigResult<T> = std::result::Result<T, PipelineConfigError>;

impl PipelineConfig {
    ///
    /// Reject values no stage can work with.
    ///
    pub fn validate(&self) -> PipelineConfigResult<()> {
        if self.ambiguity_ceiling == 0 {
            return Err(PipelineConfigError::InvalidValue(
                "ambiguity_ceiling must be at least 1".to_string(),
            ));
        }
        if self.processes == 0 {
            return Err(PipelineConfigError::InvalidValue(
                "processes must be at least 1".to_string(),
            ));
        }
        if self.transcript_label.is_empty() {
            return Err(PipelineConfigError::InvalidValue(
                "transcript_label can't be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl TryFrom<&Path> for PipelineConfig {
    type Error = PipelineConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: PipelineConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    fn test_defaults_match_observed_values() {
        let config = PipelineConfig::default();
        assert_eq!(config.ambiguity_ceiling, 10);
        assert_eq!(config.max_q_value, 0.05);
        assert_eq!(config.max_posterior_error_prob, 0.01);
        assert_eq!(config.reference_sources, vec!["RefSeq", "ena"]);
    }

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/orfmap.toml");
        let config = PipelineConfig::try_from(path.as_path()).unwrap();

        assert_eq!(config.ambiguity_ceiling, 5);
        assert_eq!(config.processes, 4);
        // untouched fields keep their defaults
        assert_eq!(config.transcript_label, "STRG");
    }

    #[rstest]
    fn test_partial_toml_string() {
        let config: PipelineConfig = toml::from_str("max_q_value = 0.5").unwrap();
        assert_eq!(config.max_q_value, 0.5);
        assert_eq!(config.ambiguity_ceiling, 10);
    }

    #[rstest]
    fn test_zero_ceiling_is_rejected() {
        let config = PipelineConfig {
            ambiguity_ceiling: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[rstest]
    fn test_missing_file() {
        let path = PathBuf::from("../tests/data/does_not_exist.toml");
        let result = PipelineConfig::try_from(path.as_path());
        assert!(matches!(result, Err(PipelineConfigError::Io(_))));
    }
}

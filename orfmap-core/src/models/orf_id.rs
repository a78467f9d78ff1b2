//! Codec for ORF identifiers.
//!
//! Predicted ORFs carry their coordinates inside the identifier text. Two
//! anchored schemes share one grammar, `<tag>_<parent>_<start>-<end>_`:
//!
//! - `gORF_<parent>_<start>-<end>_`: the span is already a genome interval.
//!   The parent part is opaque and may hold any number of underscores, so
//!   the span is anchored at the *end* of the identifier.
//! - `tORF_<transcript>[_...]_<start>-<end>_`: the span is local to the
//!   transcript named by the first token after the tag.
//!
//! Identifiers without an ORF tag name an annotated locus directly. An
//! identifier carrying an ORF tag that does not follow the grammar is
//! rejected instead of being guessed at.
use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{GENOME_ORF_TAG, ID_DELIMITER, TRANSCRIPT_ORF_TAG};
use crate::errors::OrfmapError;

static ORF_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]*ORF_").expect("valid ORF tag pattern"));

static ANCHORED_ORF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tag>[gt]ORF)_(?P<parent>.*)_(?P<start>\d+)-(?P<end>\d+)_?$")
        .expect("valid anchored ORF pattern")
});

#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub enum OrfId {
    /// Span is absolute in genome coordinates.
    GenomeAnchored { parent: String, start: u64, end: u64 },
    /// Span is relative to the start of a transcript.
    TranscriptAnchored { parent: String, start: u64, end: u64 },
    /// No embedded coordinates; the id names a reference locus.
    ReferenceAnnotated { name: String },
}

impl OrfId {
    pub fn decode(id: &str) -> Result<OrfId, OrfmapError> {
        let id = id.trim();
        let ambiguous = || OrfmapError::AmbiguousIdentifierFormat(id.to_string());

        if id.is_empty() || id.contains(ID_DELIMITER) || id.contains(char::is_whitespace) {
            return Err(ambiguous());
        }

        if !ORF_TAG.is_match(id) {
            return Ok(OrfId::ReferenceAnnotated {
                name: id.to_string(),
            });
        }

        let caps = ANCHORED_ORF.captures(id).ok_or_else(ambiguous)?;
        let parent = caps["parent"].to_string();
        let start = caps["start"].parse::<u64>().map_err(|_| ambiguous())?;
        let end = caps["end"].parse::<u64>().map_err(|_| ambiguous())?;

        match &caps["tag"] {
            GENOME_ORF_TAG => Ok(OrfId::GenomeAnchored { parent, start, end }),
            TRANSCRIPT_ORF_TAG => {
                let decoded = OrfId::TranscriptAnchored { parent, start, end };
                match decoded.transcript_name() {
                    Some(name) if !name.is_empty() => Ok(decoded),
                    _ => Err(ambiguous()),
                }
            }
            _ => Err(ambiguous()),
        }
    }

    ///
    /// Name of the transcript a transcript-anchored ORF lives on: the first
    /// token of the parent, cut to its first two dot-separated components
    /// (`STRG.12.3` → `STRG.12`).
    ///
    pub fn transcript_name(&self) -> Option<String> {
        match self {
            OrfId::TranscriptAnchored { parent, .. } => {
                let token = parent.split('_').next().unwrap_or_default();
                Some(token.split('.').take(2).collect::<Vec<_>>().join("."))
            }
            _ => None,
        }
    }
}

impl FromStr for OrfId {
    type Err = OrfmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrfId::decode(s)
    }
}

impl Display for OrfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrfId::GenomeAnchored { parent, start, end } => {
                write!(f, "{}_{}_{}-{}_", GENOME_ORF_TAG, parent, start, end)
            }
            OrfId::TranscriptAnchored { parent, start, end } => {
                write!(f, "{}_{}_{}-{}_", TRANSCRIPT_ORF_TAG, parent, start, end)
            }
            OrfId::ReferenceAnnotated { name } => write!(f, "{}", name),
        }
    }
}

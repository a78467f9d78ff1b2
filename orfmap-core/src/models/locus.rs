use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::OrfmapError;

#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Strand {
    Forward,
    Reverse,
    Unstranded,
}

impl Strand {
    pub fn as_char(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
            Strand::Unstranded => '.',
        }
    }
}

impl FromStr for Strand {
    type Err = OrfmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            "." | "?" => Ok(Strand::Unstranded),
            _ => Err(OrfmapError::MalformedAnnotation(format!(
                "Invalid strand: {}",
                s
            ))),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

///
/// A named genomic or transcript interval with strand orientation.
///
/// Coordinates are kept as they appear in the annotation (1-based,
/// end-inclusive). `start <= end` always holds.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Locus {
    pub name: String,
    start: u64,
    end: u64,
    pub strand: Strand,
}

impl Locus {
    ///
    /// Create a locus, swapping `start` and `end` when given in reverse order.
    ///
    pub fn new(name: impl Into<String>, start: u64, end: u64, strand: Strand) -> Self {
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        Locus {
            name: name.into(),
            start,
            end,
            strand,
        }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }
}

impl Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.name, self.start, self.end, self.strand
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_new_keeps_order() {
        let locus = Locus::new("gene-Rv0001", 1, 1524, Strand::Forward);
        assert_eq!(locus.start(), 1);
        assert_eq!(locus.end(), 1524);
    }

    #[rstest]
    #[case(2000, 500)]
    #[case(500, 2000)]
    #[case(7, 7)]
    fn test_new_normalizes(#[case] start: u64, #[case] end: u64) {
        let locus = Locus::new("STRG.1", start, end, Strand::Reverse);
        assert!(locus.start() <= locus.end());
        assert_eq!(locus.start(), start.min(end));
        assert_eq!(locus.end(), start.max(end));
    }

    #[rstest]
    #[case("+", Strand::Forward)]
    #[case("-", Strand::Reverse)]
    #[case(".", Strand::Unstranded)]
    fn test_parse_strand(#[case] raw: &str, #[case] expected: Strand) {
        assert_eq!(raw.parse::<Strand>().unwrap(), expected);
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    fn test_parse_bad_strand() {
        assert!("x".parse::<Strand>().is_err());
    }
}

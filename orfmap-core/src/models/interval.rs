use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::{ID_DELIMITER, NOT_FOUND, NOT_FOUND_ALT};
use crate::errors::OrfmapError;

///
/// An absolute genome interval, written as `start-end`.
/// Construction orders the pair, so `start <= end` always holds.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub struct GenomicInterval {
    pub start: u64,
    pub end: u64,
}

impl GenomicInterval {
    pub fn ordered(a: u64, b: u64) -> Self {
        if a > b {
            GenomicInterval { start: b, end: a }
        } else {
            GenomicInterval { start: a, end: b }
        }
    }
}

impl Display for GenomicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for GenomicInterval {
    type Err = OrfmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || OrfmapError::MalformedPsmTable(format!("Invalid interval: {:?}", s));
        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let start = start.parse::<u64>().map_err(|_| invalid())?;
        let end = end.parse::<u64>().map_err(|_| invalid())?;
        Ok(GenomicInterval::ordered(start, end))
    }
}

///
/// Outcome of resolving a single claimed protein id.
///
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ResolvedSlot {
    Resolved(GenomicInterval),
    NotFound,
}

impl ResolvedSlot {
    pub fn interval(&self) -> Option<&GenomicInterval> {
        match self {
            ResolvedSlot::Resolved(interval) => Some(interval),
            ResolvedSlot::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolvedSlot::NotFound)
    }
}

impl Display for ResolvedSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedSlot::Resolved(interval) => write!(f, "{}", interval),
            ResolvedSlot::NotFound => write!(f, "{}", NOT_FOUND),
        }
    }
}

impl FromStr for ResolvedSlot {
    type Err = OrfmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            NOT_FOUND | NOT_FOUND_ALT => Ok(ResolvedSlot::NotFound),
            other => Ok(ResolvedSlot::Resolved(other.parse()?)),
        }
    }
}

///
/// Resolved coordinates of one PSM, positionally parallel to its
/// protein ids.
///
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct ResolvedCoordinateSet {
    pub slots: Vec<ResolvedSlot>,
}

impl ResolvedCoordinateSet {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn has_not_found(&self) -> bool {
        self.slots.iter().any(|s| s.is_not_found())
    }

    ///
    /// All intervals, or `None` when any slot is unresolved.
    ///
    pub fn intervals(&self) -> Option<Vec<GenomicInterval>> {
        self.slots.iter().map(|s| s.interval().copied()).collect()
    }
}

impl From<Vec<ResolvedSlot>> for ResolvedCoordinateSet {
    fn from(slots: Vec<ResolvedSlot>) -> Self {
        ResolvedCoordinateSet { slots }
    }
}

impl Display for ResolvedCoordinateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", ID_DELIMITER)?;
            }
            write!(f, "{}", slot)?;
        }
        Ok(())
    }
}

impl FromStr for ResolvedCoordinateSet {
    type Err = OrfmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(ResolvedCoordinateSet::default());
        }
        let slots = s
            .split(ID_DELIMITER)
            .map(ResolvedSlot::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ResolvedCoordinateSet { slots })
    }
}

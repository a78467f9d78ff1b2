use std::fmt::{self, Display};

use fxhash::FxHashMap;

use crate::models::Locus;

///
/// Name → [Locus] lookup built once from an annotation and read-only
/// afterwards. When two loci share a name, the later one wins.
///
#[derive(Clone, Debug, Default)]
pub struct LocusTable {
    loci: FxHashMap<String, Locus>,
}

impl LocusTable {
    pub fn get(&self, name: &str) -> Option<&Locus> {
        self.loci.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loci.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Locus> {
        self.loci.values()
    }
}

impl FromIterator<Locus> for LocusTable {
    fn from_iter<T: IntoIterator<Item = Locus>>(iter: T) -> Self {
        let loci = iter
            .into_iter()
            .map(|locus| (locus.name.clone(), locus))
            .collect();
        LocusTable { loci }
    }
}

impl From<Vec<Locus>> for LocusTable {
    fn from(loci: Vec<Locus>) -> Self {
        loci.into_iter().collect()
    }
}

impl Display for LocusTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocusTable with {} loci.", self.len())
    }
}

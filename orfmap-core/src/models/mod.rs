pub mod interval;
pub mod locus;
pub mod locus_table;
pub mod orf_id;
pub mod psm;

// re-export for cleaner imports
pub use self::interval::{GenomicInterval, ResolvedCoordinateSet, ResolvedSlot};
pub use self::locus::{Locus, Strand};
pub use self::locus_table::LocusTable;
pub use self::orf_id::OrfId;
pub use self::psm::{PsmRecord, PsmTable};

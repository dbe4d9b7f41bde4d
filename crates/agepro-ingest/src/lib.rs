//! Survey CSV ingestion for the AGE-PRO catalog.

pub mod collector;
pub mod error;
pub mod normalize;
pub mod row;

pub use collector::{Collector, FileStats, collect_records};
pub use error::{IngestError, Result};
pub use normalize::{collapse_whitespace, normalize_molecule, parse_size};
pub use row::{RowFields, RowOutcome, SkipReason, parse_line, parse_record};

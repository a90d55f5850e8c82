//! Serializable records for the host platform.
//!
//! Enabled by the `interchange` feature. The host receives one [`UnitRecord`]
//! per unit; each entity names its parent by identity, with top-level
//! entities pointing at the unit root.

mod error;
mod records;

pub use error::InterchangeError;
pub use records::{EntityRecord, UnitRecord, unit_records};

use crate::hir::Corpus;

/// Serialize every unit record of `corpus` as pretty JSON.
pub fn to_json(corpus: &Corpus) -> Result<String, InterchangeError> {
    let records = unit_records(corpus);
    Ok(serde_json::to_string_pretty(&records)?)
}

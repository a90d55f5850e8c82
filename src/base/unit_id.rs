//! Unit identifiers.

use std::fmt;

/// Identifier of a unit inside a [`Corpus`](crate::hir::Corpus).
///
/// Assigned in insertion order when a unit is merged, so ids are dense and
/// can index the corpus' unit table directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitId(u32);

impl UnitId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

//! Entity identifiers.
//!
//! [`LocalEntityId`] indexes an entity inside its unit; [`EntityId`] pairs it
//! with the unit so it is unique across the corpus.

use std::fmt;

use crate::base::UnitId;

/// Index of an entity within its unit's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalEntityId(u32);

impl LocalEntityId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Corpus-wide entity identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    pub unit: UnitId,
    pub local: LocalEntityId,
}

impl EntityId {
    pub fn new(unit: UnitId, local: LocalEntityId) -> Self {
        Self { unit, local }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.unit, self.local.0)
    }
}

//! Flat records handed to the host platform.

use serde::{Deserialize, Serialize};

use crate::base::constants::UNIT_TYPE_TAG;
use crate::hir::{Corpus, Entity, UnitIndex};
use crate::parser::EntityKind;

/// One discovered entity, as the host materializes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub identity: String,
    pub type_tag: String,
    pub kind: EntityKind,
    pub name: String,
    pub qualified_name: String,
    /// Identity of the parent entity, or of the unit root.
    pub parent: String,
    pub start_line: u32,
    pub end_line: u32,
    pub rule: String,
}

/// A unit root record followed by its entities in registration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub identity: String,
    pub type_tag: String,
    pub path: String,
    pub file_name: String,
    pub start_line: u32,
    pub end_line: u32,
    pub entities: Vec<EntityRecord>,
}

impl EntityRecord {
    pub fn from_entity(unit: &UnitIndex, entity: &Entity, root_identity: &str) -> Self {
        let parent = entity
            .parent
            .and_then(|id| unit.get(id))
            .map_or_else(|| root_identity.to_string(), |p| p.identity.to_string());
        Self {
            identity: entity.identity.to_string(),
            type_tag: entity.type_tag().to_string(),
            kind: entity.kind,
            name: entity.name.to_string(),
            qualified_name: entity.qualified_name.to_string(),
            parent,
            start_line: entity.start_line(),
            end_line: entity.end_line(),
            rule: entity.rule.to_string(),
        }
    }
}

impl UnitRecord {
    pub fn from_unit(unit: &UnitIndex) -> Self {
        let identity = unit.root_identity();
        let entities = unit
            .entities()
            .iter()
            .map(|entity| EntityRecord::from_entity(unit, entity, &identity))
            .collect();
        let range = unit.root_range();
        Self {
            identity,
            type_tag: UNIT_TYPE_TAG.to_string(),
            path: unit.path().to_string(),
            file_name: unit.file_name().to_string(),
            start_line: range.start,
            end_line: range.end_or_start(),
            entities,
        }
    }
}

/// Records for every unit of the corpus, in merge order.
pub fn unit_records(corpus: &Corpus) -> Vec<UnitRecord> {
    corpus.units().iter().map(UnitRecord::from_unit).collect()
}

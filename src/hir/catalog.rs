//! The corpus catalog: every registered unit plus corpus-wide name tables.
//!
//! Units are merged one at a time after their produce phase has finished;
//! resolution only ever runs against a fully merged corpus.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use thiserror::Error;

use super::entity::Entity;
use super::ids::EntityId;
use super::registry::UnitIndex;
use crate::base::UnitId;
use crate::base::constants::QUALIFIER_SEPARATOR;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unit `{0}` is already part of the corpus")]
    DuplicateUnit(String),
}

#[derive(Clone, Debug, Default)]
pub struct Corpus {
    units: Vec<UnitIndex>,
    unit_by_path: FxHashMap<Arc<str>, UnitId>,
    /// Qualified name → entity, in merge order.
    by_qualified_name: IndexMap<Arc<str>, EntityId>,
    /// Short name → entities across all units.
    by_short_name: FxHashMap<SmolStr, Vec<EntityId>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a registered unit and index its entities.
    pub fn add_unit(&mut self, mut unit: UnitIndex) -> Result<UnitId, CatalogError> {
        if self.unit_by_path.contains_key(unit.path()) {
            return Err(CatalogError::DuplicateUnit(unit.path().to_string()));
        }
        let id = UnitId::new(self.units.len() as u32);
        unit.assign_id(id);

        for (local, entity) in unit.iter() {
            let entity_id = EntityId::new(id, local);
            if self.by_qualified_name.contains_key(&entity.qualified_name) {
                tracing::warn!(
                    "[CATALOG] {} already defined by another unit; keeping the first",
                    entity.qualified_name
                );
                continue;
            }
            self.by_qualified_name
                .insert(entity.qualified_name.clone(), entity_id);
            self.by_short_name
                .entry(entity.name.clone())
                .or_default()
                .push(entity_id);
        }

        tracing::debug!("[CATALOG] merged {} as {} ({} entities)", unit.path(), id, unit.len());
        self.unit_by_path.insert(unit.shared_path(), id);
        self.units.push(unit);
        Ok(id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.units.get(id.unit.index())?.get(id.local)
    }

    /// Exact lookup by qualified name.
    pub fn lookup(&self, qualified_name: &str) -> Option<&Entity> {
        self.lookup_id(qualified_name).and_then(|id| self.entity(id))
    }

    pub fn lookup_id(&self, qualified_name: &str) -> Option<EntityId> {
        self.by_qualified_name.get(qualified_name).copied()
    }

    /// Every entity carrying `name` as its short name.
    pub fn entities_named(&self, name: &str) -> &[EntityId] {
        self.by_short_name.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn has_short_name(&self, name: &str) -> bool {
        self.by_short_name.contains_key(name)
    }

    /// Entities whose qualified name ends with `.{name}`.
    pub fn qualified_suffix_matches(&self, name: &str) -> Vec<EntityId> {
        let suffix = format!("{}{}", QUALIFIER_SEPARATOR, name);
        self.by_qualified_name
            .iter()
            .filter(|(qualified_name, _)| qualified_name.ends_with(suffix.as_str()))
            .map(|(_, &id)| id)
            .collect()
    }

    /// Every entity in merge order, unit by unit.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.units.iter().flat_map(|unit| {
            unit.iter()
                .map(move |(local, entity)| (EntityId::new(unit.id(), local), entity))
        })
    }

    pub fn units(&self) -> &[UnitIndex] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitIndex> {
        self.units.get(id.index())
    }

    pub fn unit_by_path(&self, path: &str) -> Option<&UnitIndex> {
        self.unit_by_path.get(path).and_then(|&id| self.unit(id))
    }

    pub fn unit_id(&self, path: &str) -> Option<UnitId> {
        self.unit_by_path.get(path).copied()
    }

    /// Parent entity of `id`, or `None` for top-level entities.
    pub fn parent(&self, id: EntityId) -> Option<&Entity> {
        let unit = self.unit(id.unit)?;
        unit.parent(id.local)
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Number of entities across all units.
    pub fn len(&self) -> usize {
        self.units.iter().map(UnitIndex::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.units.iter().all(UnitIndex::is_empty)
    }
}

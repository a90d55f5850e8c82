//! Per-unit entity registry.
//!
//! A [`UnitIndex`] is what remains of a unit once it has been scanned: an
//! arena of [`Entity`] values plus the lookup tables the cross-unit pass
//! needs. The text and the scan tree are consumed while it is built.
//!
//! ## Key Tables
//!
//! - `by_qualified_name` - qualified name → entity (one entry per name)
//! - `line_ranges` - qualified name → line range, for [`UnitIndex::find_container`]
//! - `by_short_name` - short name → entities carrying it

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::entity::{Entity, EntityDraft, entity_identity, tagged_identity};
use super::handlers::{HandlerError, HandlerRegistry};
use super::ids::LocalEntityId;
use crate::base::constants::{QUALIFIER_SEPARATOR, UNIT_TYPE_TAG};
use crate::base::text::is_identifier;
use crate::base::{LineRange, UnitId};
use crate::parser::{NodeId, ScanTree};

#[derive(Clone, Debug)]
pub struct UnitIndex {
    id: UnitId,
    path: Arc<str>,
    line_count: u32,
    entities: Vec<Entity>,
    roots: Vec<LocalEntityId>,
    by_qualified_name: IndexMap<Arc<str>, LocalEntityId>,
    line_ranges: IndexMap<Arc<str>, LineRange>,
    by_short_name: FxHashMap<SmolStr, Vec<LocalEntityId>>,
    /// Registrations coalesced into an existing entity.
    duplicates: usize,
    handler_errors: Vec<HandlerError>,
}

impl UnitIndex {
    /// An empty registry for the unit at `path`.
    pub fn new(path: impl Into<Arc<str>>, line_count: u32) -> Self {
        Self {
            id: UnitId::new(0),
            path: path.into(),
            line_count,
            entities: Vec::new(),
            roots: Vec::new(),
            by_qualified_name: IndexMap::new(),
            line_ranges: IndexMap::new(),
            by_short_name: FxHashMap::default(),
            duplicates: 0,
            handler_errors: Vec::new(),
        }
    }

    /// Register every node of `tree` (depth-first, parents before children),
    /// then run `handlers` over the registered entities.
    pub fn build(tree: ScanTree, handlers: &HandlerRegistry) -> Self {
        let mut index = UnitIndex::new(tree.shared_path(), tree.line_count());

        let mut pending: Vec<(Option<LocalEntityId>, NodeId)> =
            tree.roots().iter().rev().map(|&root| (None, root)).collect();
        while let Some((parent, node_id)) = pending.pop() {
            let node = tree.node(node_id);
            let draft = EntityDraft {
                kind: node.kind,
                name: node.name.clone(),
                owner: node.owner.clone(),
                rule: node.rule.clone(),
                range: node.range,
            };
            let id = index.register(parent, draft);
            pending.extend(node.children().iter().rev().map(|&child| (Some(id), child)));
        }
        drop(tree);

        if !handlers.is_empty() {
            index.run_handlers(handlers);
        }

        tracing::debug!(
            "[REGISTRY] {}: {} entities ({} coalesced)",
            index.path,
            index.entities.len(),
            index.duplicates
        );
        index
    }

    /// Register one entity under `parent` (the unit root when `None`).
    ///
    /// Idempotent by qualified name: if the name is already registered, the
    /// existing entity is returned unchanged and callers attach children to it.
    pub fn register(&mut self, parent: Option<LocalEntityId>, draft: EntityDraft) -> LocalEntityId {
        let qualified_name = self.qualify(parent, &draft);
        if let Some(&existing) = self.by_qualified_name.get(qualified_name.as_str()) {
            tracing::trace!(
                "[REGISTRY] {} already registered, coalescing line {}",
                qualified_name,
                draft.range.start
            );
            self.duplicates += 1;
            return existing;
        }

        let id = LocalEntityId::new(self.entities.len() as u32);
        let range = LineRange::new(draft.range.start, draft.range.end_or_start());
        let identity = entity_identity(draft.kind, &self.path, &qualified_name, range.start);
        let qualified_name: Arc<str> = qualified_name.into();

        self.by_qualified_name.insert(qualified_name.clone(), id);
        self.line_ranges.insert(qualified_name.clone(), range);
        self.by_short_name
            .entry(draft.name.clone())
            .or_default()
            .push(id);
        match parent {
            Some(parent) => self.entities[parent.index()].children.push(id),
            None => self.roots.push(id),
        }
        self.entities.push(Entity {
            kind: draft.kind,
            name: draft.name,
            qualified_name,
            identity: identity.into(),
            range,
            parent,
            rule: draft.rule,
            unit: self.id,
            children: Vec::new(),
        });
        id
    }

    fn qualify(&self, parent: Option<LocalEntityId>, draft: &EntityDraft) -> String {
        let prefix = match (&draft.owner, parent) {
            (Some(owner), _) => format!("{}{}{}", self.path, QUALIFIER_SEPARATOR, owner),
            (None, Some(parent)) => self.entities[parent.index()].qualified_name.to_string(),
            (None, None) => self.path.to_string(),
        };
        format!("{}{}{}", prefix, QUALIFIER_SEPARATOR, draft.name)
    }

    fn run_handlers(&mut self, handlers: &HandlerRegistry) {
        let scanned = self.entities.len();
        for idx in 0..scanned {
            let kind = self.entities[idx].kind;
            if !handlers.handles(kind) {
                continue;
            }
            let parent = LocalEntityId::new(idx as u32);
            let mut derived = Vec::new();
            for handler in handlers.handlers_for(kind) {
                match handler.handle(kind, &self.entities[idx], self) {
                    Ok(entities) => {
                        for entity in entities {
                            if is_identifier(&entity.name) {
                                derived.push(entity);
                            } else {
                                self.handler_errors.push(HandlerError::InvalidName {
                                    handler: handler.name().to_string(),
                                    name: entity.name.to_string(),
                                });
                            }
                        }
                    }
                    Err(err) => {
                        tracing::debug!("[REGISTRY] {}: {}", self.path, err);
                        self.handler_errors.push(err);
                    }
                }
            }
            for entity in derived {
                let draft = EntityDraft::new(entity.kind, entity.name, entity.range)
                    .with_rule("handler");
                self.register(Some(parent), draft);
            }
        }
    }

    /// Qualified name of the innermost entity whose range contains `line`,
    /// or the unit path when none does.
    ///
    /// Innermost means the smallest `end - start`; on a tie the entity
    /// registered first wins.
    pub fn find_container(&self, line: u32) -> &str {
        let mut best: Option<(&Arc<str>, u32)> = None;
        for (qualified_name, range) in &self.line_ranges {
            if !range.contains(line) {
                continue;
            }
            let width = range.width();
            if best.is_none_or(|(_, best_width)| width < best_width) {
                best = Some((qualified_name, width));
            }
        }
        best.map_or(&self.path, |(qualified_name, _)| qualified_name)
    }

    /// Entity whose range is innermost around `line`, if any.
    pub fn entity_at_line(&self, line: u32) -> Option<&Entity> {
        self.lookup(self.find_container(line))
    }

    pub(crate) fn assign_id(&mut self, id: UnitId) {
        self.id = id;
        for entity in &mut self.entities {
            entity.unit = id;
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Unit path; also the qualified name of the unit root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn shared_path(&self) -> Arc<str> {
        self.path.clone()
    }

    /// Last component of the unit path.
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.path)
    }

    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    /// Lines covered by the unit root.
    pub fn root_range(&self) -> LineRange {
        LineRange::new(1, self.line_count.max(1))
    }

    /// Host identity of the unit root record.
    pub fn root_identity(&self) -> String {
        tagged_identity(UNIT_TYPE_TAG, &self.path, &self.path, 1)
    }

    pub fn get(&self, id: LocalEntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    pub fn lookup(&self, qualified_name: &str) -> Option<&Entity> {
        self.by_qualified_name
            .get(qualified_name)
            .and_then(|&id| self.get(id))
    }

    pub fn lookup_id(&self, qualified_name: &str) -> Option<LocalEntityId> {
        self.by_qualified_name.get(qualified_name).copied()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Ids and entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (LocalEntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(idx, entity)| (LocalEntityId::new(idx as u32), entity))
    }

    pub fn entities_named(&self, name: &str) -> &[LocalEntityId] {
        self.by_short_name.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn short_names(&self) -> impl Iterator<Item = (&SmolStr, &[LocalEntityId])> {
        self.by_short_name
            .iter()
            .map(|(name, ids)| (name, ids.as_slice()))
    }

    pub fn line_ranges(&self) -> &IndexMap<Arc<str>, LineRange> {
        &self.line_ranges
    }

    pub fn roots(&self) -> &[LocalEntityId] {
        &self.roots
    }

    pub fn children(&self, id: LocalEntityId) -> impl Iterator<Item = &Entity> {
        self.get(id)
            .map_or(&[][..], Entity::children)
            .iter()
            .filter_map(|&child| self.get(child))
    }

    pub fn parent(&self, id: LocalEntityId) -> Option<&Entity> {
        self.get(id)
            .and_then(|entity| entity.parent)
            .and_then(|parent| self.get(parent))
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn handler_errors(&self) -> &[HandlerError] {
        &self.handler_errors
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

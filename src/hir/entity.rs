//! Registered entities.

use std::sync::Arc;

use smol_str::SmolStr;

use super::ids::LocalEntityId;
use crate::base::{LineRange, UnitId};
use crate::parser::EntityKind;

/// A named structural element of a unit.
///
/// Created once during registration and never mutated afterwards, apart from
/// the owning unit id assigned when the unit joins a corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub kind: EntityKind,
    /// Short identifier as written in the source.
    pub name: SmolStr,
    /// `unit_path.ancestors.name`, or `unit_path.owner.name` for owner-qualified matches.
    pub qualified_name: Arc<str>,
    /// Stable host identity: `{type_tag}?[{unit_path}].{qualified_name}@{start_line}`.
    pub identity: Arc<str>,
    pub range: LineRange,
    /// Containing entity; `None` means the unit root.
    pub parent: Option<LocalEntityId>,
    /// Grammar rule (or handler) that produced the entity.
    pub rule: SmolStr,
    pub unit: UnitId,
    pub(crate) children: Vec<LocalEntityId>,
}

impl Entity {
    pub fn children(&self) -> &[LocalEntityId] {
        &self.children
    }

    pub fn type_tag(&self) -> &'static str {
        self.kind.type_tag()
    }

    pub fn start_line(&self) -> u32 {
        self.range.start
    }

    pub fn end_line(&self) -> u32 {
        self.range.end_or_start()
    }

    /// Whether the entity sits directly under the unit root.
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }
}

/// Input to [`UnitIndex::register`](super::UnitIndex::register).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityDraft {
    pub kind: EntityKind,
    pub name: SmolStr,
    pub owner: Option<SmolStr>,
    pub rule: SmolStr,
    pub range: LineRange,
}

impl EntityDraft {
    pub fn new(kind: EntityKind, name: impl Into<SmolStr>, range: LineRange) -> Self {
        Self {
            kind,
            name: name.into(),
            owner: None,
            rule: SmolStr::default(),
            range,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<SmolStr>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_rule(mut self, rule: impl Into<SmolStr>) -> Self {
        self.rule = rule.into();
        self
    }
}

/// Stable identity string for an entity.
pub(crate) fn entity_identity(kind: EntityKind, unit_path: &str, qualified_name: &str, start_line: u32) -> String {
    tagged_identity(kind.type_tag(), unit_path, qualified_name, start_line)
}

pub(crate) fn tagged_identity(type_tag: &str, unit_path: &str, qualified_name: &str, start_line: u32) -> String {
    format!(
        "{}?[{}].{}@{}",
        type_tag,
        unit_path.replace('?', "_"),
        qualified_name,
        start_line
    )
}

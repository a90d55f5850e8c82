//! Entity handlers.
//!
//! Handlers are registered per [`EntityKind`] when the analyzer is composed.
//! After a unit's scan tree is registered, every entity of a handled kind is
//! passed to its handlers, which may derive extra entities. Derived entities
//! are registered as children of the handled entity and are not dispatched
//! again.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;
use thiserror::Error;

use super::entity::Entity;
use super::registry::UnitIndex;
use crate::base::LineRange;
use crate::parser::EntityKind;

/// An entity produced by a handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedEntity {
    pub kind: EntityKind,
    pub name: SmolStr,
    pub range: LineRange,
}

impl DerivedEntity {
    pub fn new(kind: EntityKind, name: impl Into<SmolStr>, range: LineRange) -> Self {
        Self {
            kind,
            name: name.into(),
            range,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("handler `{handler}` failed on {entity}: {message}")]
    Failed {
        handler: String,
        entity: String,
        message: String,
    },

    #[error("handler `{handler}` derived an entity with invalid name `{name}`")]
    InvalidName { handler: String, name: String },
}

impl HandlerError {
    pub fn failed(handler: &str, entity: &Entity, message: impl Into<String>) -> Self {
        Self::Failed {
            handler: handler.to_string(),
            entity: entity.qualified_name.to_string(),
            message: message.into(),
        }
    }
}

/// Typed plugin interface for kind-specific processing.
pub trait EntityHandler: Send + Sync {
    fn name(&self) -> &str;

    fn handle(
        &self,
        kind: EntityKind,
        entity: &Entity,
        unit: &UnitIndex,
    ) -> Result<Vec<DerivedEntity>, HandlerError>;
}

/// Handlers keyed by the kind they process, in registration order.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: Vec<(EntityKind, Arc<dyn EntityHandler>)>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: EntityKind, handler: impl EntityHandler + 'static) -> &mut Self {
        self.handlers.push((kind, Arc::new(handler)));
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, kind: EntityKind, handler: impl EntityHandler + 'static) -> Self {
        self.register(kind, handler);
        self
    }

    pub fn handlers_for(&self, kind: EntityKind) -> impl Iterator<Item = &dyn EntityHandler> {
        self.handlers
            .iter()
            .filter(move |(handled, _)| *handled == kind)
            .map(|(_, handler)| handler.as_ref())
    }

    pub fn handles(&self, kind: EntityKind) -> bool {
        self.handlers.iter().any(|(handled, _)| *handled == kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.handlers
                    .iter()
                    .map(|(kind, handler)| format!("{}: {}", kind, handler.name())),
            )
            .finish()
    }
}

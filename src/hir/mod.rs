//! High-level IR (HIR) - entities, registries, and the corpus catalog.
//!
//! ## Key Types
//!
//! - [`Entity`] - A named structural element with its line range
//! - [`UnitIndex`] - Entities of one unit plus its lookup tables
//! - [`Corpus`] - Every merged unit and the corpus-wide name tables
//! - [`Resolver`] - Ambiguity-averse name resolution
//! - [`HandlerRegistry`] - Kind-specific plugins run during registration
//!
//! ## Layers
//!
//! ```text
//! ScanTree (per unit)        ← from the parser
//!     │
//!     ▼
//! UnitIndex::build           ← register, dedup, line ranges, handlers
//!     │
//!     ▼
//! Corpus::add_unit           ← merge barrier
//!     │
//!     ▼
//! Resolver::resolve          ← cross-unit lookups
//! ```

mod catalog;
mod entity;
mod handlers;
mod ids;
mod operations;
mod registry;
mod resolve;

pub use catalog::{CatalogError, Corpus};
pub use entity::{Entity, EntityDraft};
pub use handlers::{DerivedEntity, EntityHandler, HandlerError, HandlerRegistry};
pub use ids::{EntityId, LocalEntityId};
pub use operations::{OperationSummary, OperationType, root_field, summarize_operation};
pub use registry::UnitIndex;
pub use resolve::{ResolveResult, Resolver, Unresolved};

//! # gqlscan-base
//!
//! Pattern-driven structural scanner and cross-file entity catalog for
//! GraphQL documents.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Directory loading, parallel analysis, run summary
//!   ↓
//! hir       → Entity registry, corpus catalog, resolution, handlers
//!   ↓
//! syntax    → Source units and decoding
//!   ↓
//! parser    → Sanitizer, grammar table, block styles, scanner
//!   ↓
//! base      → Primitives (UnitId, LineRange, text helpers)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → project)
// ============================================================================

/// Foundation types: UnitId, LineRange, identifier helpers
pub mod base;

/// Parser: sanitizer, grammar table, block styles, scanner
pub mod parser;

/// Syntax: source units and decoding
pub mod syntax;

/// High-level IR: entity registry, corpus catalog, resolver
pub mod hir;

/// Project management: loading and corpus analysis
pub mod project;

/// Host interchange records
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export foundation types
pub use base::{LineRange, UnitId};

pub use hir::{Corpus, Entity, EntityId, ResolveResult, Resolver, UnitIndex};
pub use parser::{BlockStyle, EntityKind, GrammarTable, Scanner};
pub use project::{Analysis, Analyzer, AnalyzerConfig};
pub use syntax::SourceUnit;

//! Pattern-driven structural scanner for GraphQL documents.
//!
//! No grammar in the compiler sense: a unit is sanitized, split into lines,
//! and each line is tried against an ordered table of single-line rules. A
//! depth counter and a container stack recover the nesting.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! sanitize → strings and comments blanked, same length and lines
//!     ↓
//! Scanner (GrammarTable + BlockStyle) → first rule per line wins
//!     ↓
//! ScanTree → arena of nodes with parent links
//!     ↓
//! HIR → per-unit registry, corpus catalog
//! ```

mod block_style;
mod error;
mod grammar;
mod kinds;
mod rules;
mod sanitize;
mod scanner;
mod tree;

pub use block_style::{BlockStyle, KeywordVocabulary};
pub use error::{GrammarError, GrammarWarning, RuleProblem};
pub use grammar::{CaptureSlots, GrammarTable, PatternRule, RuleMatch};
pub use kinds::{EntityKind, KIND_HIERARCHY, KindSpec, ParentKind, validate_hierarchy};
pub use rules::{GRAPHQL_RULES, RuleSpec};
pub use sanitize::{SanitizeOptions, sanitize, sanitize_with};
pub use scanner::Scanner;
pub use tree::{NodeId, ScanNode, ScanTree};

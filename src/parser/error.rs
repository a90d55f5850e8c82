//! Grammar construction errors and warnings.

use smol_str::SmolStr;
use thiserror::Error;

use super::kinds::EntityKind;

/// Fatal problems with the kind hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("kind hierarchy has no row for {0} at its declaration position")]
    MissingKind(EntityKind),

    #[error("kind hierarchy has {0} extra row(s)")]
    ExtraRows(usize),

    #[error("parent chain of {0} never reaches the unit root")]
    ParentCycle(EntityKind),

    #[error("{kind} declares {parent} as parent, but {parent} is not a container kind")]
    ParentNotContainer {
        kind: EntityKind,
        parent: EntityKind,
    },
}

/// Why a single rule was left out of a grammar table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleProblem {
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("pattern has no `name` capture group")]
    MissingNameCapture,
}

/// A rule skipped while building a grammar table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rule `{key}` ({pattern}) skipped: {problem}")]
pub struct GrammarWarning {
    pub key: SmolStr,
    pub pattern: String,
    pub problem: RuleProblem,
}

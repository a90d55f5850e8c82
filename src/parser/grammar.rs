//! Pattern grammar tables.
//!
//! A [`GrammarTable`] is an ordered list of compiled single-line rules. Each
//! rule produces one [`EntityKind`] and exposes its captures through the fixed
//! [`CaptureSlots`] struct, resolved once from the pattern's named groups.
//!
//! ## Building
//!
//! ```text
//! RuleSpec (key, kind, patterns)   ← static data or host configuration
//!     │  validate kind hierarchy   ← hard error
//!     │  compile each pattern      ← bad patterns become warnings
//!     ▼
//! GrammarTable (rules, warnings)
//! ```

use std::sync::LazyLock;

use regex::Regex;
use smol_str::SmolStr;

use super::error::{GrammarError, GrammarWarning, RuleProblem};
use super::kinds::{EntityKind, KIND_HIERARCHY, validate_hierarchy};
use super::rules::{GRAPHQL_RULES, RuleSpec};

/// Group indices of the captures a rule provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureSlots {
    pub name: usize,
    pub owner: Option<usize>,
}

/// Captured values of a successful rule match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleMatch {
    pub name: SmolStr,
    /// Explicit owner prefix, replacing the ancestor chain in the qualified name.
    pub owner: Option<SmolStr>,
}

/// A compiled single-line rule.
#[derive(Clone, Debug)]
pub struct PatternRule {
    key: SmolStr,
    kind: EntityKind,
    regex: Regex,
    captures: CaptureSlots,
    scoped: bool,
}

impl PatternRule {
    /// Compile a pattern. The pattern must contain a `name` group and may
    /// contain an `owner` group.
    pub fn compile(key: &str, kind: EntityKind, pattern: &str) -> Result<Self, RuleProblem> {
        let regex =
            Regex::new(pattern).map_err(|err| RuleProblem::InvalidPattern(err.to_string()))?;
        let slot = |wanted: &str| {
            regex
                .capture_names()
                .position(|name| name == Some(wanted))
        };
        let name = slot("name").ok_or(RuleProblem::MissingNameCapture)?;
        let owner = slot("owner");
        Ok(Self {
            key: SmolStr::new(key),
            kind,
            captures: CaptureSlots { name, owner },
            regex,
            scoped: false,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn captures(&self) -> CaptureSlots {
        self.captures
    }

    /// Whether the rule only applies inside a container of its parent kind.
    pub fn is_scoped(&self) -> bool {
        self.scoped
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Match a sanitized line. A match whose name capture is empty does not count.
    pub fn match_line(&self, line: &str) -> Option<RuleMatch> {
        let caps = self.regex.captures(line)?;
        let name = caps
            .get(self.captures.name)
            .map(|m| m.as_str().trim())
            .filter(|name| !name.is_empty())?;
        let owner = self
            .captures
            .owner
            .and_then(|slot| caps.get(slot))
            .map(|m| m.as_str().trim())
            .filter(|owner| !owner.is_empty())
            .map(SmolStr::new);
        Some(RuleMatch {
            name: SmolStr::new(name),
            owner,
        })
    }
}

static GRAPHQL_GRAMMAR: LazyLock<GrammarTable> = LazyLock::new(|| {
    GrammarTable::from_specs(GRAPHQL_RULES).unwrap_or_else(|err| {
        tracing::error!("[GRAMMAR] built-in table rejected: {}", err);
        GrammarTable::default()
    })
});

/// Ordered rule table. First match wins.
#[derive(Clone, Debug, Default)]
pub struct GrammarTable {
    rules: Vec<PatternRule>,
    warnings: Vec<GrammarWarning>,
}

impl GrammarTable {
    /// The shared built-in GraphQL table.
    pub fn graphql() -> &'static GrammarTable {
        &GRAPHQL_GRAMMAR
    }

    /// Build a table from rule specs.
    ///
    /// The kind hierarchy is validated first; an invalid hierarchy is fatal.
    /// Patterns that do not compile or lack a `name` group are skipped and
    /// recorded in [`warnings`](Self::warnings).
    pub fn from_specs(specs: &[RuleSpec<'_>]) -> Result<Self, GrammarError> {
        validate_hierarchy(KIND_HIERARCHY)?;

        let mut table = GrammarTable::default();
        for spec in specs {
            for pattern in spec.patterns {
                match PatternRule::compile(spec.key, spec.kind, pattern) {
                    Ok(mut rule) => {
                        rule.scoped = spec.scoped;
                        table.rules.push(rule);
                    }
                    Err(problem) => {
                        let warning = GrammarWarning {
                            key: SmolStr::new(spec.key),
                            pattern: (*pattern).to_string(),
                            problem,
                        };
                        tracing::warn!("[GRAMMAR] {}", warning);
                        table.warnings.push(warning);
                    }
                }
            }
        }
        tracing::debug!(
            "[GRAMMAR] {} rule(s) compiled, {} skipped",
            table.rules.len(),
            table.warnings.len()
        );
        Ok(table)
    }

    /// Try every rule in order and return the first match. Scopes are ignored.
    pub fn first_match(&self, line: &str) -> Option<(&PatternRule, RuleMatch)> {
        self.first_match_where(line, |_| true)
    }

    /// First match among the rules `applies` accepts.
    pub fn first_match_where(
        &self,
        line: &str,
        applies: impl Fn(&PatternRule) -> bool,
    ) -> Option<(&PatternRule, RuleMatch)> {
        self.rules
            .iter()
            .filter(|rule| applies(rule))
            .find_map(|rule| rule.match_line(line).map(|found| (rule, found)))
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn warnings(&self) -> &[GrammarWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

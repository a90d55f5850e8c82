//! Name resolution across the corpus.
//!
//! Resolution is ambiguity-averse: it returns an entity only when the name
//! identifies exactly one candidate under the active restrictions, and reports
//! not-found otherwise. It never picks arbitrarily among several candidates.
//!
//! ## Order
//!
//! ```text
//! 1. exact qualified name            → found
//! 2. owner restriction (if set)      → exactly one candidate under `owner.`
//! 3. unit restriction (if set)       → exactly one candidate in the context unit
//! 4. same-unit preference            → one in the context unit wins, several is ambiguous
//! 5. cross-unit                      → exactly one candidate anywhere
//! 6. suffix fallback (unknown name)  → qualified names ending in `.name`
//! ```

use super::catalog::Corpus;
use super::entity::Entity;
use super::ids::EntityId;
use crate::base::UnitId;
use crate::base::constants::QUALIFIER_SEPARATOR;

/// Why a name did not resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unresolved {
    /// No candidate at all.
    Unknown,
    /// More than one candidate survived the restrictions.
    Ambiguous { candidates: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult<'a> {
    Found(&'a Entity),
    NotFound(Unresolved),
}

impl<'a> ResolveResult<'a> {
    pub fn entity(&self) -> Option<&'a Entity> {
        match self {
            ResolveResult::Found(entity) => Some(entity),
            ResolveResult::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ResolveResult::Found(_))
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, ResolveResult::NotFound(Unresolved::Ambiguous { .. }))
    }

    /// Qualified name of the resolved entity.
    pub fn qualified_name(&self) -> Option<&'a str> {
        self.entity().map(|entity| entity.qualified_name.as_ref())
    }
}

/// Resolver over a merged corpus.
///
/// ```ignore
/// let result = Resolver::new(&corpus)
///     .from_unit(unit_id)
///     .restrict_to_owner("schema.graphql.User")
///     .resolve("email");
/// ```
#[derive(Clone, Debug)]
pub struct Resolver<'a> {
    corpus: &'a Corpus,
    context_unit: Option<UnitId>,
    restrict_to_unit: bool,
    owner: Option<&'a str>,
}

impl<'a> Resolver<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self {
            corpus,
            context_unit: None,
            restrict_to_unit: false,
            owner: None,
        }
    }

    /// Resolve on behalf of a reference written in `unit`.
    pub fn from_unit(mut self, unit: UnitId) -> Self {
        self.context_unit = Some(unit);
        self
    }

    /// Only accept candidates of the context unit.
    pub fn restrict_to_unit(mut self) -> Self {
        self.restrict_to_unit = true;
        self
    }

    /// Only accept candidates whose qualified name starts with `owner.`.
    pub fn restrict_to_owner(mut self, owner: &'a str) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn resolve(&self, name: &str) -> ResolveResult<'a> {
        if let Some(entity) = self.corpus.lookup(name) {
            tracing::trace!("[RESOLVE] '{}' exact qualified match", name);
            return ResolveResult::Found(entity);
        }

        if self.corpus.has_short_name(name) {
            let candidates = self.corpus.entities_named(name);
            let result = self.pick(candidates);
            tracing::trace!(
                "[RESOLVE] '{}' among {} short-name candidate(s): {:?}",
                name,
                candidates.len(),
                result.qualified_name()
            );
            return result;
        }

        let suffixed = self.corpus.qualified_suffix_matches(name);
        if suffixed.is_empty() {
            tracing::trace!("[RESOLVE] '{}' unknown", name);
            return ResolveResult::NotFound(Unresolved::Unknown);
        }
        let result = self.prefer_context_unit(&suffixed);
        tracing::trace!(
            "[RESOLVE] '{}' by suffix among {} candidate(s): {:?}",
            name,
            suffixed.len(),
            result.qualified_name()
        );
        result
    }

    fn pick(&self, candidates: &[EntityId]) -> ResolveResult<'a> {
        if let Some(owner) = self.owner {
            let owned: Vec<EntityId> = candidates
                .iter()
                .copied()
                .filter(|&id| self.is_owned_by(id, owner))
                .collect();
            return self.exactly_one(&owned);
        }

        if let (true, Some(unit)) = (self.restrict_to_unit, self.context_unit) {
            let local: Vec<EntityId> = candidates
                .iter()
                .copied()
                .filter(|id| id.unit == unit)
                .collect();
            return self.exactly_one(&local);
        }

        self.prefer_context_unit(candidates)
    }

    /// Same-unit candidates decide when there are any; otherwise the whole set
    /// must hold exactly one.
    fn prefer_context_unit(&self, candidates: &[EntityId]) -> ResolveResult<'a> {
        if let Some(unit) = self.context_unit {
            let local: Vec<EntityId> = candidates
                .iter()
                .copied()
                .filter(|id| id.unit == unit)
                .collect();
            if !local.is_empty() {
                return self.exactly_one(&local);
            }
        }
        self.exactly_one(candidates)
    }

    fn exactly_one(&self, candidates: &[EntityId]) -> ResolveResult<'a> {
        select_unique(self.corpus, candidates)
    }

    fn is_owned_by(&self, id: EntityId, owner: &str) -> bool {
        self.corpus.entity(id).is_some_and(|entity| {
            entity
                .qualified_name
                .strip_prefix(owner)
                .is_some_and(|rest| rest.starts_with(QUALIFIER_SEPARATOR))
        })
    }
}

/// Found when `candidates` holds exactly one entity, not-found otherwise.
pub(crate) fn select_unique<'a>(corpus: &'a Corpus, candidates: &[EntityId]) -> ResolveResult<'a> {
    match candidates {
        [only] => corpus
            .entity(*only)
            .map_or(ResolveResult::NotFound(Unresolved::Unknown), ResolveResult::Found),
        [] => ResolveResult::NotFound(Unresolved::Unknown),
        many => ResolveResult::NotFound(Unresolved::Ambiguous {
            candidates: many.len(),
        }),
    }
}

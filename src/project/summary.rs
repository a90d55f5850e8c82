//! Per-run statistics.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::error::UnitError;
use crate::hir::UnitIndex;
use crate::parser::EntityKind;
use crate::syntax::Encoding;

/// What one merged unit contributed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitSummary {
    pub path: Arc<str>,
    pub entities: usize,
    pub by_kind: BTreeMap<EntityKind, usize>,
    pub encoding: Encoding,
    pub duplicates: usize,
    pub handler_errors: usize,
}

impl UnitSummary {
    pub fn of(unit: &UnitIndex, encoding: Encoding) -> Self {
        let mut by_kind = BTreeMap::new();
        for entity in unit.entities() {
            *by_kind.entry(entity.kind).or_insert(0) += 1;
        }
        Self {
            path: unit.shared_path(),
            entities: unit.len(),
            by_kind,
            encoding,
            duplicates: unit.duplicates(),
            handler_errors: unit.handler_errors().len(),
        }
    }
}

/// A unit that contributed nothing.
#[derive(Debug)]
pub struct UnitFailure {
    pub path: Arc<str>,
    pub error: UnitError,
}

#[derive(Debug, Default)]
pub struct AnalysisSummary {
    pub units: Vec<UnitSummary>,
    pub failures: Vec<UnitFailure>,
    pub grammar_warnings: usize,
}

impl AnalysisSummary {
    pub fn new(grammar_warnings: usize) -> Self {
        Self {
            grammar_warnings,
            ..Self::default()
        }
    }

    pub(crate) fn record_unit(&mut self, unit: UnitSummary) {
        self.units.push(unit);
    }

    pub(crate) fn record_failure(&mut self, path: Arc<str>, error: UnitError) {
        self.failures.push(UnitFailure { path, error });
    }

    pub fn analyzed_units(&self) -> usize {
        self.units.len()
    }

    pub fn failed_units(&self) -> usize {
        self.failures.len()
    }

    pub fn total_entities(&self) -> usize {
        self.units.iter().map(|unit| unit.entities).sum()
    }

    /// Entity counts per kind across all merged units.
    pub fn entities_by_kind(&self) -> BTreeMap<EntityKind, usize> {
        let mut totals = BTreeMap::new();
        for unit in &self.units {
            for (&kind, &count) in &unit.by_kind {
                *totals.entry(kind).or_insert(0) += count;
            }
        }
        totals
    }

    pub fn latin1_units(&self) -> usize {
        self.units
            .iter()
            .filter(|unit| unit.encoding == Encoding::Latin1)
            .count()
    }

    pub fn failure(&self, path: &str) -> Option<&UnitFailure> {
        self.failures.iter().find(|failure| &*failure.path == path)
    }
}

impl fmt::Display for AnalysisSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} unit(s), {} entities, {} failed",
            self.analyzed_units(),
            self.total_entities(),
            self.failed_units()
        )?;
        let latin1 = self.latin1_units();
        if latin1 > 0 {
            write!(f, ", {} decoded as latin-1", latin1)?;
        }
        if self.grammar_warnings > 0 {
            write!(f, ", {} grammar warning(s)", self.grammar_warnings)?;
        }
        let kinds = self.entities_by_kind();
        if !kinds.is_empty() {
            let parts: Vec<String> = kinds
                .iter()
                .map(|(kind, count)| format!("{}={}", kind.display(), count))
                .collect();
            write!(f, " [{}]", parts.join(", "))?;
        }
        Ok(())
    }
}

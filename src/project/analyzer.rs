//! Corpus analysis: scan every unit, then merge.
//!
//! The produce phase (decode, sanitize, scan, register, run handlers) is
//! independent per unit and runs on the rayon pool when enabled. A panic while
//! producing one unit is caught and recorded for that unit only. The merge
//! phase is sequential and follows input order, so results do not depend on
//! scheduling.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{info, warn};

use super::config::AnalyzerConfig;
use super::error::{LoadError, UnitError};
use super::file_loader::{collect_file_paths, load_file};
use super::summary::{AnalysisSummary, UnitSummary};
use crate::hir::{Corpus, HandlerRegistry, Resolver, UnitIndex};
use crate::parser::GrammarTable;
use crate::syntax::{Encoding, SourceUnit};

struct Produced {
    unit: UnitIndex,
    encoding: Encoding,
}

type Outcome = (Arc<str>, Result<Produced, UnitError>);

#[derive(Clone, Debug)]
pub struct Analyzer {
    config: AnalyzerConfig,
    grammar: Arc<GrammarTable>,
    handlers: HandlerRegistry,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl Analyzer {
    /// Analyzer using the built-in GraphQL grammar and no handlers.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            grammar: Arc::new(GrammarTable::graphql().clone()),
            handlers: HandlerRegistry::default(),
        }
    }

    pub fn with_grammar(mut self, grammar: GrammarTable) -> Self {
        self.grammar = Arc::new(grammar);
        self
    }

    pub fn with_handlers(mut self, handlers: HandlerRegistry) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn grammar(&self) -> &GrammarTable {
        &self.grammar
    }

    /// Analyze in-memory units. Units merge in the order given.
    pub fn analyze(&self, units: Vec<SourceUnit>) -> Analysis {
        let outcomes = self.produce_all(units, |unit| self.produce(unit));
        self.merge(outcomes)
    }

    /// Load and analyze every accepted file under `dir`.
    ///
    /// Unreadable files are recorded as failed units; only a missing
    /// directory is an error.
    pub fn analyze_directory(&self, dir: &Path) -> Result<Analysis, LoadError> {
        let paths = collect_file_paths(dir, &self.config)?;
        info!("[SCAN] {} file(s) under {}", paths.len(), dir.display());
        let outcomes = self.produce_all(paths, |path| match load_file(&path) {
            Ok(unit) => self.produce(unit),
            Err(err) => (Arc::from(path.to_string_lossy().as_ref()), Err(err.into())),
        });
        Ok(self.merge(outcomes))
    }

    fn produce_all<T, F>(&self, inputs: Vec<T>, produce: F) -> Vec<Outcome>
    where
        T: Send,
        F: Fn(T) -> Outcome + Sync,
    {
        if self.config.parallel {
            inputs.into_par_iter().map(&produce).collect()
        } else {
            inputs.into_iter().map(&produce).collect()
        }
    }

    fn produce(&self, unit: SourceUnit) -> Outcome {
        let path: Arc<str> = Arc::from(unit.path());
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let (tree, encoding) =
                unit.scan(&self.grammar, &self.config.block_style, &self.config.sanitize);
            Produced {
                unit: UnitIndex::build(tree, &self.handlers),
                encoding,
            }
        }))
        .map_err(|payload| UnitError::Panicked(panic_message(payload.as_ref())));
        (path, result)
    }

    fn merge(&self, outcomes: Vec<Outcome>) -> Analysis {
        let mut corpus = Corpus::new();
        let mut summary = AnalysisSummary::new(self.grammar.warnings().len());

        for (path, outcome) in outcomes {
            let produced = match outcome {
                Ok(produced) => produced,
                Err(err) => {
                    warn!("[SCAN] {} skipped: {}", path, err);
                    summary.record_failure(path, err);
                    continue;
                }
            };
            let unit_summary = UnitSummary::of(&produced.unit, produced.encoding);
            match corpus.add_unit(produced.unit) {
                Ok(_) => summary.record_unit(unit_summary),
                Err(err) => {
                    warn!("[SCAN] {} skipped: {}", path, err);
                    summary.record_failure(path, err.into());
                }
            }
        }

        info!("[SCAN] {}", summary);
        Analysis { corpus, summary }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// A merged corpus and the statistics of the run that built it.
#[derive(Debug)]
pub struct Analysis {
    corpus: Corpus,
    summary: AnalysisSummary,
}

impl Analysis {
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn summary(&self) -> &AnalysisSummary {
        &self.summary
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.corpus)
    }

    pub fn into_parts(self) -> (Corpus, AnalysisSummary) {
        (self.corpus, self.summary)
    }
}

//! Analyzer configuration.

use std::path::Path;

use smol_str::SmolStr;

use crate::base::constants::GRAPHQL_EXTENSIONS;
use crate::parser::{BlockStyle, SanitizeOptions};

/// Configuration for an [`Analyzer`](super::Analyzer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// File extensions (without dot, compared case-insensitively) picked up
    /// when loading directories.
    pub extensions: Vec<SmolStr>,
    /// Block convention for units that do not carry their own.
    pub block_style: BlockStyle,
    pub sanitize: SanitizeOptions,
    /// Run the per-unit produce phase on the rayon pool.
    pub parallel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            extensions: GRAPHQL_EXTENSIONS
                .iter()
                .copied()
                .map(SmolStr::new_static)
                .collect(),
            block_style: BlockStyle::default(),
            sanitize: SanitizeOptions::default(),
            parallel: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| SmolStr::new(ext.as_ref().trim_start_matches('.').to_ascii_lowercase()))
            .collect();
        self
    }

    pub fn with_block_style(mut self, style: BlockStyle) -> Self {
        self.block_style = style;
        self
    }

    pub fn with_sanitize(mut self, options: SanitizeOptions) -> Self {
        self.sanitize = options;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether `path` has one of the configured extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|wanted| *wanted == ext)
            })
    }
}

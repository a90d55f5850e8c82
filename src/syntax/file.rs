//! A unit as handed over by the host.

use std::sync::Arc;

use super::source::{Encoding, decode};
use crate::parser::{BlockStyle, GrammarTable, SanitizeOptions, ScanTree, Scanner};

/// Raw bytes of one unit plus its identity.
///
/// The block style is normally taken from the analyzer configuration; a unit
/// can override it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceUnit {
    path: Arc<str>,
    bytes: Vec<u8>,
    block_style: Option<BlockStyle>,
}

impl SourceUnit {
    pub fn new(path: impl Into<Arc<str>>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            bytes: bytes.into(),
            block_style: None,
        }
    }

    pub fn from_text(path: impl Into<Arc<str>>, text: &str) -> Self {
        Self::new(path, text.as_bytes())
    }

    pub fn with_block_style(mut self, style: BlockStyle) -> Self {
        self.block_style = Some(style);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn block_style(&self) -> Option<&BlockStyle> {
        self.block_style.as_ref()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode and scan the unit, consuming its bytes.
    ///
    /// `default_style` applies unless the unit carries its own style.
    pub fn scan(
        self,
        grammar: &GrammarTable,
        default_style: &BlockStyle,
        sanitize: &SanitizeOptions,
    ) -> (ScanTree, Encoding) {
        let source = decode(&self.bytes);
        drop(self.bytes);
        let style = self.block_style.as_ref().unwrap_or(default_style);
        let tree = Scanner::new(grammar, style)
            .with_sanitize(sanitize.clone())
            .scan(&self.path, &source.text);
        (tree, source.encoding)
    }
}

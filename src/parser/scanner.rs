//! Structural scanner.
//!
//! One forward pass over the sanitized lines of a unit. A depth counter and a
//! stack of open containers track where each line sits; the first grammar rule
//! matching a line produces an entity, which is attached to the nearest open
//! container of its declared parent kind.
//!
//! ```text
//! for each line:
//!   1. measure depth / marker        (per block style)
//!   2. close containers that ended
//!   3. first matching rule wins
//!   4. pick the parent container
//!   5. attach; push if the entity opens a scope
//! at end of unit: close everything still open at the last line
//! ```

use super::block_style::{BlockStyle, KeywordVocabulary};
use super::grammar::GrammarTable;
use super::kinds::{EntityKind, ParentKind};
use super::sanitize::{SanitizeOptions, sanitize_with};
use super::tree::{NodeId, ScanNode, ScanTree};
use crate::base::text::{indentation_width, is_blank};

#[derive(Clone, Copy, Debug)]
struct OpenContainer {
    node: NodeId,
    kind: EntityKind,
    marker: i64,
}

/// What a line contributes before rule matching.
#[derive(Clone, Copy, Debug)]
struct LineFrame {
    marker: i64,
    /// The line opens a scope an entity matched on it can own.
    opens_scope: bool,
    /// The scope opened on this line also closes on it.
    closes_same_line: bool,
}

/// Scans units with one grammar and one block style.
#[derive(Clone, Debug)]
pub struct Scanner<'g> {
    grammar: &'g GrammarTable,
    style: &'g BlockStyle,
    sanitize: SanitizeOptions,
}

impl<'g> Scanner<'g> {
    pub fn new(grammar: &'g GrammarTable, style: &'g BlockStyle) -> Self {
        Self {
            grammar,
            style,
            sanitize: SanitizeOptions::default(),
        }
    }

    pub fn with_sanitize(mut self, options: SanitizeOptions) -> Self {
        self.sanitize = options;
        self
    }

    /// Scan one unit into a fresh tree.
    pub fn scan(&self, path: &str, text: &str) -> ScanTree {
        let sanitized = sanitize_with(text, &self.sanitize);
        let line_count = sanitized.lines().count() as u32;
        let mut run = ScanRun {
            tree: ScanTree::new(path, line_count),
            stack: Vec::new(),
            depth: 0,
        };

        for (idx, line) in sanitized.lines().enumerate() {
            let line_no = idx as u32 + 1;
            let frame = match self.style {
                BlockStyle::Braces => run.brace_frame(line, line_no),
                BlockStyle::Keyword(vocab) => run.keyword_frame(vocab, line, line_no),
                BlockStyle::Indentation => run.indentation_frame(line, line_no),
                BlockStyle::Sequential => Some(LineFrame {
                    marker: 0,
                    opens_scope: true,
                    closes_same_line: false,
                }),
            };
            if let Some(frame) = frame {
                self.match_line(&mut run, line, line_no, frame);
            }
        }

        while let Some(open) = run.stack.pop() {
            run.tree.close(open.node, line_count);
        }

        tracing::debug!(
            "[SCAN] {}: {} entities over {} lines ({})",
            path,
            run.tree.len(),
            line_count,
            self.style.display()
        );
        run.tree
    }

    fn match_line(&self, run: &mut ScanRun, line: &str, line_no: u32, frame: LineFrame) {
        let Some((rule, found)) = self
            .grammar
            .first_match_where(line, |rule| !rule.is_scoped() || run.in_scope_of(rule.kind()))
        else {
            return;
        };
        let kind = rule.kind();
        let sequential = matches!(self.style, BlockStyle::Sequential);
        if sequential {
            run.close_siblings(kind.parent(), line_no.saturating_sub(1));
        }

        let parent = run.parent_for(kind);
        tracing::trace!(
            "[SCAN] {}:{} {} '{}' via {}",
            run.tree.path(),
            line_no,
            kind,
            found.name,
            rule.key()
        );
        let node = run.tree.push(
            parent,
            ScanNode::new(kind, found.name, rule.key(), line_no).with_owner(found.owner),
        );

        let tracked = sequential || (frame.opens_scope && kind.is_container());
        if tracked && !frame.closes_same_line {
            run.stack.push(OpenContainer {
                node,
                kind,
                marker: frame.marker,
            });
        } else {
            run.tree.close(node, line_no);
        }
    }
}

struct ScanRun {
    tree: ScanTree,
    stack: Vec<OpenContainer>,
    depth: i64,
}

impl ScanRun {
    fn close_while(&mut self, end_line: u32, ended: impl Fn(&OpenContainer) -> bool) {
        while let Some(top) = self.stack.last().copied() {
            if !ended(&top) {
                break;
            }
            self.stack.pop();
            self.tree.close(top.node, end_line);
        }
    }

    fn brace_frame(&mut self, line: &str, line_no: u32) -> Option<LineFrame> {
        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;
        let new_depth = self.depth + opens - closes;
        self.close_while(line_no, |open| new_depth <= open.marker);
        self.depth = new_depth;
        Some(LineFrame {
            marker: new_depth - opens,
            opens_scope: opens > 0,
            closes_same_line: opens > 0 && opens == closes,
        })
    }

    /// Every closer pops one container, whichever block it ends.
    fn keyword_frame(&mut self, vocab: &KeywordVocabulary, line: &str, line_no: u32) -> Option<LineFrame> {
        if vocab.closes(line) {
            self.depth = (self.depth - 1).max(0);
            if let Some(open) = self.stack.pop() {
                self.tree.close(open.node, line_no);
            }
        }
        let opens = vocab.opens(line);
        let inline = opens && vocab.closes_inline(line);
        let marker = self.depth;
        if opens && !inline {
            self.depth += 1;
        }
        Some(LineFrame {
            marker,
            opens_scope: opens,
            closes_same_line: inline,
        })
    }

    /// A dedenting line ends its blocks on the line before it, blank lines included.
    fn indentation_frame(&mut self, line: &str, line_no: u32) -> Option<LineFrame> {
        if is_blank(line) {
            return None;
        }
        let indent = indentation_width(line) as i64;
        self.close_while(line_no.saturating_sub(1), |open| indent <= open.marker);
        self.depth = indent;
        Some(LineFrame {
            marker: indent,
            opens_scope: true,
            closes_same_line: false,
        })
    }

    /// Sequential style: a new entity ends every open sibling (same declared
    /// parent) together with everything nested in it.
    fn close_siblings(&mut self, parent: ParentKind, end_line: u32) {
        let from = match parent {
            ParentKind::Unit => Some(0),
            ParentKind::Kind(_) => self
                .stack
                .iter()
                .position(|open| open.kind.parent() == parent),
        };
        if let Some(from) = from {
            for open in self.stack.drain(from..).rev() {
                self.tree.close(open.node, end_line);
            }
        }
    }

    /// Whether a container of `kind`'s declared parent kind is open.
    fn in_scope_of(&self, kind: EntityKind) -> bool {
        match kind.parent() {
            ParentKind::Unit => true,
            ParentKind::Kind(parent_kind) => self.stack.iter().any(|open| open.kind == parent_kind),
        }
    }

    /// Nearest open container of the declared parent kind, else the innermost
    /// open container, else the unit root.
    fn parent_for(&self, kind: EntityKind) -> Option<NodeId> {
        let ParentKind::Kind(parent_kind) = kind.parent() else {
            return None;
        };
        self.stack
            .iter()
            .rev()
            .find(|open| open.kind == parent_kind)
            .or_else(|| self.stack.last())
            .map(|open| open.node)
    }
}

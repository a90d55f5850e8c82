//! Block-delimiter conventions.
//!
//! A unit is scanned under exactly one convention, chosen by configuration:
//!
//! - [`BlockStyle::Braces`] - `{` opens a scope, `}` closes it
//! - [`BlockStyle::Keyword`] - opening keywords and a closing keyword (`end`)
//! - [`BlockStyle::Indentation`] - a scope ends at the first line indented no deeper than its opener
//! - [`BlockStyle::Sequential`] - no delimiter; an entity ends where its next sibling starts

use smol_str::SmolStr;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BlockStyle {
    #[default]
    Braces,
    Keyword(KeywordVocabulary),
    Indentation,
    Sequential,
}

impl BlockStyle {
    pub fn display(&self) -> &'static str {
        match self {
            BlockStyle::Braces => "braces",
            BlockStyle::Keyword(_) => "keyword",
            BlockStyle::Indentation => "indentation",
            BlockStyle::Sequential => "sequential",
        }
    }

    /// Keyword style with the default vocabulary.
    pub fn keyword() -> Self {
        BlockStyle::Keyword(KeywordVocabulary::default())
    }
}

/// Words that open and close blocks under [`BlockStyle::Keyword`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordVocabulary {
    /// Words that open a block when they lead a line.
    pub openers: Vec<SmolStr>,
    /// Word that opens a block when it ends a line (`items.each do |x|`).
    pub continuation: Option<SmolStr>,
    /// Word that closes one block when it leads a line.
    pub closer: SmolStr,
}

impl Default for KeywordVocabulary {
    fn default() -> Self {
        Self {
            openers: [
                "class", "module", "def", "do", "if", "unless", "case", "while", "until", "for",
                "begin", "function",
            ]
            .into_iter()
            .map(SmolStr::new_static)
            .collect(),
            continuation: Some(SmolStr::new_static("do")),
            closer: SmolStr::new_static("end"),
        }
    }
}

impl KeywordVocabulary {
    pub fn new<I, S>(openers: I, continuation: Option<&str>, closer: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            openers: openers.into_iter().map(|w| SmolStr::new(w.as_ref())).collect(),
            continuation: continuation.map(SmolStr::new),
            closer: SmolStr::new(closer),
        }
    }

    /// Whether a sanitized line opens a block.
    pub fn opens(&self, line: &str) -> bool {
        let leading = first_word(line);
        if !leading.is_empty() && self.openers.iter().any(|w| w == leading) {
            return true;
        }
        self.continuation
            .as_deref()
            .is_some_and(|word| last_word(strip_block_params(line)) == word)
    }

    /// Whether a sanitized line closes a block.
    pub fn closes(&self, line: &str) -> bool {
        first_word(line) == self.closer
    }

    /// Whether a line ends with the closer without leading with it
    /// (`def name; end`).
    pub fn closes_inline(&self, line: &str) -> bool {
        !self.closes(line) && last_word(line) == self.closer
    }
}

fn is_word_char(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_continue(c)
}

fn first_word(line: &str) -> &str {
    let trimmed = line.trim_start();
    let end = trimmed
        .find(|c: char| !is_word_char(c))
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}

fn last_word(line: &str) -> &str {
    let trimmed = line.trim_end();
    let start = trimmed
        .rfind(|c: char| !is_word_char(c))
        .map(|idx| idx + trimmed[idx..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    &trimmed[start..]
}

/// Drop a trailing `|params|` list (`do |a, b|`).
fn strip_block_params(line: &str) -> &str {
    let trimmed = line.trim_end();
    trimmed
        .strip_suffix('|')
        .and_then(|before_close| before_close.rfind('|').map(|open| &before_close[..open]))
        .unwrap_or(trimmed)
}

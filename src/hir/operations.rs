//! Client operation summaries.
//!
//! Reads the leading operation of a GraphQL document (named, anonymous, or the
//! implicit `{ field }` query shorthand) and reports its type, name and first
//! root field. [`root_field`] finds the schema field such an operation
//! targets.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use smol_str::SmolStr;

use super::catalog::Corpus;
use super::ids::EntityId;
use super::resolve::{ResolveResult, select_unique};
use crate::parser::{EntityKind, sanitize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "query" => Some(OperationType::Query),
            "mutation" => Some(OperationType::Mutation),
            "subscription" => Some(OperationType::Subscription),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }

    /// Name of the schema type holding this operation's root fields.
    pub fn root_type_name(&self) -> &'static str {
        match self {
            OperationType::Query => "Query",
            OperationType::Mutation => "Mutation",
            OperationType::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationSummary {
    pub operation_type: OperationType,
    /// `None` for anonymous operations.
    pub name: Option<SmolStr>,
    /// First selected root field; aliases are looked through.
    pub root_field: SmolStr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token<'t> {
    Word(&'t str),
    Punct(char),
}

struct Tokens<'t> {
    text: &'t str,
    chars: Peekable<CharIndices<'t>>,
    peeked: Option<Option<Token<'t>>>,
}

impl<'t> Tokens<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
            peeked: None,
        }
    }

    fn peek(&mut self) -> Option<Token<'t>> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lex());
        }
        self.peeked.flatten()
    }

    fn bump(&mut self) -> Option<Token<'t>> {
        match self.peeked.take() {
            Some(token) => token,
            None => self.lex(),
        }
    }

    fn lex(&mut self) -> Option<Token<'t>> {
        // Commas are insignificant in GraphQL.
        while self
            .chars
            .next_if(|&(_, c)| c.is_whitespace() || c == ',')
            .is_some()
        {}
        let (start, first) = self.chars.next()?;
        if !is_name_char(first) {
            return Some(Token::Punct(first));
        }
        let mut end = start + first.len_utf8();
        while let Some((idx, c)) = self.chars.next_if(|&(_, c)| is_name_char(c)) {
            end = idx + c.len_utf8();
        }
        Some(Token::Word(&self.text[start..end]))
    }

    /// Skip a balanced `( ... )` group if one comes next.
    fn skip_parens(&mut self) {
        if self.peek() != Some(Token::Punct('(')) {
            return;
        }
        let mut depth = 0usize;
        while let Some(token) = self.bump() {
            match token {
                Token::Punct('(') => depth += 1,
                Token::Punct(')') => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }
}

fn is_name_char(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_continue(c)
}

/// Summarize the leading operation of `document`.
///
/// Comments and string literals are ignored. Returns `None` when the document
/// does not start with an operation or selects no field.
pub fn summarize_operation(document: &str) -> Option<OperationSummary> {
    let sanitized = sanitize(document);
    let mut tokens = Tokens::new(&sanitized);

    let (operation_type, name) = match tokens.bump()? {
        Token::Punct('{') => (OperationType::Query, None),
        Token::Word(keyword) => {
            let operation_type = OperationType::from_keyword(keyword)?;
            let name = match tokens.peek() {
                Some(Token::Word(name)) => {
                    tokens.bump();
                    Some(SmolStr::new(name))
                }
                _ => None,
            };
            tokens.skip_parens();
            while tokens.peek() == Some(Token::Punct('@')) {
                tokens.bump();
                tokens.bump();
                tokens.skip_parens();
            }
            if tokens.bump() != Some(Token::Punct('{')) {
                return None;
            }
            (operation_type, name)
        }
        Token::Punct(_) => return None,
    };

    let Some(Token::Word(first)) = tokens.bump() else {
        return None;
    };
    let root_field = if tokens.peek() == Some(Token::Punct(':')) {
        tokens.bump();
        match tokens.bump() {
            Some(Token::Word(field)) => field,
            _ => return None,
        }
    } else {
        first
    };

    Some(OperationSummary {
        operation_type,
        name,
        root_field: SmolStr::new(root_field),
    })
}

/// The schema field `field` of the root type for `operation` (`Query.field`,
/// `Mutation.field`, ...), looked up across the whole corpus.
///
/// Found only when exactly one such field exists.
pub fn root_field<'a>(corpus: &'a Corpus, operation: OperationType, field: &str) -> ResolveResult<'a> {
    let candidates: Vec<EntityId> = corpus
        .entities_named(field)
        .iter()
        .copied()
        .filter(|&id| {
            corpus.entity(id).is_some_and(|e| e.kind == EntityKind::Field)
                && corpus.parent(id).is_some_and(|parent| {
                    parent.kind == EntityKind::Type && parent.name == operation.root_type_name()
                })
        })
        .collect();
    select_unique(corpus, &candidates)
}

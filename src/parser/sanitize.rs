//! Comment and string blanking.
//!
//! The structural scanner counts delimiters and matches line patterns. Both go
//! wrong when a brace, keyword or `#` sits inside a string literal or comment,
//! so every unit is sanitized first: the contents of those spans become spaces
//! while the byte length and the line structure of the text stay identical.
//! Offsets and line numbers in the sanitized text are therefore valid for the
//! original text.

use smol_str::SmolStr;

use crate::base::constants::GRAPHQL_LINE_COMMENT;

/// Options for [`sanitize_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Marker starting a comment that runs to the end of the line.
    pub line_comment: Option<SmolStr>,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            line_comment: Some(SmolStr::new_static(GRAPHQL_LINE_COMMENT)),
        }
    }
}

impl SanitizeOptions {
    /// Options with a custom line comment marker (`--`, `//`, ...).
    pub fn with_line_comment(marker: &str) -> Self {
        Self {
            line_comment: Some(SmolStr::new(marker)),
        }
    }

    /// Options without any line comment syntax.
    pub fn without_line_comments() -> Self {
        Self { line_comment: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    BlockString(&'static str),
    Quoted(char),
}

/// Sanitize with the GraphQL defaults (`#` line comments).
pub fn sanitize(text: &str) -> String {
    sanitize_with(text, &SanitizeOptions::default())
}

/// Blank every string literal, block string, block comment and line comment
/// in `text`.
///
/// Block comments and block strings that are never closed blank the rest of
/// the unit. Quoted strings cannot span lines, so an unterminated one ends at
/// the end of its line. Newlines are always preserved and each removed
/// character becomes as many spaces as its UTF-8 width.
pub fn sanitize_with(text: &str, options: &SanitizeOptions) -> String {
    let line_comment = options.line_comment.as_deref().filter(|m| !m.is_empty());
    let mut out = String::with_capacity(text.len());
    let mut state = State::Code;
    let mut i = 0;

    while let Some(ch) = text[i..].chars().next() {
        let rest = &text[i..];
        match state {
            State::Code => {
                if let Some(delim) = ["\"\"\"", "'''"].into_iter().find(|d| rest.starts_with(*d)) {
                    blank_ascii(&mut out, delim.len());
                    i += delim.len();
                    state = State::BlockString(delim);
                } else if rest.starts_with("/*") {
                    blank_ascii(&mut out, 2);
                    i += 2;
                    state = State::BlockComment;
                } else if let Some(marker) = line_comment.filter(|m| rest.starts_with(*m)) {
                    blank_ascii(&mut out, marker.len());
                    i += marker.len();
                    state = State::LineComment;
                } else if ch == '"' || ch == '\'' {
                    out.push(' ');
                    i += 1;
                    state = State::Quoted(ch);
                } else {
                    out.push(ch);
                    i += ch.len_utf8();
                }
            }
            State::LineComment => {
                if ch == '\n' {
                    state = State::Code;
                }
                blank_char(&mut out, ch);
                i += ch.len_utf8();
            }
            State::BlockComment => {
                if rest.starts_with("*/") {
                    blank_ascii(&mut out, 2);
                    i += 2;
                    state = State::Code;
                } else {
                    blank_char(&mut out, ch);
                    i += ch.len_utf8();
                }
            }
            State::BlockString(delim) => {
                if ch == '\\' {
                    i += blank_escape(&mut out, rest);
                } else if rest.starts_with(delim) {
                    blank_ascii(&mut out, delim.len());
                    i += delim.len();
                    state = State::Code;
                } else {
                    blank_char(&mut out, ch);
                    i += ch.len_utf8();
                }
            }
            State::Quoted(quote) => {
                if ch == '\\' {
                    i += blank_escape(&mut out, rest);
                } else {
                    if ch == quote || ch == '\n' {
                        state = State::Code;
                    }
                    blank_char(&mut out, ch);
                    i += ch.len_utf8();
                }
            }
        }
    }

    out
}

/// Push spaces for `ch`, keeping line breaks in place.
fn blank_char(out: &mut String, ch: char) {
    match ch {
        '\n' | '\r' => out.push(ch),
        _ => blank_ascii(out, ch.len_utf8()),
    }
}

fn blank_ascii(out: &mut String, width: usize) {
    out.extend(std::iter::repeat_n(' ', width));
}

/// Blank a backslash and the character it escapes. A line break is never
/// consumed. Returns the number of bytes handled.
fn blank_escape(out: &mut String, rest: &str) -> usize {
    out.push(' ');
    match rest[1..].chars().next() {
        Some(next) if next != '\n' && next != '\r' => {
            blank_ascii(out, next.len_utf8());
            1 + next.len_utf8()
        }
        _ => 1,
    }
}

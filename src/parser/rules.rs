//! The built-in GraphQL rule table.
//!
//! Rules run against sanitized lines, so descriptions, comments and string
//! arguments never reach them. Keys are tried in order and the first matching
//! rule wins: keyword-led constructs come first, then variables, fields,
//! argument-list tails and enum values. Type references and enum values are
//! matched in any case (`id: uuid!`, `asc`).

use super::kinds::EntityKind;

/// Source form of a grammar entry: a key, the kind it produces, and one or
/// more single-line patterns with a `name` (and optional `owner`) group.
#[derive(Clone, Copy, Debug)]
pub struct RuleSpec<'a> {
    pub key: &'a str,
    pub kind: EntityKind,
    pub patterns: &'a [&'a str],
    /// Only applies while a container of the kind's declared parent is open.
    pub scoped: bool,
}

impl<'a> RuleSpec<'a> {
    pub const fn new(key: &'a str, kind: EntityKind, patterns: &'a [&'a str]) -> Self {
        Self {
            key,
            kind,
            patterns,
            scoped: false,
        }
    }

    /// Restrict the rule to lines inside a container of its parent kind.
    pub const fn scoped(mut self) -> Self {
        self.scoped = true;
        self
    }
}

pub const GRAPHQL_RULES: &[RuleSpec<'static>] = &[
    RuleSpec::new(
        "schema_def",
        EntityKind::Schema,
        &[
            r"^\s*(?P<name>schema)\s*(?:[@{].*)?$",
            r"^\s*extend\s+(?P<name>schema)\b",
        ],
    ),
    RuleSpec::new(
        "type_def",
        EntityKind::Type,
        &[
            r"^\s*type\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
            r"^\s*extend\s+type\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
        ],
    ),
    RuleSpec::new(
        "interface_def",
        EntityKind::Interface,
        &[
            r"^\s*interface\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
            r"^\s*extend\s+interface\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
        ],
    ),
    RuleSpec::new(
        "enum_def",
        EntityKind::Enum,
        &[
            r"^\s*enum\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
            r"^\s*extend\s+enum\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
        ],
    ),
    RuleSpec::new(
        "input_def",
        EntityKind::Input,
        &[
            r"^\s*input\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
            r"^\s*extend\s+input\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
        ],
    ),
    RuleSpec::new(
        "union_def",
        EntityKind::Union,
        &[
            r"^\s*union\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
            r"^\s*extend\s+union\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
        ],
    ),
    RuleSpec::new(
        "scalar_def",
        EntityKind::Scalar,
        &[
            r"^\s*scalar\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
            r"^\s*extend\s+scalar\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
        ],
    ),
    RuleSpec::new(
        "directive_def",
        EntityKind::Directive,
        &[r"^\s*directive\s+@(?P<name>[_A-Za-z][_0-9A-Za-z]*)"],
    ),
    RuleSpec::new(
        "query_operation",
        EntityKind::Query,
        &[
            r"^\s*query\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
            r"^\s*(?P<name>query)\s*(?:\(.*\))?\s*(?:@[^:]*)?\{\s*$",
            r"^\s*(?P<name>query)\s*$",
        ],
    ),
    RuleSpec::new(
        "mutation_operation",
        EntityKind::Mutation,
        &[
            r"^\s*mutation\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
            r"^\s*(?P<name>mutation)\s*(?:\(.*\))?\s*(?:@[^:]*)?\{\s*$",
            r"^\s*(?P<name>mutation)\s*$",
        ],
    ),
    RuleSpec::new(
        "subscription_operation",
        EntityKind::Subscription,
        &[
            r"^\s*subscription\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
            r"^\s*(?P<name>subscription)\s*(?:\(.*\))?\s*(?:@[^:]*)?\{\s*$",
            r"^\s*(?P<name>subscription)\s*$",
        ],
    ),
    RuleSpec::new(
        "fragment_def",
        EntityKind::Fragment,
        &[r"^\s*fragment\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)\s+on\s+[_A-Za-z]"],
    ),
    RuleSpec::new(
        "inline_fragment",
        EntityKind::Fragment,
        &[r"^\s*\.\.\.\s*on\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)"],
    ),
    RuleSpec::new(
        "variable_def",
        EntityKind::Variable,
        &[r"^\s*\$(?P<name>[_A-Za-z][_0-9A-Za-z]*)\s*:"],
    ),
    RuleSpec::new(
        "field_def",
        EntityKind::Field,
        &[
            r"^\s*(?P<name>[_A-Za-z][_0-9A-Za-z]*)\s*:\s*[\[_A-Za-z][_0-9A-Za-z!\[\]\s]*(?:=[^)]*|@.*)?,?\s*$",
            r"^\s*(?P<name>[_A-Za-z][_0-9A-Za-z]*)\s*\(.*\)\s*:\s*[\[_A-Za-z]",
            r"^\s*(?P<name>[_A-Za-z][_0-9A-Za-z]*)\s*\(\s*$",
        ],
    ),
    RuleSpec::new(
        "argument_default",
        EntityKind::Argument,
        &[r"^\s*(?P<name>[_A-Za-z][_0-9A-Za-z]*)\s*:\s*[\[_A-Za-z][_0-9A-Za-z!\[\]\s]*=\s*[^=]"],
    ),
    RuleSpec::new(
        "enum_value",
        EntityKind::EnumValue,
        &[r"^\s*(?P<name>[_A-Za-z][_0-9A-Za-z]*)\s*(?:@.*)?,?\s*$"],
    )
    .scoped(),
];

//! Entity kinds and their declared parent hierarchy.
//!
//! The set of kinds is closed. Every kind declares exactly one parent kind
//! (or the unit root) and whether it owns a scope that other entities can be
//! attached to. [`KIND_HIERARCHY`] is the single source of that data and is
//! validated whenever a grammar table is built.

use std::fmt;

use super::error::GrammarError;

/// Kind of a structural entity found in a GraphQL document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Schema,
    Type,
    Interface,
    Enum,
    EnumValue,
    Input,
    Union,
    Scalar,
    Directive,
    Field,
    Argument,
    Query,
    Mutation,
    Subscription,
    Fragment,
    Variable,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [EntityKind; 16] = [
        EntityKind::Schema,
        EntityKind::Type,
        EntityKind::Interface,
        EntityKind::Enum,
        EntityKind::EnumValue,
        EntityKind::Input,
        EntityKind::Union,
        EntityKind::Scalar,
        EntityKind::Directive,
        EntityKind::Field,
        EntityKind::Argument,
        EntityKind::Query,
        EntityKind::Mutation,
        EntityKind::Subscription,
        EntityKind::Fragment,
        EntityKind::Variable,
    ];

    pub fn display(&self) -> &'static str {
        match self {
            EntityKind::Schema => "Schema",
            EntityKind::Type => "Type",
            EntityKind::Interface => "Interface",
            EntityKind::Enum => "Enum",
            EntityKind::EnumValue => "EnumValue",
            EntityKind::Input => "Input",
            EntityKind::Union => "Union",
            EntityKind::Scalar => "Scalar",
            EntityKind::Directive => "Directive",
            EntityKind::Field => "Field",
            EntityKind::Argument => "Argument",
            EntityKind::Query => "Query",
            EntityKind::Mutation => "Mutation",
            EntityKind::Subscription => "Subscription",
            EntityKind::Fragment => "Fragment",
            EntityKind::Variable => "Variable",
        }
    }

    /// Type tag reported to the host (`GraphQLType`, `GraphQLEnumValue`, ...).
    pub fn type_tag(&self) -> &'static str {
        match self {
            EntityKind::Schema => "GraphQLSchema",
            EntityKind::Type => "GraphQLType",
            EntityKind::Interface => "GraphQLInterface",
            EntityKind::Enum => "GraphQLEnum",
            EntityKind::EnumValue => "GraphQLEnumValue",
            EntityKind::Input => "GraphQLInput",
            EntityKind::Union => "GraphQLUnion",
            EntityKind::Scalar => "GraphQLScalar",
            EntityKind::Directive => "GraphQLDirective",
            EntityKind::Field => "GraphQLField",
            EntityKind::Argument => "GraphQLArgument",
            EntityKind::Query => "GraphQLQuery",
            EntityKind::Mutation => "GraphQLMutation",
            EntityKind::Subscription => "GraphQLSubscription",
            EntityKind::Fragment => "GraphQLFragment",
            EntityKind::Variable => "GraphQLVariable",
        }
    }

    fn spec(&self) -> &'static KindSpec {
        &KIND_HIERARCHY[*self as usize]
    }

    /// The kind this kind attaches under.
    pub fn parent(&self) -> ParentKind {
        self.spec().parent
    }

    /// Whether entities of this kind own a scope.
    pub fn is_container(&self) -> bool {
        self.spec().container
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Declared parent of a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParentKind {
    /// The sentinel root of every unit.
    Unit,
    Kind(EntityKind),
}

impl ParentKind {
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            ParentKind::Unit => None,
            ParentKind::Kind(kind) => Some(*kind),
        }
    }
}

impl fmt::Display for ParentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentKind::Unit => f.write_str("unit"),
            ParentKind::Kind(kind) => f.write_str(kind.display()),
        }
    }
}

/// One row of the kind hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindSpec {
    pub kind: EntityKind,
    pub parent: ParentKind,
    pub container: bool,
}

impl KindSpec {
    const fn new(kind: EntityKind, parent: ParentKind, container: bool) -> Self {
        Self {
            kind,
            parent,
            container,
        }
    }
}

use EntityKind as K;
use ParentKind::{Kind as Under, Unit};

/// The kind hierarchy, one row per kind in declaration order.
pub const KIND_HIERARCHY: &[KindSpec] = &[
    KindSpec::new(K::Schema, Unit, true),
    KindSpec::new(K::Type, Under(K::Schema), true),
    KindSpec::new(K::Interface, Under(K::Schema), true),
    KindSpec::new(K::Enum, Under(K::Schema), true),
    KindSpec::new(K::EnumValue, Under(K::Enum), false),
    KindSpec::new(K::Input, Under(K::Schema), true),
    KindSpec::new(K::Union, Under(K::Schema), false),
    KindSpec::new(K::Scalar, Under(K::Schema), false),
    KindSpec::new(K::Directive, Under(K::Schema), false),
    KindSpec::new(K::Field, Under(K::Type), true),
    KindSpec::new(K::Argument, Under(K::Field), false),
    KindSpec::new(K::Query, Under(K::Schema), true),
    KindSpec::new(K::Mutation, Under(K::Schema), true),
    KindSpec::new(K::Subscription, Under(K::Schema), true),
    KindSpec::new(K::Fragment, Under(K::Schema), true),
    KindSpec::new(K::Variable, Under(K::Query), false),
];

/// Check that `specs` describes a tree rooted at the unit.
///
/// Rows must list every kind exactly once in declaration order, each parent
/// chain must reach the unit root, and every declared parent must be a
/// container kind.
pub fn validate_hierarchy(specs: &[KindSpec]) -> Result<(), GrammarError> {
    for (index, kind) in EntityKind::ALL.iter().enumerate() {
        match specs.get(index) {
            Some(spec) if spec.kind == *kind => {}
            _ => return Err(GrammarError::MissingKind(*kind)),
        }
    }
    if specs.len() != EntityKind::ALL.len() {
        return Err(GrammarError::ExtraRows(specs.len() - EntityKind::ALL.len()));
    }

    for spec in specs {
        let mut current = spec.parent;
        let mut steps = 0;
        while let ParentKind::Kind(parent) = current {
            let parent_spec = &specs[parent as usize];
            if !parent_spec.container {
                return Err(GrammarError::ParentNotContainer {
                    kind: spec.kind,
                    parent,
                });
            }
            steps += 1;
            if steps > specs.len() {
                return Err(GrammarError::ParentCycle(spec.kind));
            }
            current = parent_spec.parent;
        }
    }
    Ok(())
}

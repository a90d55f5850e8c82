//! Domain constants shared across the crate.

/// File extensions (without the dot) analyzed by default.
pub const GRAPHQL_EXTENSIONS: &[&str] = &["graphql", "gql", "graphqls"];

/// Separator between the segments of a qualified name.
pub const QUALIFIER_SEPARATOR: char = '.';

/// Prefix of every host type tag (`GraphQLType`, `GraphQLField`, ...).
pub const TYPE_TAG_PREFIX: &str = "GraphQL";

/// Type tag of the program-level record every unit carries.
pub const UNIT_TYPE_TAG: &str = "GraphQLProgram";

/// Line comment marker of GraphQL documents.
pub const GRAPHQL_LINE_COMMENT: &str = "#";

//! End-to-end scanner scenarios over the built-in GraphQL grammar.

use gqlscan::parser::{BlockStyle, EntityKind, sanitize};
use rstest::rstest;

use crate::helpers::corpus_helpers::scan_with;
use crate::helpers::source_fixtures::{
    EMPTY_TYPE, OPERATIONS, SCHEMA, UNTERMINATED_COMMENT, USER_TYPE, deep_anonymous_nesting,
};
use crate::helpers::tree_assertions::{assert_node_parent, assert_node_range};

#[test]
fn test_type_owns_its_field() {
    let tree = scan_with(&BlockStyle::Braces, USER_TYPE);
    assert_eq!(tree.len(), 2);
    assert_node_range(&tree, "User", 1, 3);
    assert_node_range(&tree, "id", 2, 2);
    assert_node_parent(&tree, "id", Some("User"));
    assert_eq!(tree.find("User").map(|n| n.kind), Some(EntityKind::Type));
    assert_eq!(tree.find("id").map(|n| n.kind), Some(EntityKind::Field));
}

#[test]
fn test_single_line_block() {
    let tree = scan_with(&BlockStyle::Braces, EMPTY_TYPE);
    assert_eq!(tree.len(), 1);
    assert_node_range(&tree, "Empty", 1, 1);
}

#[test]
fn test_unterminated_block_comment_closes_everything_at_last_line() {
    let tree = scan_with(&BlockStyle::Braces, UNTERMINATED_COMMENT);
    assert_eq!(tree.line_count(), 5);
    assert_node_range(&tree, "A", 1, 5);
    assert_node_range(&tree, "x", 2, 2);
    assert!(tree.find("B").is_none());
    assert!(tree.find("y").is_none());
}

#[test]
fn test_anonymous_nesting_does_not_leak_scopes() {
    let text = deep_anonymous_nesting();
    let tree = scan_with(&BlockStyle::Braces, &text);
    assert_eq!(tree.len(), 2);
    assert_node_range(&tree, "Deep", 1, 23);
    assert_node_range(&tree, "leaf", 22, 22);
    assert_node_parent(&tree, "leaf", Some("Deep"));
}

#[rstest]
#[case("User", EntityKind::Type, 10, 14)]
#[case("Node", EntityKind::Interface, 16, 18)]
#[case("Role", EntityKind::Enum, 20, 24)]
#[case("EDITOR", EntityKind::EnumValue, 22, 22)]
#[case("NewPost", EntityKind::Input, 26, 29)]
#[case("SearchResult", EntityKind::Union, 31, 31)]
#[case("DateTime", EntityKind::Scalar, 33, 33)]
#[case("key", EntityKind::Directive, 35, 35)]
#[case("posts", EntityKind::Field, 13, 13)]
#[case("Mutation", EntityKind::Type, 47, 49)]
fn test_schema_definitions(
    #[case] name: &str,
    #[case] kind: EntityKind,
    #[case] start: u32,
    #[case] end: u32,
) {
    let tree = scan_with(&BlockStyle::Braces, SCHEMA);
    let node = tree.find(name).unwrap_or_else(|| panic!("missing {name}"));
    assert_eq!(node.kind, kind);
    assert_node_range(&tree, name, start, end);
}

#[test]
fn test_descriptions_and_string_arguments_hide_braces() {
    let tree = scan_with(&BlockStyle::Braces, SCHEMA);
    assert_node_range(&tree, "schema", 4, 7);
    assert!(tree.find("The").is_none());
    // `"id}"` inside the directive argument must not close User early.
    assert_node_parent(&tree, "name", Some("User"));
    assert_node_parent(&tree, "VIEWER", Some("Role"));
}

#[test]
fn test_operations_and_fragments() {
    let tree = scan_with(&BlockStyle::Braces, OPERATIONS);
    assert_node_range(&tree, "GetUser", 1, 5);
    assert_eq!(tree.find("GetUser").map(|n| n.kind), Some(EntityKind::Query));
    assert_node_range(&tree, "UserParts", 7, 12);
    let inline = tree
        .iter()
        .find(|(_, node)| node.rule == "inline_fragment")
        .map(|(id, _)| id)
        .expect("inline fragment");
    assert_eq!(tree.path_of(inline), "UserParts.User");
    assert_eq!(tree.node(inline).range.end, 11);
}

#[test]
fn test_sanitizer_keeps_length_and_lines() {
    for text in [SCHEMA, OPERATIONS, UNTERMINATED_COMMENT, "\"é\" # ünïcödé\r\n"] {
        let clean = sanitize(text);
        assert_eq!(clean.len(), text.len());
        assert_eq!(clean.lines().count(), text.lines().count());
    }
}

#[test]
fn test_every_range_nests_inside_its_parent() {
    let tree = scan_with(&BlockStyle::Braces, SCHEMA);
    for (_, node) in tree.iter() {
        assert!(node.range.start <= node.range.end, "{} is not closed", node.name);
        if let Some(parent) = node.parent {
            let parent = &tree.node(parent).range;
            assert!(parent.start <= node.range.start && node.range.end <= parent.end);
        }
    }
}

fn kinds_and_paths(text: &str) -> Vec<String> {
    let tree = scan_with(&BlockStyle::Braces, text);
    tree.iter()
        .map(|(id, node)| format!("{}:{}", node.kind, tree.path_of(id)))
        .collect()
}

#[test]
fn test_input_field_with_default_stays_a_field() {
    let found = kinds_and_paths("input Page {\n  limit: Int = 10\n  offset: Int\n}\n");
    assert_eq!(found, ["Input:Page", "Field:Page.limit", "Field:Page.offset"]);
}

#[test]
fn test_lowercase_types_and_enum_values() {
    let text = "\
type users {
  id: uuid!
  created_at: timestamptz
}

enum order_by {
  asc
  desc_nulls_last
}
";
    let found = kinds_and_paths(text);
    assert_eq!(
        found,
        [
            "Type:users",
            "Field:users.id",
            "Field:users.created_at",
            "Enum:order_by",
            "EnumValue:order_by.asc",
            "EnumValue:order_by.desc_nulls_last",
        ]
    );
}

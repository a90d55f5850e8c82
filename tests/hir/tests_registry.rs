//! Registry properties over realistic units.

use gqlscan::hir::{Entity, UnitIndex};
use gqlscan::parser::EntityKind;
use rstest::rstest;

use crate::helpers::corpus_helpers::unit_from;
use crate::helpers::source_fixtures::{OPERATIONS, SCHEMA, USER_TYPE, deep_anonymous_nesting};
use crate::helpers::tree_assertions::assert_entity_kind;

fn is_same_or_descendant(unit: &UnitIndex, candidate: &Entity, ancestor: &Entity) -> bool {
    let mut current = unit.lookup_id(&candidate.qualified_name);
    while let Some(id) = current {
        let Some(entity) = unit.get(id) else {
            return false;
        };
        if entity.qualified_name == ancestor.qualified_name {
            return true;
        }
        current = entity.parent;
    }
    false
}

#[rstest]
#[case(SCHEMA.to_string())]
#[case(OPERATIONS.to_string())]
#[case(deep_anonymous_nesting())]
fn test_find_container_stays_inside_each_range(#[case] text: String) {
    let unit = unit_from("unit.graphql", &text);
    for entity in unit.entities() {
        for line in entity.start_line()..=entity.end_line() {
            let container = unit
                .entity_at_line(line)
                .unwrap_or_else(|| panic!("line {line} of {} has no container", entity.name));
            assert!(
                is_same_or_descendant(&unit, container, entity),
                "line {} resolved to {} outside {}",
                line,
                container.qualified_name,
                entity.qualified_name
            );
            if container.qualified_name != entity.qualified_name {
                assert!(container.range.width() < entity.range.width());
            }
        }
    }
}

#[test]
fn test_lines_outside_entities_map_to_the_unit() {
    let unit = unit_from("schema.graphql", SCHEMA);
    assert_eq!(unit.find_container(8), "schema.graphql");
    assert_eq!(unit.find_container(12), "schema.graphql.User.name");
    assert_eq!(unit.find_container(14), "schema.graphql.User");
}

#[test]
fn test_schema_kinds_and_qualified_names() {
    let unit = unit_from("schema.graphql", SCHEMA);
    assert_entity_kind(&unit, "schema.graphql.schema", EntityKind::Schema);
    assert_entity_kind(&unit, "schema.graphql.schema.query", EntityKind::Field);
    assert_entity_kind(&unit, "schema.graphql.Role.EDITOR", EntityKind::EnumValue);
    assert_entity_kind(&unit, "schema.graphql.NewPost.title", EntityKind::Field);
    assert_entity_kind(&unit, "schema.graphql.key", EntityKind::Directive);
    assert_eq!(unit.entities_named("id").len(), 3);
}

#[test]
fn test_registering_a_unit_twice_changes_nothing() {
    let mut unit = unit_from("a.graphql", USER_TYPE);
    let before: Vec<String> = unit.entities().iter().map(|e| e.identity.to_string()).collect();
    let replay: Vec<_> = unit
        .entities()
        .iter()
        .map(|e| (e.parent, e.kind, e.name.clone(), e.range))
        .collect();
    for (parent, kind, name, range) in replay {
        unit.register(parent, gqlscan::hir::EntityDraft::new(kind, name, range));
    }
    let after: Vec<String> = unit.entities().iter().map(|e| e.identity.to_string()).collect();
    assert_eq!(before, after);
    assert_eq!(unit.duplicates(), 2);
}

#[test]
fn test_repeated_definition_coalesces_and_keeps_new_children() {
    let unit = unit_from(
        "a.graphql",
        "type User {\n  id: ID\n}\ntype User {\n  email: String\n}\n",
    );
    assert_eq!(unit.entities_named("User").len(), 1);
    let user = unit.lookup("a.graphql.User").expect("User");
    assert_eq!((user.start_line(), user.end_line()), (1, 3));
    let children: Vec<&str> = unit
        .children(unit.lookup_id("a.graphql.User").expect("id"))
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(children, ["id", "email"]);
}

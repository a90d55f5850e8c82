//! Kind-specific handlers run during registration.

use gqlscan::hir::{DerivedEntity, Entity, EntityHandler, HandlerError, HandlerRegistry, UnitIndex};
use gqlscan::parser::{BlockStyle, EntityKind, GrammarTable, Scanner};

/// Adds the implicit `__typename` field to every object type.
struct TypenameHandler;

impl EntityHandler for TypenameHandler {
    fn name(&self) -> &str {
        "typename"
    }

    fn handle(
        &self,
        _kind: EntityKind,
        entity: &Entity,
        _unit: &UnitIndex,
    ) -> Result<Vec<DerivedEntity>, HandlerError> {
        Ok(vec![DerivedEntity::new(
            EntityKind::Field,
            "__typename",
            entity.range,
        )])
    }
}

/// Rejects enums without values and derives names that are not identifiers.
struct StrictEnumHandler;

impl EntityHandler for StrictEnumHandler {
    fn name(&self) -> &str {
        "strict-enum"
    }

    fn handle(
        &self,
        _kind: EntityKind,
        entity: &Entity,
        _unit: &UnitIndex,
    ) -> Result<Vec<DerivedEntity>, HandlerError> {
        if entity.children().is_empty() {
            return Err(HandlerError::failed(self.name(), entity, "enum has no values"));
        }
        Ok(vec![DerivedEntity::new(
            EntityKind::EnumValue,
            "not an identifier",
            entity.range,
        )])
    }
}

fn build(text: &str, handlers: &HandlerRegistry) -> UnitIndex {
    let tree = Scanner::new(GrammarTable::graphql(), &BlockStyle::Braces).scan("h.graphql", text);
    UnitIndex::build(tree, handlers)
}

#[test]
fn test_derived_entities_attach_to_the_handled_entity() {
    let handlers = HandlerRegistry::new().with(EntityKind::Type, TypenameHandler);
    let unit = build("type User {\n  id: ID\n}\ntype Post {\n}\n", &handlers);

    let typename = unit.lookup("h.graphql.User.__typename").expect("derived");
    assert_eq!(typename.kind, EntityKind::Field);
    assert_eq!(typename.rule, "handler");
    assert!(unit.lookup("h.graphql.Post.__typename").is_some());
    assert!(unit.handler_errors().is_empty());
}

#[test]
fn test_derived_entities_are_not_dispatched_again() {
    let handlers = HandlerRegistry::new().with(EntityKind::Field, TypenameHandler);
    let unit = build("type User {\n  id: ID\n}\n", &handlers);
    assert!(unit.lookup("h.graphql.User.id.__typename").is_some());
    assert!(unit.lookup("h.graphql.User.id.__typename.__typename").is_none());
    assert_eq!(unit.len(), 3);
}

#[test]
fn test_handler_errors_are_collected_per_unit() {
    let handlers = HandlerRegistry::new().with(EntityKind::Enum, StrictEnumHandler);
    let unit = build("enum Empty {\n}\nenum Role {\n  ADMIN\n}\n", &handlers);

    let errors = unit.handler_errors();
    assert_eq!(errors.len(), 2);
    assert!(matches!(&errors[0], HandlerError::Failed { entity, .. } if entity == "h.graphql.Empty"));
    assert!(matches!(&errors[1], HandlerError::InvalidName { name, .. } if name == "not an identifier"));
    assert_eq!(unit.lookup("h.graphql.Role").map(|r| r.children().len()), Some(1));
}

#[test]
fn test_handlers_only_see_their_kind() {
    let handlers = HandlerRegistry::new().with(EntityKind::Interface, TypenameHandler);
    assert!(handlers.handles(EntityKind::Interface));
    assert!(!handlers.handles(EntityKind::Type));
    let unit = build("type User {\n}\ninterface Node {\n}\n", &handlers);
    assert!(unit.lookup("h.graphql.User.__typename").is_none());
    assert!(unit.lookup("h.graphql.Node.__typename").is_some());
}

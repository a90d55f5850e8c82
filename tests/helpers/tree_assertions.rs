//! Assertions over scan trees and unit registries.

use gqlscan::hir::UnitIndex;
use gqlscan::parser::{EntityKind, ScanTree};

/// Assert the node named `name` spans `start..=end`.
pub fn assert_node_range(tree: &ScanTree, name: &str, start: u32, end: u32) {
    let node = tree
        .find(name)
        .unwrap_or_else(|| panic!("no node named '{}' in {}", name, tree.path()));
    assert_eq!(
        (node.range.start, node.range.end),
        (start, end),
        "range of '{}'",
        name
    );
}

/// Assert the parent of the node named `name` (`None` for the unit root).
pub fn assert_node_parent(tree: &ScanTree, name: &str, parent: Option<&str>) {
    let node = tree
        .find(name)
        .unwrap_or_else(|| panic!("no node named '{}' in {}", name, tree.path()));
    let actual = node.parent.map(|id| tree.node(id).name.as_str());
    assert_eq!(actual, parent, "parent of '{}'", name);
}

/// Assert the entity registered as `qualified_name` has `kind`.
pub fn assert_entity_kind(unit: &UnitIndex, qualified_name: &str, kind: EntityKind) {
    let entity = unit
        .lookup(qualified_name)
        .unwrap_or_else(|| panic!("'{}' not registered in {}", qualified_name, unit.path()));
    assert_eq!(entity.kind, kind, "kind of '{}'", qualified_name);
}

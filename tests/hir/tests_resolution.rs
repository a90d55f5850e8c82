//! Cross-unit resolution over analyzed corpora.

use gqlscan::hir::{OperationType, ResolveResult, Resolver, Unresolved, root_field, summarize_operation};
use rstest::rstest;

use crate::helpers::corpus_helpers::analysis_from_sources;
use crate::helpers::source_fixtures::{OPERATIONS, SCHEMA};

#[test]
fn test_ambiguous_short_name_is_not_found() {
    let analysis = analysis_from_sources(&[
        ("fileA", "type Foo {\n  bar: Int\n}"),
        ("fileB", "type Baz {\n  bar: Int\n}"),
        ("fileC", "type Other {\n}"),
    ]);
    let corpus = analysis.corpus();
    let file_c = corpus.unit_id("fileC").expect("fileC");
    let result = Resolver::new(corpus).from_unit(file_c).resolve("bar");
    assert_eq!(result, ResolveResult::NotFound(Unresolved::Ambiguous { candidates: 2 }));
}

#[test]
fn test_unique_short_name_resolves_from_any_unit() {
    let analysis = analysis_from_sources(&[
        ("fileA", "type Foo {\n  bar: Int\n}"),
        ("fileB", "type Baz {\n}"),
    ]);
    let corpus = analysis.corpus();
    for unit in corpus.units() {
        let result = Resolver::new(corpus).from_unit(unit.id()).resolve("bar");
        assert_eq!(result.qualified_name(), Some("fileA.Foo.bar"), "from {}", unit.path());
    }
    assert_eq!(analysis.resolver().resolve("bar").qualified_name(), Some("fileA.Foo.bar"));
}

#[rstest]
#[case("id")]
#[case("name")]
fn test_names_bound_in_several_units_never_guess(#[case] name: &str) {
    let analysis = analysis_from_sources(&[
        ("a.graphql", "type A {\n  id: ID\n  name: String\n}"),
        ("b.graphql", "type B {\n  id: ID\n  name: String\n}"),
    ]);
    let result = analysis.resolver().resolve(name);
    assert!(result.is_ambiguous());
    assert!(result.entity().is_none());
}

#[test]
fn test_same_unit_candidate_wins() {
    let analysis = analysis_from_sources(&[
        ("a.graphql", "type A {\n  id: ID\n}"),
        ("b.graphql", "type B {\n  id: ID\n}"),
    ]);
    let corpus = analysis.corpus();
    let b = corpus.unit_id("b.graphql").expect("b");
    let result = Resolver::new(corpus).from_unit(b).resolve("id");
    assert_eq!(result.qualified_name(), Some("b.graphql.B.id"));
}

#[test]
fn test_owner_restriction_across_units() {
    let analysis = analysis_from_sources(&[("schema.graphql", SCHEMA)]);
    let resolver = analysis.resolver();
    assert!(resolver.resolve("id").is_ambiguous());
    let result = analysis
        .resolver()
        .restrict_to_owner("schema.graphql.Post")
        .resolve("id");
    assert_eq!(result.qualified_name(), Some("schema.graphql.Post.id"));
}

#[test]
fn test_operation_root_field_links_to_schema() {
    let analysis = analysis_from_sources(&[("schema.graphql", SCHEMA), ("ops.graphql", OPERATIONS)]);
    let summary = summarize_operation(OPERATIONS).expect("operation");
    assert_eq!(summary.operation_type, OperationType::Query);
    assert_eq!(summary.name.as_deref(), Some("GetUser"));

    let field = root_field(analysis.corpus(), summary.operation_type, &summary.root_field);
    assert_eq!(field.qualified_name(), Some("schema.graphql.Query.user"));

    let wrong_root = root_field(analysis.corpus(), OperationType::Mutation, "user");
    assert_eq!(wrong_root, ResolveResult::NotFound(Unresolved::Unknown));
    let mutation = root_field(analysis.corpus(), OperationType::Mutation, "createPost");
    assert!(mutation.is_found());
}

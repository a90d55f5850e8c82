//! Whole-corpus analysis: loading, isolation and summaries.

use std::fs;
use std::path::Path;

use gqlscan::hir::{DerivedEntity, Entity, EntityHandler, HandlerError, HandlerRegistry, UnitIndex};
use gqlscan::parser::{BlockStyle, EntityKind};
use gqlscan::project::{LoadError, UnitError};
use gqlscan::syntax::Encoding;
use gqlscan::{Analyzer, AnalyzerConfig, SourceUnit};
use rstest::rstest;
use tempfile::TempDir;

use crate::helpers::source_fixtures::{OPERATIONS, SCHEMA};

struct ExplodingHandler;

impl EntityHandler for ExplodingHandler {
    fn name(&self) -> &str {
        "exploding"
    }

    fn handle(
        &self,
        _kind: EntityKind,
        entity: &Entity,
        _unit: &UnitIndex,
    ) -> Result<Vec<DerivedEntity>, HandlerError> {
        if entity.name == "Boom" {
            panic!("cannot handle {}", entity.qualified_name);
        }
        Ok(Vec::new())
    }
}

fn write_tree(files: &[(&str, &[u8])]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for (relative, bytes) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(path, bytes).expect("write");
    }
    dir
}

#[rstest]
#[case(true)]
#[case(false)]
fn test_panicking_unit_is_isolated(#[case] parallel: bool) {
    let analyzer = Analyzer::new(AnalyzerConfig::default().with_parallel(parallel))
        .with_handlers(HandlerRegistry::new().with(EntityKind::Type, ExplodingHandler));
    let analysis = analyzer.analyze(vec![
        SourceUnit::from_text("ok.graphql", "type Fine {\n  id: ID\n}\n"),
        SourceUnit::from_text("bad.graphql", "type Boom {\n}\n"),
        SourceUnit::from_text("also-ok.graphql", "type Other {\n}\n"),
    ]);

    let summary = analysis.summary();
    assert_eq!(summary.analyzed_units(), 2);
    assert_eq!(summary.failed_units(), 1);
    let failure = summary.failure("bad.graphql").expect("failure");
    assert!(
        matches!(&failure.error, UnitError::Panicked(message) if message.contains("bad.graphql.Boom"))
    );
    assert!(analysis.corpus().lookup("ok.graphql.Fine.id").is_some());
    assert!(analysis.corpus().lookup("also-ok.graphql.Other").is_some());
    assert!(analysis.corpus().unit_by_path("bad.graphql").is_none());
}

#[test]
fn test_latin1_unit_is_decoded_not_dropped() {
    let analysis = Analyzer::default().analyze(vec![SourceUnit::new(
        "legacy.graphql",
        b"# r\xe9sum\xe9 {\ntype Resume {\n  id: ID\n}\n".to_vec(),
    )]);
    let summary = analysis.summary();
    assert_eq!(summary.latin1_units(), 1);
    assert_eq!(summary.units[0].encoding, Encoding::Latin1);
    let resume = analysis.corpus().lookup("legacy.graphql.Resume").expect("Resume");
    assert_eq!((resume.start_line(), resume.end_line()), (2, 4));
}

#[test]
fn test_analyze_directory() {
    let dir = write_tree(&[
        ("schema/schema.graphql", SCHEMA.as_bytes()),
        ("ops/get_user.gql", OPERATIONS.as_bytes()),
        ("notes.md", b"type NotGraphql {}"),
    ]);
    let analysis = Analyzer::default()
        .analyze_directory(dir.path())
        .expect("analysis");

    let corpus = analysis.corpus();
    assert_eq!(corpus.unit_count(), 2);
    // Units merge in sorted path order.
    assert!(corpus.units()[0].path().ends_with("get_user.gql"));
    assert!(corpus.units()[1].path().ends_with("schema.graphql"));
    assert!(analysis.resolver().resolve("NotGraphql").entity().is_none());
    let post = analysis.resolver().resolve("NewPost");
    assert!(post.qualified_name().is_some_and(|q| q.ends_with("schema.graphql.NewPost")));
    assert_eq!(analysis.summary().total_entities(), corpus.len());
}

#[test]
fn test_missing_directory_is_an_error() {
    let err = Analyzer::default()
        .analyze_directory(Path::new("/no/such/dir"))
        .unwrap_err();
    assert!(matches!(err, LoadError::NotADirectory(_)));
}

#[test]
fn test_unit_block_style_overrides_config() {
    let analyzer = Analyzer::new(AnalyzerConfig::default().with_block_style(BlockStyle::Sequential));
    let analysis = analyzer.analyze(vec![
        SourceUnit::from_text("seq.graphql", "type A\n  x: Int\ntype B\n"),
        SourceUnit::from_text("indent.graphql", "type C\n  y: Int\n\ntype D\n")
            .with_block_style(BlockStyle::Indentation),
    ]);
    let corpus = analysis.corpus();
    let a = corpus.lookup("seq.graphql.A").expect("A");
    assert_eq!((a.start_line(), a.end_line()), (1, 2));
    let c = corpus.lookup("indent.graphql.C").expect("C");
    assert_eq!((c.start_line(), c.end_line()), (1, 3));
    assert!(corpus.lookup("indent.graphql.C.y").is_some());
}

#[test]
fn test_summary_report() {
    let analysis = Analyzer::default().analyze(vec![
        SourceUnit::from_text("a.graphql", "type A {\n  id: ID\n}\n"),
        SourceUnit::from_text("a.graphql", "type Again {\n}\n"),
    ]);
    let report = analysis.summary().to_string();
    assert!(report.starts_with("1 unit(s), 2 entities, 1 failed"), "{report}");
    assert!(report.contains("Field=1"), "{report}");
    assert!(report.contains("Type=1"), "{report}");
}

use std::path::Path;

use super::*;
use crate::config::DEFAULT_COLLECTION_DIRS;
use crate::session::LintSession;

fn check_with_root(root: &str, path: &str) -> LintSession {
    let mut session = LintSession::new(root);
    let collections = DEFAULT_COLLECTION_DIRS
        .iter()
        .map(ToString::to_string)
        .collect();
    let rule = DirNamingRule::new(ExemptionRegistry::with_defaults(), collections);
    rule.check(Path::new(path), &mut session);
    session
}

fn check(path: &str) -> LintSession {
    check_with_root("", path)
}

#[test]
fn file_at_root_is_skipped() {
    let session = check("guide.md");
    assert!(session.is_clean());
}

#[test]
fn clean_segments_produce_no_diagnostics() {
    let session = check("docs/guides/setup.md");
    assert!(session.is_clean());
}

#[test]
fn uppercase_segment_is_an_error() {
    let session = check("Docs/guide.md");
    assert_eq!(
        session.errors(),
        ["Directory name should be lowercase: Docs in Docs"]
    );
}

#[test]
fn space_and_underscore_segments_are_errors() {
    let session = check("my docs/old_stuff/guide.md");
    assert_eq!(session.errors().len(), 2);
    assert!(session.errors()[0].contains("contains spaces"));
    assert!(session.errors()[1].contains("contains underscores"));
}

#[test]
fn hidden_directory_may_contain_underscores() {
    let session = check(".agent_state/notes.md");
    assert!(session.errors().is_empty());
}

#[test]
fn digit_only_segment_fails_lowercase_unless_exempt() {
    let session = check("decisions/2024/record.md");
    assert_eq!(session.errors().len(), 1);
    assert!(session.errors()[0].contains("2024"));

    let session = check("decisions/2025/record.md");
    assert!(session.is_clean());
}

#[test]
fn singular_collection_name_warns() {
    let session = check("doc/guide.md");
    assert_eq!(
        session.warnings(),
        ["Collection directory should use plural form: doc should be docs in doc"]
    );
    assert!(session.errors().is_empty());
}

#[test]
fn each_singular_collection_form_warns() {
    for (singular, plural) in [
        ("spec", "specs"),
        ("guide", "guides"),
        ("decision", "decisions"),
        ("debt", "debts"),
        ("metric", "metrics"),
    ] {
        let session = check(&format!("{singular}/item.md"));
        assert_eq!(session.warnings().len(), 1, "{singular} should warn");
        assert!(session.warnings()[0].contains(plural));
    }
}

#[test]
fn plural_collection_name_does_not_warn() {
    let session = check("docs/guide.md");
    assert!(session.warnings().is_empty());
}

#[test]
fn segments_are_relative_to_the_root() {
    let session = check_with_root("/repo/Docs", "/repo/Docs/guides/setup.md");
    // "Docs" is part of the root and therefore never checked.
    assert!(session.is_clean());
}

#[test]
fn exempt_segment_skips_collection_warning_too() {
    let collections = vec!["2025s".to_string()];
    let mut session = LintSession::new("");
    let registry = ExemptionRegistry::with_defaults();
    let rule = DirNamingRule::new(registry, collections);
    rule.check(Path::new("2025/file.md"), &mut session);
    assert!(session.is_clean());
}

use std::path::Path;

use super::*;
use crate::session::LintSession;

fn check_content(content: &str) -> LintSession {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.md");
    std::fs::write(&path, content).unwrap();

    let mut session = LintSession::new("");
    ReferenceRule::new().check(&path, &mut session);
    session
}

#[test]
fn bare_directory_reference_warns_with_line_number() {
    let session = check_content("# Title\nSee the docs/ folder\n");

    assert_eq!(session.warnings().len(), 1);
    assert!(session.warnings()[0].starts_with("Directory reference should use backticks: docs/ at "));
    assert!(session.warnings()[0].ends_with(":2"));
}

#[test]
fn backticked_directory_reference_is_fine() {
    let session = check_content("See the `docs/` folder\n");
    assert!(session.warnings().is_empty());
}

#[test]
fn directory_followed_by_word_char_is_not_a_match() {
    // `docs/readme` reads as a path, not a bare directory token.
    let session = check_content("See docs/readme for details\n");
    assert!(session.warnings().is_empty());
}

#[test]
fn directory_embedded_in_word_is_not_a_match() {
    let session = check_content("See the mydocs/ folder\n");
    assert!(session.warnings().is_empty());
}

#[test]
fn hidden_agent_directory_is_covered() {
    let session = check_content("State lives in .agent/ here\n");
    assert_eq!(session.warnings().len(), 1);
    assert!(session.warnings()[0].contains(".agent/"));
}

#[test]
fn bare_extension_token_warns() {
    let session = check_content("All .md files are linted\n");

    assert_eq!(session.warnings().len(), 1);
    assert!(session.warnings()[0].starts_with("File extension reference should use backticks: .md at "));
}

#[test]
fn extension_attached_to_a_filename_is_not_a_match() {
    let session = check_content("Open guide.md for details\n");
    assert!(session.warnings().is_empty());
}

#[test]
fn backticked_extension_is_fine() {
    let session = check_content("All `.md` files are linted\n");
    assert!(session.warnings().is_empty());
}

#[test]
fn url_context_suppresses_extension_warning() {
    let session = check_content("Fetch from https: .md mirror\n");
    assert!(session.warnings().is_empty());

    let session = check_content("Fetch from www. .md mirror\n");
    assert!(session.warnings().is_empty());
}

#[test]
fn fenced_content_is_skipped() {
    let session = check_content("```text\nSee the docs/ folder\n```\nSee the docs/ folder\n");

    assert_eq!(session.warnings().len(), 1);
    assert!(session.warnings()[0].ends_with(":4"));
}

#[test]
fn trailing_content_after_unbalanced_fence_is_skipped() {
    let session = check_content("```text\nstill fenced\n\nSee the docs/ folder\n");
    assert!(session.warnings().is_empty());
}

#[test]
fn directory_warnings_precede_extension_warnings_per_line() {
    let session = check_content("Lint .md under docs/ now\n");

    assert_eq!(session.warnings().len(), 2);
    assert!(session.warnings()[0].contains("docs/"));
    assert!(session.warnings()[1].contains(".md"));
}

#[test]
fn multiple_extension_tokens_report_in_position_order() {
    let session = check_content("Use .sh then .md here\n");

    assert_eq!(session.warnings().len(), 2);
    assert!(session.warnings()[0].contains(".sh"));
    assert!(session.warnings()[1].contains(".md"));
}

#[test]
fn unreadable_file_degrades_to_a_warning() {
    let mut session = LintSession::new("");
    ReferenceRule::new().check(Path::new("/no/such/file.md"), &mut session);

    assert_eq!(session.warnings().len(), 1);
    assert!(session.warnings()[0].contains("encoding issues"));
}

use std::path::Path;

use super::*;
use crate::session::LintSession;

fn check_content(content: &str) -> LintSession {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.md");
    std::fs::write(&path, content).unwrap();

    let mut session = LintSession::new("");
    CodeBlockRule::new().check(&path, &mut session);
    session
}

#[test]
fn untagged_fence_is_an_error_at_its_line() {
    let session = check_content("# Title\n\n```\nsome text\n```\n");

    assert_eq!(session.errors().len(), 1);
    assert!(
        session.errors()[0]
            .starts_with("Code block doesn't specify a language, use ```plaintext for text: ")
    );
    assert!(session.errors()[0].ends_with(":3"));
}

#[test]
fn tagged_fence_is_fine() {
    let session = check_content("```python\nprint()\n```\n");
    assert!(session.is_clean());
}

#[test]
fn plaintext_tag_is_fine() {
    let session = check_content("```plaintext\nplain\n```\n");
    assert!(session.is_clean());
}

#[test]
fn closing_fence_is_not_checked() {
    // Only the opening line of each block is examined; the bare closing
    // fence never counts as missing a tag.
    let session = check_content("```rust\nfn main() {}\n```\n");
    assert!(session.is_clean());
}

#[test]
fn non_word_info_string_is_an_error() {
    let session = check_content("```{.python}\ncode\n```\n");
    assert_eq!(session.errors().len(), 1);
}

#[test]
fn every_untagged_block_is_reported() {
    let session = check_content("```\na\n```\n\n```\nb\n```\n");

    assert_eq!(session.errors().len(), 2);
    assert!(session.errors()[0].ends_with(":1"));
    assert!(session.errors()[1].ends_with(":5"));
}

#[test]
fn indented_fence_is_recognized() {
    let session = check_content("  ```\ncode\n  ```\n");
    assert_eq!(session.errors().len(), 1);
}

#[test]
fn unreadable_file_degrades_to_a_warning() {
    let mut session = LintSession::new("");
    CodeBlockRule::new().check(Path::new("/no/such/file.md"), &mut session);

    assert!(session.errors().is_empty());
    assert_eq!(session.warnings().len(), 1);
}

//! Shared helpers for the content-based rules: best-effort text decoding and
//! fence-marker detection.

use std::path::Path;

use crate::session::LintSession;

/// Delimiter opening or closing a literal code block.
pub(crate) const FENCE_MARKER: &str = "```";

/// True for a line whose trimmed content starts with the fence marker.
/// Content rules flip their in-fence toggle on every such line.
pub(crate) fn is_fence_marker(line: &str) -> bool {
    line.trim().starts_with(FENCE_MARKER)
}

/// Read a file as text, trying decoding strategies in order: UTF-8 first,
/// then Latin-1. Latin-1 maps every byte to the code point of the same
/// value, so only the initial read can fail.
///
/// # Errors
/// Returns an error if the file cannot be read at all.
pub fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => latin1_to_string(err.as_bytes()),
    })
}

fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Read a file for a content rule, degrading an unreadable file to a recorded
/// warning. Returns `None` when the rule should skip this file.
pub(crate) fn read_text_or_warn(path: &Path, session: &mut LintSession) -> Option<String> {
    match read_text(path) {
        Ok(text) => Some(text),
        Err(err) => {
            session.record_warning(format!(
                "Could not read file {} due to encoding issues: {err}",
                path.display()
            ));
            None
        }
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use arboard::Clipboard;
use tracing::debug;

/// Read the posting text from a file when given, otherwise from the system
/// clipboard. An all-whitespace posting is an error: there is nothing to
/// extract from or save.
pub fn read_posting(file: Option<&Path>) -> Result<String> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading posting from {}", path.display()))?,
        None => read_clipboard()?,
    };
    if text.trim().is_empty() {
        bail!("the posting is empty; copy the job description first");
    }
    debug!(chars = text.len(), "read posting");
    Ok(text)
}

fn read_clipboard() -> Result<String> {
    let mut clipboard = Clipboard::new().context("opening the system clipboard")?;
    clipboard
        .get_text()
        .context("reading text from the clipboard")
}

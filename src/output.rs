use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::ValueEnum;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Txt,
    Rtf,
}

/// Keep only characters that are safe in a filename on every platform the
/// tool runs on, and drop trailing whitespace left by the removal.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn file_stem(company: &str, title: &str, timestamp: &str) -> String {
    format!(
        "{} - {} - {}",
        sanitize_filename(company),
        sanitize_filename(title),
        timestamp
    )
}

/// Write the posting under `<company> - <title> - <timestamp>.<ext>` in
/// `dir`, creating the folder if needed. The timestamp keeps repeated saves
/// of the same role from overwriting each other. An RTF save that fails
/// falls back to plain text with the same stem.
pub fn save_posting(
    dir: &Path,
    company: &str,
    title: &str,
    text: &str,
    format: OutputFormat,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating save folder {}", dir.display()))?;
    let stem = file_stem(company, title, &Local::now().format("%Y-%m-%d_%H-%M").to_string());

    match format {
        OutputFormat::Txt => save_txt(dir, &stem, text),
        OutputFormat::Rtf => match save_rtf(dir, &stem, text) {
            Ok(path) => Ok(path),
            Err(err) => {
                warn!(%err, "rtf save failed, falling back to plain text");
                save_txt(dir, &stem, text)
            }
        },
    }
}

fn save_txt(dir: &Path, stem: &str, text: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{stem}.txt"));
    fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn save_rtf(dir: &Path, stem: &str, text: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{stem}.rtf"));
    fs::write(&path, rtf_document(text)).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn rtf_document(text: &str) -> String {
    let mut body = String::with_capacity(text.len() + text.len() / 8);
    for line in text.lines() {
        rtf_escape_into(line, &mut body);
        body.push_str("\\par\n");
    }
    format!("{{\\rtf1\\ansi\\deff0{{\\fonttbl{{\\f0 Helvetica;}}}}\\f0\\fs22\n{body}}}")
}

fn rtf_escape_into(line: &str, out: &mut String) {
    let mut units = [0u16; 2];
    for c in line.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            c if c.is_ascii() => out.push(c),
            c => {
                // RTF wants signed 16-bit decimal escapes.
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{}?", *unit as i16));
                }
            }
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_safe_chars_only() {
        assert_eq!(sanitize_filename("Acme Corp"), "Acme Corp");
        assert_eq!(sanitize_filename("Acme/Corp: R&D?"), "AcmeCorp RD");
        assert_eq!(sanitize_filename("Acme Corp.  "), "Acme Corp");
        assert_eq!(sanitize_filename("snake_case-name"), "snake_case-name");
    }

    #[test]
    fn stem_combines_sanitized_fields() {
        assert_eq!(
            file_stem("Acme, Inc.", "Sr. Engineer", "2026-08-30_12-00"),
            "Acme Inc - Sr Engineer - 2026-08-30_12-00"
        );
    }

    #[test]
    fn rtf_escapes_control_chars() {
        let doc = rtf_document("a{b}c\\d\nsecond");
        assert!(doc.contains("a\\{b\\}c\\\\d\\par"));
        assert!(doc.contains("second\\par"));
        assert!(doc.starts_with("{\\rtf1"));
        assert!(doc.ends_with("}"));
    }

    #[test]
    fn rtf_escapes_non_ascii() {
        let doc = rtf_document("café");
        assert!(doc.contains("caf\\u233?"));
    }

    #[test]
    fn save_txt_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_posting(
            dir.path(),
            "Acme Corp",
            "Data Analyst",
            "posting body",
            OutputFormat::Txt,
        )
        .unwrap();
        assert_eq!(path.extension().unwrap(), "txt");
        assert_eq!(fs::read_to_string(&path).unwrap(), "posting body");
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("Acme Corp - Data Analyst - "));
    }

    #[test]
    fn save_rtf_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_posting(
            dir.path(),
            "Acme",
            "Engineer",
            "line one\nline two",
            OutputFormat::Rtf,
        )
        .unwrap();
        assert_eq!(path.extension().unwrap(), "rtf");
        let doc = fs::read_to_string(&path).unwrap();
        assert!(doc.contains("line one\\par"));
    }
}

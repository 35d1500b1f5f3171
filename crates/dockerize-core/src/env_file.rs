//! `.env` parsing into Dockerfile `ENV` declarations.
//!
//! The env file is optional and never fatal: a missing file yields no
//! entries, and an unreadable one is logged and treated the same way.

use std::path::Path;

/// File name of the environment file, relative to the project directory.
pub const ENV_FILE_NAME: &str = ".env";

/// A single `KEY=VALUE` declaration from the env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
}

impl EnvEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Reads `<project_dir>/.env` and returns its entries in file order.
pub fn load(project_dir: &Path) -> Vec<EnvEntry> {
    let path = project_dir.join(ENV_FILE_NAME);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no env file");
        return Vec::new();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let entries = parse(&content);
            tracing::debug!(
                path = %path.display(),
                entries = entries.len(),
                "env file parsed"
            );
            entries
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "environment file could not be read; continuing without ENV declarations"
            );
            Vec::new()
        }
    }
}

/// Parses env file content. Comments, blank lines and lines without `=`
/// are skipped; everything else keeps its file order.
pub fn parse(content: &str) -> Vec<EnvEntry> {
    content
        .split(['\n', '\r'])
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<EnvEntry> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let line = line
        .strip_prefix("export")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map_or(line, str::trim_start);
    let (key, value) = line.split_once('=')?;

    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some(EnvEntry::new(key, unquote(value.trim_start())))
}

/// Strips one matching pair of surrounding single or double quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

//! Ignore files: parsing, discovery, and the `--create-ignore` template.

use crate::catalog::{default_categories, Category};
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name used when writing a template.
pub const DEFAULT_IGNORE_FILE: &str = ".dirtreeignore";

/// Names probed, in order, when no ignore file is given explicitly.
pub const IGNORE_FILE_CANDIDATES: &[&str] = &[".dirtreeignore", ".treeignore", "dirtree.ignore"];

/// Extract patterns from ignore-file text: one per line, trimmed, skipping
/// blank lines and `#` comments. Patterns are taken verbatim.
pub fn parse_patterns(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read and parse an ignore file.
pub fn read_patterns(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_patterns(&content))
}

/// Load patterns from `path`. A missing file yields nothing; any other
/// read failure is logged as a warning and also yields nothing.
pub fn load_patterns(path: &Path) -> BTreeSet<String> {
    match read_patterns(path) {
        Ok(patterns) => {
            tracing::info!(
                path = %path.display(),
                count = patterns.len(),
                "loaded ignore file"
            );
            patterns.into_iter().collect()
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeSet::new(),
        Err(e) => {
            tracing::warn!("could not read ignore file '{}': {e}", path.display());
            BTreeSet::new()
        }
    }
}

/// Pick the ignore file to use: the explicit one if given, otherwise the
/// first existing candidate in `dir`. Returns `None` when nothing exists.
pub fn discover(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Some(path.to_path_buf())
            } else {
                tracing::debug!(path = %path.display(), "ignore file not found");
                None
            }
        }
        None => IGNORE_FILE_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.exists()),
    }
}

/// Template contents: every default category under its own heading, with
/// opt-in categories left commented out.
pub fn template() -> String {
    let mut out = String::from(
        "# Directory Tree Generator Ignore File\n\
         # Lines starting with # are comments\n\
         # Supports glob patterns like *.log, temp*, etc.\n",
    );
    for category in default_categories() {
        section(&mut out, category, "");
    }
    for category in Category::ALL.into_iter().filter(|c| !c.in_defaults()) {
        section(&mut out, category, "# ");
    }
    out
}

fn section(out: &mut String, category: Category, line_prefix: &str) {
    let _ = writeln!(out, "\n# {}", category.heading());
    for pattern in category.patterns() {
        let _ = writeln!(out, "{line_prefix}{pattern}");
    }
}

/// Write the template to `path`, replacing any existing file.
pub fn write_template(path: &Path) -> io::Result<()> {
    fs::write(path, template())
}

#![allow(dead_code)]

use dirtree::catalog::all_default_patterns;
use dirtree::matcher::IgnoreSet;
use dirtree::tree::{walk, TreeConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// TreeConfig with the default preset, hidden files off, no depth limit.
pub fn default_tree_config() -> TreeConfig {
    TreeConfig {
        max_depth: None,
        show_hidden: false,
        ignore: IgnoreSet::from_patterns(all_default_patterns()),
    }
}

/// TreeConfig with no patterns at all.
pub fn bare_tree_config() -> TreeConfig {
    TreeConfig::default()
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Render the tree as plain strings, one per line, root included.
pub fn render_lines(root: &Path, config: &TreeConfig) -> Vec<String> {
    walk(root, config).map(|l| l.to_string()).collect()
}

/// Rendered lines below the root line.
pub fn body_lines(root: &Path, config: &TreeConfig) -> Vec<String> {
    render_lines(root, config).into_iter().skip(1).collect()
}

/// Name of the fixture root as the walker prints it.
pub fn root_line(root: &Path) -> String {
    format!("{}/", root.file_name().unwrap().to_string_lossy())
}

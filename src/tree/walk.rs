use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::layout::{child_prefix, Connector};
use super::{LineKind, TreeConfig, TreeLine};
use crate::matcher::should_ignore;

const PERMISSION_DENIED: &str = "[Permission Denied]";

/// A directory child as read from the filesystem.
#[derive(Debug)]
struct Child {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Work still to be done, kept on an explicit stack so output is produced
/// lazily in pre-order without recursion.
enum Pending {
    Dir {
        path: PathBuf,
        name: String,
        prefix: String,
        is_last: bool,
        depth: usize,
    },
    Line(TreeLine),
}

/// Lazy, pre-order sequence of tree lines. Each directory is listed only
/// when its own line is produced.
pub struct TreeWalk<'a> {
    config: &'a TreeConfig,
    stack: Vec<Pending>,
}

/// Start a traversal of `root`.
pub fn walk<'a>(root: &Path, config: &'a TreeConfig) -> TreeWalk<'a> {
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| {
            // `/` has no file name; the trailing `/` comes from the Dir line.
            root.display()
                .to_string()
                .trim_end_matches(std::path::MAIN_SEPARATOR)
                .to_string()
        });
    TreeWalk {
        config,
        stack: vec![Pending::Dir {
            path: root.to_path_buf(),
            name,
            prefix: String::new(),
            is_last: true,
            depth: 0,
        }],
    }
}

impl Iterator for TreeWalk<'_> {
    type Item = TreeLine;

    fn next(&mut self) -> Option<TreeLine> {
        match self.stack.pop()? {
            Pending::Line(line) => Some(line),
            Pending::Dir {
                path,
                name,
                prefix,
                is_last,
                depth,
            } => Some(self.visit_dir(path, name, prefix, is_last, depth)),
        }
    }
}

impl TreeWalk<'_> {
    /// Produce the line for a directory and queue its visible children.
    fn visit_dir(
        &mut self,
        path: PathBuf,
        name: String,
        prefix: String,
        is_last: bool,
        depth: usize,
    ) -> TreeLine {
        let connector = (depth > 0).then(|| Connector::for_position(is_last));

        if !path.exists() {
            let label = format!("Error: Directory '{}' does not exist.", path.display());
            return error_line(prefix, connector, label, path, depth);
        }
        if !path.is_dir() {
            let label = format!("Error: '{}' is not a directory.", path.display());
            return error_line(prefix, connector, label, path, depth);
        }

        let inner_prefix = if depth == 0 {
            String::new()
        } else {
            child_prefix(&prefix, is_last)
        };
        let line = TreeLine {
            prefix,
            connector,
            label: name,
            path: path.clone(),
            depth,
            kind: LineKind::Dir,
        };

        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return line;
        }

        let children = match list_children(&path) {
            Ok(children) => children,
            Err(e) => {
                tracing::debug!(path = %path.display(), "cannot list directory: {e}");
                self.stack.push(Pending::Line(TreeLine {
                    prefix: inner_prefix,
                    connector: Some(Connector::for_position(is_last)),
                    label: PERMISSION_DENIED.to_string(),
                    path,
                    depth: depth + 1,
                    kind: LineKind::Denied,
                }));
                return line;
            }
        };

        let mut visible: Vec<Child> = children
            .into_iter()
            .filter(|c| {
                !should_ignore(
                    &c.name,
                    &c.path,
                    c.name.starts_with('.'),
                    &self.config.ignore,
                    self.config.show_hidden,
                )
            })
            .collect();
        visible.sort_by(sort_cmp);

        let count = visible.len();
        // Reverse push so the first child is popped first.
        for (i, child) in visible.into_iter().enumerate().rev() {
            let is_last_item = i + 1 == count;
            let pending = if child.is_dir {
                Pending::Dir {
                    path: child.path,
                    name: child.name,
                    prefix: inner_prefix.clone(),
                    is_last: is_last_item,
                    depth: depth + 1,
                }
            } else {
                Pending::Line(TreeLine {
                    prefix: inner_prefix.clone(),
                    connector: Some(Connector::for_position(is_last_item)),
                    label: child.name,
                    path: child.path,
                    depth: depth + 1,
                    kind: LineKind::File,
                })
            };
            self.stack.push(pending);
        }

        line
    }
}

fn error_line(
    prefix: String,
    connector: Option<Connector>,
    label: String,
    path: PathBuf,
    depth: usize,
) -> TreeLine {
    TreeLine {
        prefix,
        connector,
        label,
        path,
        depth,
        kind: LineKind::Error,
    }
}

/// Read the immediate children of `dir`, following symlinks to decide
/// whether each is a directory. Fails only if `dir` itself can't be read.
fn list_children(dir: &Path) -> Result<Vec<Child>, walkdir::Error> {
    let mut children = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    for entry_result in walker {
        match entry_result {
            Ok(entry) => children.push(Child {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path().to_path_buf(),
                is_dir: entry.file_type().is_dir(),
            }),
            Err(e) if e.path().map_or(true, |p| p == dir) => return Err(e),
            Err(e) => {
                // Dangling or looping symlink: still listed, as a plain entry.
                let Some(path) = e.path() else { continue };
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "???".to_string());
                children.push(Child {
                    name,
                    path: path.to_path_buf(),
                    is_dir: false,
                });
            }
        }
    }
    Ok(children)
}

/// Directories first, then case-insensitive alpha. Exact name breaks ties
/// so the order never depends on the filesystem.
fn sort_cmp(a: &Child, b: &Child) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

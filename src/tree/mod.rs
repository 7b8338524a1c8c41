//! Directory traversal, filtering, sorting, and line layout.

mod layout;
pub(crate) mod walk;

use crate::matcher::IgnoreSet;
use std::fmt;
use std::path::PathBuf;

pub use layout::Connector;
pub use walk::{walk, TreeWalk};

/// What a rendered line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Dir,
    File,
    /// The directory above could not be listed.
    Denied,
    /// The path is missing or is not a directory.
    Error,
}

/// A single line of the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLine {
    /// Indentation inherited from ancestors (`│   ` / four spaces per level).
    pub prefix: String,
    /// `None` only for the root line and root-level errors.
    pub connector: Option<Connector>,
    /// Entry name, or the message for `Denied`/`Error` lines.
    pub label: String,
    /// Filesystem path the line refers to.
    pub path: PathBuf,
    /// Nesting depth (0 = traversal root).
    pub depth: usize,
    pub kind: LineKind,
}

impl TreeLine {
    pub fn is_dir(&self) -> bool {
        self.kind == LineKind::Dir
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        if let Some(connector) = self.connector {
            f.write_str(connector.glyph())?;
        }
        f.write_str(&self.label)?;
        if self.kind == LineKind::Dir {
            f.write_str("/")?;
        }
        Ok(())
    }
}

/// Configuration for one traversal. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Deepest level shown; directories at this level are not expanded
    /// (`None` for unlimited).
    pub max_depth: Option<usize>,
    /// Whether to include hidden files (dotfiles).
    pub show_hidden: bool,
    /// Patterns for entries to exclude.
    pub ignore: IgnoreSet,
}

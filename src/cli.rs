use crate::catalog::PatternMode;
use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Ignore files:
  Without --ignore-file, the first of these found in the current directory
  is loaded: .dirtreeignore, .treeignore, dirtree.ignore
  One pattern per line; lines starting with # and blank lines are skipped.

Categories:
  deps, build, vcs, ide, os, temp, logs, test, db, compiled, env, docs, lock

Examples:
  dirtree
  dirtree /path/to/project --depth=3 --show-hidden
  dirtree . --ignore='*.pyc,temp*,logs'
  dirtree . --pattern-mode=minimal --language=python
  dirtree /project --output=project_structure.md
  dirtree --create-ignore";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "Print a directory as a tree, skipping ignored files",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Target directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Limit the tree to N levels below the root
    #[arg(long = "depth", value_name = "N")]
    pub depth: Option<usize>,

    /// Show hidden files and directories (starting with .)
    #[arg(long = "show-hidden")]
    pub show_hidden: bool,

    /// Disable the built-in ignore patterns
    #[arg(long = "no-default-ignores")]
    pub no_default_ignores: bool,

    /// Built-in pattern preset
    #[arg(long = "pattern-mode", value_enum, default_value_t = PatternMode::Default)]
    pub pattern_mode: PatternMode,

    /// Add the ignore patterns for a language (python, javascript, js, node)
    #[arg(long = "language", value_name = "NAME")]
    pub language: Option<String>,

    /// Comma-separated pattern categories to add
    #[arg(long = "categories", value_delimiter = ',', action = clap::ArgAction::Append)]
    pub categories: Vec<String>,

    /// Comma-separated glob patterns to ignore (repeatable)
    #[arg(long = "ignore", value_name = "PATTERNS", value_delimiter = ',', action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Read extra patterns from this file
    #[arg(long = "ignore-file", value_name = "FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Save the tree to FILE as Markdown instead of printing it
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write a template .dirtreeignore in the current directory and exit
    #[arg(long = "create-ignore")]
    pub create_ignore: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self.categories.retain(|c| !c.trim().is_empty());
        self
    }

    /// Log level implied by `-v`/`-q`.
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, _) => "debug",
        }
    }
}

//! Turns parsed arguments into the traversal configuration.

use crate::catalog::{category_patterns, language_patterns};
use crate::cli::Args;
use crate::ignore_file::{discover, load_patterns};
use crate::matcher::IgnoreSetBuilder;
use crate::tree::TreeConfig;
use std::path::Path;

/// Union every pattern source into one ignore set: the built-in catalog
/// (preset, `--categories`, `--language`; all skipped with
/// `--no-default-ignores`), `--ignore`, and the ignore file found relative
/// to `cwd`.
pub fn build_tree_config(args: &Args, cwd: &Path) -> TreeConfig {
    let mut builder = IgnoreSetBuilder::new();

    if args.no_default_ignores {
        tracing::debug!("built-in patterns disabled");
    } else {
        builder.extend(args.pattern_mode.patterns());
        if !args.categories.is_empty() {
            builder.extend(category_patterns(args.categories.as_slice()));
        }
        if let Some(language) = &args.language {
            builder.extend(language_patterns(language));
        }
    }
    builder.extend(args.ignore.iter().map(|p| p.trim()));

    let explicit = args.ignore_file.as_deref().map(|p| cwd.join(p));
    if let Some(path) = discover(explicit.as_deref(), cwd) {
        builder.extend(load_patterns(&path));
    }

    tracing::info!(patterns = builder.len(), "ignore set assembled");

    TreeConfig {
        max_depth: args.depth,
        show_hidden: args.show_hidden,
        ignore: builder.build(),
    }
}

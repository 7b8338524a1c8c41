#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use dirtree::cli::Args;
use dirtree::config::build_tree_config;
use dirtree::ignore_file::{write_template, DEFAULT_IGNORE_FILE};
use dirtree::render::{header, save_markdown, stream_tree};
use dirtree::tree::walk;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("dirtree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_tracing(args.log_level());

    let cwd = std::env::current_dir().context("failed to read current directory")?;

    if args.create_ignore {
        let target = cwd.join(DEFAULT_IGNORE_FILE);
        write_template(&target)
            .with_context(|| format!("error creating ignore file {}", target.display()))?;
        println!("Created default ignore file: {DEFAULT_IGNORE_FILE}");
        return Ok(());
    }

    let tree_config = build_tree_config(&args, &cwd);
    let root = resolve_target(&args.path, &cwd);
    tracing::debug!(root = %root.display(), depth = ?tree_config.max_depth, "starting walk");

    match &args.output {
        Some(output) => {
            save_markdown(output, walk(&root, &tree_config))
                .with_context(|| format!("error saving to file {}", output.display()))?;
            println!("Tree saved to: {}", output.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{}", header(&root))?;
            stream_tree(&mut out, walk(&root, &tree_config))?;
        }
    }
    Ok(())
}

/// Absolute form of the target. Missing paths are kept as given (joined to
/// the working directory) so the walker can report them.
fn resolve_target(path: &Path, cwd: &Path) -> PathBuf {
    cwd.join(path).canonicalize().unwrap_or_else(|_| cwd.join(path))
}

/// Log to stderr so the tree on stdout stays clean. `RUST_LOG` wins over
/// the `-v`/`-q` level.
fn init_tracing(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

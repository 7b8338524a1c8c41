//! Output sinks for rendered tree lines: a streaming writer and a
//! Markdown document for `--output`.

use crate::tree::TreeLine;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const HEADER_RULE_WIDTH: usize = 50;

/// Heading printed above the tree in interactive mode.
pub fn header(root: &Path) -> String {
    format!(
        "Directory structure for: {}\n{}",
        root.display(),
        "-".repeat(HEADER_RULE_WIDTH)
    )
}

/// Write each line as soon as the walker produces it. Returns the number
/// of lines written.
pub fn stream_tree<W, I>(out: &mut W, lines: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = TreeLine>,
{
    let mut count = 0;
    for line in lines {
        writeln!(out, "{line}")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Buffer every line and wrap them in a fenced block under a heading.
pub fn markdown_document<I>(lines: I) -> String
where
    I: IntoIterator<Item = TreeLine>,
{
    let mut body = String::new();
    for line in lines {
        body.push_str(&line.to_string());
        body.push('\n');
    }
    format!("# Directory Tree\n\n```\n{body}```\n")
}

/// Render the Markdown document and write it to `path`. The tree is fully
/// built before the file is created.
pub fn save_markdown<I>(path: &Path, lines: I) -> io::Result<()>
where
    I: IntoIterator<Item = TreeLine>,
{
    let document = markdown_document(lines);
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(document.as_bytes())?;
    writer.flush()
}

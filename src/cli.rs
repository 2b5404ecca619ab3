//! CLI module - Command-line interface definition and dispatch

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::model::CopyRecord;
use crate::core::render::{render_record, render_summary, OutputFormat};
use crate::organize;

/// shelve - organize a directory tree into per-extension folders.
#[derive(Parser, Debug)]
#[command(name = "shelve")]
#[command(
    author,
    version,
    about,
    long_about = r#"shelve walks SOURCE recursively, groups every regular file by its literal
file extension, and copies each file into <DEST>/<extension>/.

Files without an extension land in <DEST>/no_extension/. Extension case is
preserved: a.TXT and b.txt end up in different folders. When a destination
name is already taken, the copy is renamed to "<name> Copy <n>.<ext>" with
the first free n.

One line is printed per copied file, in copy order. Any failure aborts the
whole run with a single error message and a non-zero exit code; files
already copied are left in place.

Examples:
    shelve ~/Downloads
    shelve ~/Downloads --dest ~/sorted
    shelve ./inbox --format jsonl | jq .dest
"#
)]
pub struct Cli {
    /// Source directory to organize.
    #[arg(
        value_name = "SOURCE",
        long_help = "Source directory to organize. It is walked recursively;\n\
every regular file below it is copied (the source is never modified)."
    )]
    pub source: PathBuf,

    /// Destination directory (created if missing).
    #[arg(
        long,
        default_value = "dist",
        value_name = "DIR",
        long_help = "Destination directory. Created if missing, including parents.\n\n\
Must not already exist as a plain file."
    )]
    pub dest: PathBuf,

    /// Output format (text/jsonl).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the per-copy output format.\n\n\
Supported values:\n\
- text (default): one 'source -> dest' line per copy\n\
- jsonl: one JSON object per copy with source, dest and label fields"
    )]
    pub format: String,

    /// Quiet mode (suppress per-copy output and the summary).
    #[arg(
        short,
        long,
        long_help = "Suppress the per-copy lines and the end-of-run summary.\n\
Errors are still printed to stderr."
    )]
    pub quiet: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();

    let quiet = cli.quiet;
    let mut on_copy = |record: &CopyRecord| {
        if !quiet {
            println!("{}", render_record(record, format));
        }
    };

    let summary = organize::organize(&cli.source, &cli.dest, &mut on_copy)?;

    if !quiet && format == OutputFormat::Text {
        eprintln!(
            "{}",
            render_summary(summary.files_copied, summary.buckets)
        );
    }

    Ok(())
}

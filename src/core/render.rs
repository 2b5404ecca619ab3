//! Renderer module
//!
//! Renders copy events and the run summary to the selected output format:
//! text (`source -> dest` lines) or jsonl (one JSON object per copy).

use crate::core::model::CopyRecord;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render one copy event as a single output line (without newline).
pub fn render_record(record: &CopyRecord, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{} -> {}", record.source, record.dest),
        OutputFormat::Jsonl => serde_json::to_string(record).unwrap_or_default(),
    }
}

/// Render the end-of-run summary line.
pub fn render_summary(files: usize, buckets: usize) -> String {
    format!("shelved {} file(s) into {} bucket(s)", files, buckets)
}

//! Validate many document numbers read from a file

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use docval::DocumentType;
use docval::output::{BatchEntry, BatchReport, OutputMode};

/// Validate every non-blank line of `file` and exit with status 1 if any
/// entry is invalid
///
/// With `document_type` set each line is a bare number. Otherwise each line
/// is `<type> <number>`, split at the first whitespace.
pub fn batch(file: &Path, document_type: Option<DocumentType>, mode: OutputMode) -> anyhow::Result<()> {
    let content = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?
    };

    let entries = check_lines(&content, document_type);
    log::debug!("checked {} entries from {}", entries.len(), file.display());

    let report = BatchReport::from_entries(entries);
    report.render(mode);

    if !report.all_valid() {
        std::process::exit(1);
    }

    Ok(())
}

fn check_lines(content: &str, document_type: Option<DocumentType>) -> Vec<BatchEntry> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| check_line(index + 1, line, document_type))
        .collect()
}

fn check_line(line_no: usize, line: &str, document_type: Option<DocumentType>) -> BatchEntry {
    let (parsed, number) = match document_type {
        Some(t) => (Ok(t), line),
        None => {
            let line = line.trim_start();
            let (kind, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            (kind.parse::<DocumentType>(), rest.trim_start())
        },
    };

    match parsed {
        Ok(t) => BatchEntry {
            line: line_no,
            document_type: Some(t),
            document_number: number.to_string(),
            valid: t.validate(number),
            error: None,
        },
        Err(e) => BatchEntry {
            line: line_no,
            document_type: None,
            document_number: number.to_string(),
            valid: false,
            error: Some(e.to_string()),
        },
    }
}

//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::DocumentType;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of validating a single document number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Document type the number was checked as
    pub document_type: DocumentType,
    /// The number exactly as supplied
    pub document_number: String,
    /// Whether the number is valid
    pub valid: bool,
}

/// One line of a batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    /// 1-based line number in the input file
    pub line: usize,
    /// Document type, if the line named a known one
    pub document_type: Option<DocumentType>,
    /// The number exactly as read from the line
    pub document_number: String,
    /// Whether the number is valid
    pub valid: bool,
    /// Why the line could not be validated at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Number of entries checked
    pub total: usize,
    /// Number of valid entries
    pub valid: usize,
    /// Number of invalid entries
    pub invalid: usize,
    /// Per-line results, in input order
    pub entries: Vec<BatchEntry>,
}

/// Result of a check digit computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckDigitReport {
    /// Document type the payload belongs to
    pub document_type: DocumentType,
    /// The payload the digit was computed for
    pub payload: String,
    /// The check digit, or `None` if no digit can complete this payload
    pub check_digit: Option<u8>,
    /// Payload followed by its check digit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
}

/// Description of a supported document type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    /// The document type
    pub document_type: DocumentType,
    /// Numeric type code
    pub code: u8,
    /// Expected number of characters
    pub length: usize,
    /// Whether the number carries a check digit
    pub check_digit: bool,
}

/// List of supported document types
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeList {
    /// Supported types, in code order
    pub types: Vec<TypeInfo>,
}

/// Generic operation result for simple commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn verdict(valid: bool) -> colored::ColoredString {
    if valid { "valid".green().bold() } else { "invalid".red().bold() }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl ValidationReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let valid = verdict(self.valid);
                println!("{} {}: {valid}", self.document_type, self.document_number);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl BatchReport {
    /// Build a report from per-line entries
    #[must_use]
    pub fn from_entries(entries: Vec<BatchEntry>) -> Self {
        let valid = entries.iter().filter(|e| e.valid).count();
        Self {
            total: entries.len(),
            valid,
            invalid: entries.len() - valid,
            entries,
        }
    }

    /// Whether every entry is valid
    #[must_use]
    pub const fn all_valid(&self) -> bool {
        self.invalid == 0
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.entries.is_empty() {
            println!("No documents to check.");
            return;
        }

        for e in &self.entries {
            let kind = e.document_type.map_or_else(|| "?".to_string(), |t| t.to_string());
            let line = format!("  {:>4}  {kind} {}: {}", e.line, e.document_number, verdict(e.valid));
            match &e.error {
                Some(err) => println!("{line} ({err})"),
                None => println!("{line}"),
            }
        }

        println!("\n{} checked, {} valid, {} invalid", self.total, self.valid, self.invalid);
    }
}

impl CheckDigitReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match (self.check_digit, &self.document_number) {
                (Some(digit), Some(number)) => {
                    println!("Check digit: {digit}");
                    println!("{}: {}", self.document_type, number.bold());
                },
                _ => println!(
                    "No check digit completes {} payload {}",
                    self.document_type, self.payload
                ),
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl TypeList {
    /// Describe every supported document type
    #[must_use]
    pub fn supported() -> Self {
        Self {
            types: DocumentType::ALL
                .into_iter()
                .map(|t| TypeInfo {
                    document_type: t,
                    code: t.code(),
                    length: t.expected_length(),
                    check_digit: t.has_check_digit(),
                })
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Supported document types:\n");
                for t in &self.types {
                    let scheme = if t.check_digit { "check digit" } else { "pattern only" };
                    let name = t.document_type.to_string();
                    println!("  [{}] {name:<8} {} characters, {scheme}", t.code, t.length);
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

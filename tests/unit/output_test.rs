//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use docval::DocumentType;
use docval::output::{
    BatchEntry, BatchReport, CheckDigitReport, OperationResult, OutputMode, TypeList,
    ValidationReport,
};

fn entry(line: usize, valid: bool) -> BatchEntry {
    BatchEntry {
        line,
        document_type: Some(DocumentType::Rnc),
        document_number: "101010632".to_string(),
        valid,
        error: None,
    }
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn validation_report_serialization() {
    let report = ValidationReport {
        document_type: DocumentType::Dni,
        document_number: "00113918205".to_string(),
        valid: true,
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"document_type\":\"dni\""));
    assert!(json.contains("\"document_number\":\"00113918205\""));
    assert!(json.contains("\"valid\":true"));
}

#[test]
fn batch_entry_omits_missing_error() {
    let json = serde_json::to_string(&entry(1, true)).unwrap();
    assert!(!json.contains("error"));

    let failed = BatchEntry {
        line: 2,
        document_type: None,
        document_number: "x".to_string(),
        valid: false,
        error: Some("unknown document type: nif".to_string()),
    };
    let json = serde_json::to_string(&failed).unwrap();
    assert!(json.contains("\"document_type\":null"));
    assert!(json.contains("\"error\":\"unknown document type: nif\""));
}

#[test]
fn check_digit_report_unreachable() {
    let report = CheckDigitReport {
        document_type: DocumentType::Rnc,
        payload: "13000000".to_string(),
        check_digit: None,
        document_number: None,
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"check_digit\":null"));
    assert!(!json.contains("document_number"));
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Created config.toml".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
}

// =============================================================================
// BatchReport Tests
// =============================================================================

#[test]
fn batch_report_counts() {
    let report = BatchReport::from_entries(vec![entry(1, true), entry(2, false), entry(3, true)]);
    assert_eq!(report.total, 3);
    assert_eq!(report.valid, 2);
    assert_eq!(report.invalid, 1);
    assert!(!report.all_valid());
}

#[test]
fn batch_report_empty_is_all_valid() {
    let report = BatchReport::from_entries(vec![]);
    assert_eq!(report.total, 0);
    assert!(report.all_valid());
}

// =============================================================================
// TypeList Tests
// =============================================================================

#[test]
fn type_list_covers_every_type() {
    let list = TypeList::supported();
    let codes: Vec<u8> = list.types.iter().map(|t| t.code).collect();
    assert_eq!(codes, vec![1, 2, 3]);

    let passport = &list.types[1];
    assert_eq!(passport.document_type, DocumentType::Passport);
    assert_eq!(passport.length, 9);
    assert!(!passport.check_digit);
}

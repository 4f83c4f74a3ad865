//! Validate a single document number

use docval::DocumentType;
use docval::output::{OutputMode, ValidationReport};

/// Validate one number and exit with status 1 if it is invalid
pub fn validate(document_type: DocumentType, number: &str, mode: OutputMode) {
    let report = ValidationReport {
        document_type,
        document_number: number.to_string(),
        valid: document_type.validate(number),
    };

    report.render(mode);

    if !report.valid {
        std::process::exit(1);
    }
}

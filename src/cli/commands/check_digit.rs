//! Compute check digits

use anyhow::bail;
use docval::DocumentType;
use docval::core::services::{dni, parse_digits, rnc};
use docval::output::{CheckDigitReport, OutputMode};

/// Compute and print the check digit completing `payload`
pub fn check_digit(document_type: DocumentType, payload: &str, mode: OutputMode) -> anyhow::Result<()> {
    let (payload_len, digit) = match document_type {
        DocumentType::Dni => (dni::DNI_PAYLOAD_LENGTH, dni::check_digit(payload)),
        DocumentType::Rnc => (rnc::RNC_PAYLOAD_LENGTH, rnc::check_digit(payload)),
        DocumentType::Passport => bail!("Passport numbers have no check digit"),
    };

    // An RNC payload can be well formed and still have no digit
    if payload.len() != payload_len || parse_digits(payload).is_none() {
        bail!("{document_type} payload must be {payload_len} digits, got {payload:?}");
    }

    let report = CheckDigitReport {
        document_type,
        payload: payload.to_string(),
        check_digit: digit,
        document_number: digit.map(|d| format!("{payload}{d}")),
    };
    report.render(mode);

    Ok(())
}

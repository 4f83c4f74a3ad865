//! Document validator - dispatches a document number to its checker
//!
//! Validation never fails: malformed input of any kind, including an empty
//! number or an unknown type code, simply yields `false`.

use crate::core::models::DocumentType;

use super::{dni, passport, rnc};

/// Validate `document_number` as a document of type `document_type`
///
/// The number is checked exactly as given. Callers are responsible for
/// stripping formatting such as dashes or spaces.
///
/// # Examples
///
/// ```
/// use docval::{DocumentType, validate_document_number};
///
/// assert!(validate_document_number(DocumentType::Dni, "00113918205"));
/// assert!(validate_document_number(DocumentType::Passport, "AB1234567"));
/// assert!(validate_document_number(DocumentType::Rnc, "101010632"));
/// assert!(!validate_document_number(DocumentType::Rnc, ""));
/// ```
#[must_use]
pub fn validate_document_number(document_type: DocumentType, document_number: &str) -> bool {
    if document_number.is_empty() {
        log::debug!("empty {document_type} number rejected");
        return false;
    }

    let valid = match document_type {
        DocumentType::Dni => dni::is_valid(document_number),
        DocumentType::Passport => passport::is_valid(document_number),
        DocumentType::Rnc => rnc::is_valid(document_number),
    };

    log::debug!("{document_type} {document_number:?}: {}", if valid { "valid" } else { "invalid" });
    valid
}

/// Validate a document identified by its numeric type code
///
/// This is the untyped entry point for callers holding a raw code
/// (1 = DNI, 2 = passport, 3 = RNC) and a possibly absent number. An unknown
/// code or an absent number yields `false`.
#[must_use]
pub fn validate_document_code(code: u8, document_number: Option<&str>) -> bool {
    let Some(number) = document_number else {
        log::debug!("absent document number rejected");
        return false;
    };

    match DocumentType::try_from(code) {
        Ok(document_type) => validate_document_number(document_type, number),
        Err(e) => {
            log::debug!("{e}");
            false
        },
    }
}

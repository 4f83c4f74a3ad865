//! Tests for document type parsing and serialization

use docval::{DocumentType, DocumentTypeError};
use test_case::test_case;

#[test_case("dni", DocumentType::Dni ; "dni")]
#[test_case("DNI", DocumentType::Dni ; "uppercase dni")]
#[test_case("cedula", DocumentType::Dni ; "cedula alias")]
#[test_case("passport", DocumentType::Passport ; "passport")]
#[test_case("Passport", DocumentType::Passport ; "capitalized passport")]
#[test_case("pasaporte", DocumentType::Passport ; "pasaporte alias")]
#[test_case("rnc", DocumentType::Rnc ; "rnc")]
#[test_case("RNC", DocumentType::Rnc ; "uppercase rnc")]
fn test_parsing(input: &str, expected: DocumentType) {
    let parsed: DocumentType = input.parse().unwrap();
    assert_eq!(parsed, expected);
}

#[test_case("" ; "empty string")]
#[test_case("id" ; "unknown name")]
#[test_case(" dni" ; "surrounding whitespace")]
fn test_parsing_errors(input: &str) {
    let result: Result<DocumentType, _> = input.parse();
    assert_eq!(result, Err(DocumentTypeError::Unknown(input.to_string())));
}

#[test]
fn test_error_messages_list_choices() {
    let err = "nif".parse::<DocumentType>().unwrap_err();
    assert_eq!(err.to_string(), "unknown document type: nif. Use: dni, passport, rnc");

    let err = DocumentType::try_from(9).unwrap_err();
    assert!(err.to_string().contains("9"));
}

#[test_case(1, DocumentType::Dni ; "code one")]
#[test_case(2, DocumentType::Passport ; "code two")]
#[test_case(3, DocumentType::Rnc ; "code three")]
fn test_codes(code: u8, expected: DocumentType) {
    assert_eq!(DocumentType::try_from(code), Ok(expected));
    assert_eq!(expected.code(), code);
}

#[test]
fn test_expected_lengths() {
    assert_eq!(DocumentType::Dni.expected_length(), 11);
    assert_eq!(DocumentType::Passport.expected_length(), 9);
    assert_eq!(DocumentType::Rnc.expected_length(), 9);
}

#[test]
fn test_serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&DocumentType::Rnc).unwrap(), "\"rnc\"");
    let parsed: DocumentType = serde_json::from_str("\"passport\"").unwrap();
    assert_eq!(parsed, DocumentType::Passport);
    assert!(serde_json::from_str::<DocumentType>("\"RNC\"").is_err());
}

//! Property-based tests for the validators
//!
//! Uses proptest to verify properties that should hold for all inputs.

use docval::core::services::{dni, rnc};
use docval::{DocumentType, validate_document_number};
use proptest::prelude::*;

fn any_type() -> impl Strategy<Value = DocumentType> {
    prop::sample::select(DocumentType::ALL.to_vec())
}

proptest! {
    /// Same input, same answer
    #[test]
    fn validation_is_idempotent(t in any_type(), number in ".{0,16}") {
        let first = validate_document_number(t, &number);
        let second = validate_document_number(t, &number);
        prop_assert_eq!(first, second);
    }

    /// Numbers of the wrong length are never valid
    #[test]
    fn wrong_length_is_invalid(t in any_type(), number in "[0-9A-Za-z]{0,20}") {
        prop_assume!(number.len() != t.expected_length());
        prop_assert!(!validate_document_number(t, &number));
    }

    /// A payload completed with its computed digit validates, any other digit does not
    #[test]
    fn dni_built_from_payload_validates(payload in "[0-9]{10}") {
        prop_assume!(!payload.starts_with("000"));
        let digit = dni::check_digit(&payload).unwrap();
        for candidate in 0..=9u8 {
            let number = format!("{payload}{candidate}");
            prop_assert_eq!(validate_document_number(DocumentType::Dni, &number), candidate == digit);
        }
    }

    /// The reserved prefix is rejected whatever the check digit
    #[test]
    fn dni_reserved_prefix_is_invalid(rest in "[0-9]{8}") {
        let number = format!("000{rest}");
        prop_assert!(!validate_document_number(DocumentType::Dni, &number));
    }

    /// A single non-digit anywhere spoils an otherwise valid DNI
    #[test]
    fn dni_with_non_digit_is_invalid(pos in 0usize..11, c in "[A-Za-z -]") {
        let mut number = String::from("00113918205");
        number.replace_range(pos..=pos, &c);
        prop_assert!(!validate_document_number(DocumentType::Dni, &number));
    }

    /// Two letters followed by seven digits is always a valid passport
    #[test]
    fn passport_pattern_validates(number in "[A-Za-z]{2}[0-9]{7}") {
        prop_assert!(validate_document_number(DocumentType::Passport, &number));
    }

    /// At most one digit completes an RNC payload, and it is the computed one
    #[test]
    fn rnc_has_at_most_one_check_digit(payload in "[0-9]{8}") {
        let valid: Vec<u8> = (0..=9u8)
            .filter(|d| validate_document_number(DocumentType::Rnc, &format!("{payload}{d}")))
            .collect();
        match rnc::check_digit(&payload) {
            Some(digit) => prop_assert_eq!(valid, vec![digit]),
            None => prop_assert!(valid.is_empty()),
        }
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn dni_known_example_and_flipped_digit() {
        assert!(validate_document_number(DocumentType::Dni, "00113918205"));
        for d in (0..=9).filter(|&d| d != 5) {
            assert!(!validate_document_number(DocumentType::Dni, &format!("0011391820{d}")));
        }
    }
}

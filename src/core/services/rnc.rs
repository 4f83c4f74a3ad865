//! RNC (tax registry number) checker
//!
//! An RNC is nine decimal digits: an eight digit payload weighted by
//! `7, 9, 8, 6, 5, 4, 3, 2` and a mod-11 check digit.
//!
//! A payload whose weighted sum leaves remainder 1 would need check digit
//! 10, which cannot be written as a single digit. Such payloads have no
//! valid RNC at all.

use super::digits::parse_digits;

/// Total length of an RNC
pub const RNC_LENGTH: usize = 9;

/// Length of the payload preceding the check digit
pub const RNC_PAYLOAD_LENGTH: usize = 8;

const MULTIPLIERS: [u16; RNC_PAYLOAD_LENGTH] = [7, 9, 8, 6, 5, 4, 3, 2];
const DIVISOR: u16 = 11;
/// Check digit used when the weighted sum is a multiple of eleven
const ZERO_REMAINDER_DIGIT: u16 = 2;

/// Check whether `rnc` is a valid RNC
#[must_use]
pub fn is_valid(rnc: &str) -> bool {
    if rnc.len() != RNC_LENGTH {
        return false;
    }

    let Some(digits) = parse_digits(rnc) else {
        return false;
    };

    let (payload, verifier) = digits.split_at(RNC_PAYLOAD_LENGTH);
    verifier
        .first()
        .is_some_and(|&v| u16::from(v) == expected(payload))
}

/// Compute the check digit for an eight digit RNC payload
///
/// Returns `None` if `payload` is not exactly eight ASCII digits, or if the
/// payload would require the unwritable check digit 10.
#[must_use]
pub fn check_digit(payload: &str) -> Option<u8> {
    if payload.len() != RNC_PAYLOAD_LENGTH {
        return None;
    }
    let digits = parse_digits(payload)?;
    u8::try_from(expected(&digits)).ok().filter(|&d| d < 10)
}

/// Expected verifier value, which may be 10
fn expected(payload: &[u8]) -> u16 {
    let sum: u16 = payload
        .iter()
        .zip(MULTIPLIERS)
        .map(|(&digit, multiplier)| u16::from(digit) * multiplier)
        .sum();

    let remainder = sum % DIVISOR;
    log::trace!("rnc weighted sum: {sum}, remainder: {remainder}");

    if remainder == 0 { ZERO_REMAINDER_DIGIT } else { DIVISOR - remainder }
}

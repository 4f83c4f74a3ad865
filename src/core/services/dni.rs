//! DNI (cédula) checker
//!
//! A DNI is eleven decimal digits: a ten digit payload followed by a check
//! digit. Payload digits are weighted alternately by 1 and 2, two-digit
//! products are folded into the sum of their digits, and the check digit
//! brings the total up to the next multiple of ten.
//!
//! # Examples
//!
//! ```
//! use docval::core::services::dni;
//!
//! assert!(dni::is_valid("00113918205"));
//! assert!(!dni::is_valid("00113918204"));
//! assert_eq!(dni::check_digit("0011391820"), Some(5));
//! ```

use super::digits::parse_digits;

/// Total length of a DNI
pub const DNI_LENGTH: usize = 11;

/// Length of the payload preceding the check digit
pub const DNI_PAYLOAD_LENGTH: usize = 10;

/// Prefix that is never issued
const RESERVED_PREFIX: &str = "000";

const MULTIPLIERS: [u8; DNI_PAYLOAD_LENGTH] = [1, 2, 1, 2, 1, 2, 1, 2, 1, 2];

/// Check whether `dni` is a valid DNI
#[must_use]
pub fn is_valid(dni: &str) -> bool {
    if dni.len() != DNI_LENGTH {
        return false;
    }

    let Some(digits) = parse_digits(dni) else {
        return false;
    };

    if dni.starts_with(RESERVED_PREFIX) {
        return false;
    }

    let (payload, verifier) = digits.split_at(DNI_PAYLOAD_LENGTH);
    verifier.first().is_some_and(|&v| v == compute(payload))
}

/// Compute the check digit for a ten digit DNI payload
///
/// Returns `None` if `payload` is not exactly ten ASCII digits. The reserved
/// `000` prefix is not considered here.
#[must_use]
pub fn check_digit(payload: &str) -> Option<u8> {
    if payload.len() != DNI_PAYLOAD_LENGTH {
        return None;
    }
    parse_digits(payload).map(|digits| compute(&digits))
}

fn compute(payload: &[u8]) -> u8 {
    let sum: u8 = payload
        .iter()
        .zip(MULTIPLIERS)
        .map(|(&digit, multiplier)| {
            let product = digit * multiplier;
            if product < 10 { product } else { product / 10 + product % 10 }
        })
        .sum();

    log::trace!("dni weighted sum: {sum}");

    (10 - sum % 10) % 10
}

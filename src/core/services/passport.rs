//! Passport checker
//!
//! Dominican passports are two ASCII letters (either case) followed by
//! seven decimal digits. There is no check digit.

use std::sync::LazyLock;

use regex::Regex;

/// Total length of a passport number
pub const PASSPORT_LENGTH: usize = 9;

static PASSPORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}[0-9]{7}$").expect("passport pattern is valid"));

/// Check whether `passport` is a well-formed passport number
#[must_use]
pub fn is_valid(passport: &str) -> bool {
    if passport.len() != PASSPORT_LENGTH {
        return false;
    }
    PASSPORT_PATTERN.is_match(passport)
}

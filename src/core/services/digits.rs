//! Digit extraction shared by the checksum-based checkers

/// Parse every character of `s` as an ASCII decimal digit
///
/// Returns `None` on the first character outside `0`-`9`. Other Unicode
/// digit characters are rejected as well.
#[must_use]
pub fn parse_digits(s: &str) -> Option<Vec<u8>> {
    s.bytes().map(|b| b.checked_sub(b'0').filter(|d| *d < 10)).collect()
}

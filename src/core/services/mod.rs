//! Validation services
//!
//! Pure checking logic over borrowed strings. Nothing here performs I/O or
//! keeps state between calls.
//!
//! - [`dni`] - National ID, mod-10 check digit
//! - [`passport`] - Passport, letter/digit pattern
//! - [`rnc`] - Tax ID, mod-11 check digit
//! - [`validator`] - Dispatch by [`DocumentType`](crate::core::models::DocumentType)

mod digits;

pub mod dni;
pub mod passport;
pub mod rnc;
pub mod validator;

pub use digits::parse_digits;
pub use validator::{validate_document_code, validate_document_number};

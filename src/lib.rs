//! docval - Validation of Dominican Republic identity document numbers
//!
//! Checks National ID (DNI / cédula), passport and tax ID (RNC) numbers for
//! structural validity and, where the scheme has one, a correct check digit.
//!
//! ```
//! use docval::{DocumentType, validate_document_number};
//!
//! assert!(validate_document_number(DocumentType::Dni, "00113918205"));
//! assert!(!validate_document_number(DocumentType::Dni, "001-1391820-5"));
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use crate::core::models::{DocumentType, DocumentTypeError};
pub use crate::core::services::{validate_document_code, validate_document_number};

//! Domain models for docval
//!
//! - [`DocumentType`] - Which kind of document a number claims to be

mod document_type;

pub use document_type::{DocumentType, DocumentTypeError};

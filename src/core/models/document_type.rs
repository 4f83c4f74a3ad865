//! Document type tags
//!
//! The three kinds of Dominican identity documents this crate understands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when turning a name or numeric code into a [`DocumentType`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentTypeError {
    /// The name does not correspond to any supported document type
    #[error("unknown document type: {0}. Use: dni, passport, rnc")]
    Unknown(String),

    /// The numeric code is outside the supported range
    #[error("unknown document type code: {0}. Use: 1 (dni), 2 (passport), 3 (rnc)")]
    UnknownCode(u8),
}

/// Dominican identity document types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// National identity card (cédula), 11 digits with a mod-10 check digit
    Dni,
    /// Passport, two letters followed by seven digits
    Passport,
    /// Tax registry number, 9 digits with a mod-11 check digit
    Rnc,
}

impl DocumentType {
    /// Every supported document type, in code order
    pub const ALL: [Self; 3] = [Self::Dni, Self::Passport, Self::Rnc];

    /// Stable numeric code of this type (1 = DNI, 2 = passport, 3 = RNC)
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Dni => 1,
            Self::Passport => 2,
            Self::Rnc => 3,
        }
    }

    /// Number of characters a well-formed document of this type has
    #[must_use]
    pub const fn expected_length(self) -> usize {
        match self {
            Self::Dni => crate::core::services::dni::DNI_LENGTH,
            Self::Passport => crate::core::services::passport::PASSPORT_LENGTH,
            Self::Rnc => crate::core::services::rnc::RNC_LENGTH,
        }
    }

    /// Whether numbers of this type carry a check digit
    #[must_use]
    pub const fn has_check_digit(self) -> bool {
        !matches!(self, Self::Passport)
    }

    /// Validate a document number of this type
    ///
    /// Shorthand for [`validate_document_number`](crate::validate_document_number).
    #[must_use]
    pub fn validate(self, document_number: &str) -> bool {
        crate::core::services::validate_document_number(self, document_number)
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dni => write!(f, "DNI"),
            Self::Passport => write!(f, "Passport"),
            Self::Rnc => write!(f, "RNC"),
        }
    }
}

impl std::str::FromStr for DocumentType {
    type Err = DocumentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dni" | "cedula" => Ok(Self::Dni),
            "passport" | "pasaporte" => Ok(Self::Passport),
            "rnc" => Ok(Self::Rnc),
            _ => Err(DocumentTypeError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<u8> for DocumentType {
    type Error = DocumentTypeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or(DocumentTypeError::UnknownCode(code))
    }
}

//! Error types for descriptor construction and value coercion.

use thiserror::Error;

use crate::types::{SortOrder, SqlKind};

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for descriptor construction, coercion and inference.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The kind cannot be constructed (user-defined types) or cannot be
    /// re-derived as a partial-length variant (xml).
    #[error("Unsupported column kind: {kind}")]
    UnsupportedKind { kind: SqlKind },

    /// Max length outside the range allowed for the kind.
    #[error("Specified length '{length}' is out of range for {kind}")]
    LengthOutOfRange { kind: SqlKind, length: i64 },

    /// Decimal precision outside 1..=38, or smaller than the scale.
    #[error("Precision '{precision}' is out of range")]
    PrecisionOutOfRange { precision: u8 },

    /// Decimal scale outside 0..=38.
    #[error("Scale '{scale}' is out of range")]
    ScaleOutOfRange { scale: u8 },

    /// Fractional-second scale outside 0..=7.
    #[error("Time scale '{scale}' is out of range (maximum 7)")]
    TimeScaleOutOfRange { scale: u8 },

    /// Compare options that are neither binary sort nor a subset of the
    /// ignore-* flags.
    #[error("Invalid compare options: {bits:#x}")]
    InvalidCompareOptions { bits: u32 },

    /// Name longer than 128 characters.
    #[error("Name '{name}' is too long ({length} characters, maximum 128)")]
    NameTooLong { name: String, length: usize },

    /// Value does not match the descriptor kind or lies outside its range.
    #[error("Value of type {value_type} is not valid for {kind}")]
    InvalidType {
        kind: SqlKind,
        value_type: &'static str,
    },

    /// Runtime value type that is never accepted (unsigned integers, i8).
    #[error("Unsupported runtime data type: {type_name}")]
    UnsupportedRuntimeType { type_name: &'static str },

    /// A required argument was absent.
    #[error("Argument required: {argument}")]
    ArgumentRequired { argument: &'static str },

    /// Sort order and sort ordinal must be specified together.
    #[error("Sort order {order:?} and ordinal {ordinal} must be specified together")]
    SortOrderMismatch { order: SortOrder, ordinal: i32 },

    /// Multi-part type names have between one and three parts.
    #[error("Type name must have 1 to 3 parts, got {parts}")]
    InvalidTypeName { parts: usize },

    /// Record column index past the last column.
    #[error("Column index {index} out of range (record has {count} columns)")]
    ColumnIndexOutOfRange { index: usize, count: usize },

    /// No record column has the given name.
    #[error("Column '{name}' not found")]
    ColumnNotFound { name: String },
}

impl Error {
    /// Create an invalid type error.
    pub fn invalid_type(kind: SqlKind, value_type: &'static str) -> Self {
        Self::InvalidType { kind, value_type }
    }

    /// Create an argument required error.
    pub fn argument_required(argument: &'static str) -> Self {
        Self::ArgumentRequired { argument }
    }

    /// Create an unsupported runtime type error.
    pub fn unsupported_runtime_type(type_name: &'static str) -> Self {
        Self::UnsupportedRuntimeType { type_name }
    }

    /// Create a length out of range error.
    pub fn length_out_of_range(kind: SqlKind, length: i64) -> Self {
        Self::LengthOutOfRange { kind, length }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::length_out_of_range(SqlKind::NVarChar, 4001);
        assert_eq!(
            err.to_string(),
            "Specified length '4001' is out of range for nvarchar"
        );

        let err = Error::InvalidCompareOptions { bits: 0x4000 };
        assert_eq!(err.to_string(), "Invalid compare options: 0x4000");

        let err = Error::unsupported_runtime_type("UInt32");
        assert_eq!(err.to_string(), "Unsupported runtime data type: UInt32");
    }
}

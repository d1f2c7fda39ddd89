//! Error handling for form export and import.

use crate::record::ColumnType;

/// Errors raised by a record's attribute getters and setters
///
/// These belong to the record layer. Form operations pass them through
/// unchanged inside [`FormError::Attribute`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// The record has no attribute with this name
    #[error("Unknown attribute: {name}")]
    UnknownAttribute { name: String },

    /// The value cannot be stored in the attribute's Rust type
    #[error("Type mismatch for attribute {name}: expected {expected}, found {found}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl AttributeError {
    /// Create an unknown attribute error
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownAttribute { name: name.into() }
    }
}

/// A value that does not fit the Rust type it is being converted into
///
/// Produced by [`crate::AttributeValue::from_value`] before the attribute name
/// is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}

impl ValueMismatch {
    /// Attach the attribute name
    #[must_use]
    pub fn for_attribute(self, name: &str) -> AttributeError {
        AttributeError::TypeMismatch {
            name: name.to_string(),
            expected: self.expected,
            found: self.found,
        }
    }
}

/// Errors that can occur while building or applying forms
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A column type has no field kind and strict mode is on
    #[error("Unsupported field kind for column {column}: no mapping for type {column_type}")]
    UnsupportedFieldKind {
        column: String,
        column_type: ColumnType,
    },

    /// Submitted data names a key that is not an eligible column
    #[error("Unknown column in submitted data: {0}")]
    UnknownColumn(String),

    /// A submitted date/time value could not be turned into a timestamp
    #[error("Invalid timestamp for column {column}: {value}")]
    InvalidTimestamp { column: String, value: String },

    /// A submitted value has no scalar representation (array or object)
    #[error("Unsupported value for column {column}: only scalar values can be assigned")]
    UnsupportedValue { column: String },

    /// Failure reported by the record's getter or setter
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// The record schema is malformed
    #[error("Schema error: {0}")]
    Schema(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for form operations
pub type Result<T> = std::result::Result<T, FormError>;

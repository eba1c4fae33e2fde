//! Core error types for Streakwise.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use serde::Serialize;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic. A goal that is missing or owned by someone else is not
/// an error at this level; services report it as `None`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Database-agnostic error type for storage operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// A single field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid goal data")]
    Fields(Vec<FieldError>),
}

impl ValidationError {
    /// Field-level details for API responses.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            ValidationError::Fields(errors) => errors.clone(),
            ValidationError::MissingField(field) => {
                vec![FieldError::new(field.clone(), "Required")]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_per_variant() {
        let fields = ValidationError::Fields(vec![FieldError::new("title", "Title is required")]);
        assert_eq!(fields.field_errors()[0].field, "title");

        let missing = ValidationError::MissingField("id".to_string());
        assert_eq!(missing.field_errors(), vec![FieldError::new("id", "Required")]);

        assert!(ValidationError::InvalidInput("bad".to_string())
            .field_errors()
            .is_empty());
    }

    #[test]
    fn test_validation_converts_into_root_error() {
        let err: Error = ValidationError::MissingField("id".to_string()).into();
        assert!(matches!(err, Error::Validation(ValidationError::MissingField(_))));
        assert_eq!(
            err.to_string(),
            "Input validation failed: Required field 'id' is missing"
        );
    }
}

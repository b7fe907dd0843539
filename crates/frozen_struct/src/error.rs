//! Struct contract errors.
//!
//! # Responsibility
//! - Describe every way a caller can violate the struct contract.
//! - Let callers match one precise kind or treat all kinds uniformly.
//!
//! # Invariants
//! - Errors are returned to the caller, never logged or swallowed.
//! - Every error names the concrete type it was raised for.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StructResult<T> = Result<T, StructError>;

/// Specific failure kind of a [`StructError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructErrorKind {
    /// Construction input lacks one or more required fields.
    MissingField,
    /// A field name outside the effective field set was supplied or read.
    InvalidField,
    /// Write or delete attempted on a constructed instance.
    UnsupportedOperation,
}

/// Mutating operation rejected on an immutable instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    Set,
    Unset,
}

impl Mutation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Unset => "unset",
        }
    }
}

/// Base error for any struct contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructError {
    MissingField {
        type_name: &'static str,
        /// Missing names in effective field-set order.
        fields: Vec<String>,
    },
    InvalidField {
        type_name: &'static str,
        field: String,
    },
    UnsupportedOperation {
        type_name: &'static str,
        operation: Mutation,
        field: String,
    },
}

impl StructError {
    pub fn kind(&self) -> StructErrorKind {
        match self {
            Self::MissingField { .. } => StructErrorKind::MissingField,
            Self::InvalidField { .. } => StructErrorKind::InvalidField,
            Self::UnsupportedOperation { .. } => StructErrorKind::UnsupportedOperation,
        }
    }

    /// Diagnostic name of the concrete type the error was raised for.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::MissingField { type_name, .. }
            | Self::InvalidField { type_name, .. }
            | Self::UnsupportedOperation { type_name, .. } => *type_name,
        }
    }
}

impl Display for StructError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { type_name, fields } => {
                write!(f, "missing fields on {type_name}: {}", fields.join(","))
            }
            Self::InvalidField { type_name, field } => {
                write!(f, "field {field} not defined on {type_name}")
            }
            Self::UnsupportedOperation {
                type_name,
                operation,
                field,
            } => write!(
                f,
                "{} of field {field} on {type_name} is unsupported: struct is immutable",
                operation.as_str()
            ),
        }
    }
}

impl Error for StructError {}

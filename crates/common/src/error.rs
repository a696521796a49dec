//! Errors shared across the SML data model.

use thiserror::Error;

/// Errors raised by [`crate::LabelTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// A label name was bound twice within one load.
    #[error("label '{0}' is already defined")]
    Duplicate(String),

    /// A label name was looked up without ever being bound.
    #[error("label '{0}' has no associated address")]
    Undefined(String),
}

/// A token that does not name one of the fixed registers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a register name")]
pub struct RegisterParseError(pub String);

//! Runtime errors for the SML machine.
//!
//! These conditions can only be detected while a program runs. Every
//! variant carries the program-counter address (`at`) it was raised at.

use thiserror::Error;

/// Errors that abort a run. None are recoverable; all propagate out of
/// `execute()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A taken `jnz` named a label the program never bound. Targets are
    /// resolved only at the moment the jump is taken, so an untaken
    /// `jnz` to a missing label is not an error.
    #[error("undefined label '{name}' at address {at}")]
    UndefinedLabel { name: String, at: usize },

    /// `div` with a zero divisor.
    #[error("division by zero at address {at}")]
    DivisionByZero { at: usize },

    /// The output sink rejected a write from `out`.
    #[error("output write failed at address {at}: {message}")]
    Output { at: usize, message: String },
}

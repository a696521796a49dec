//! Error types for SML translation.

use thiserror::Error;

/// Errors produced while translating source text into a program.
///
/// All variants carry the 1-based source line they were raised on.
/// Per-line build failures (unknown opcode, malformed/missing/trailing
/// operands) are recoverable: the translator skips the line and records
/// the error as a diagnostic. `DuplicateLabel` aborts the whole load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// The line's opcode keyword has no registered builder.
    #[error("line {line}: unknown opcode '{opcode}'")]
    UnknownOpcode { line: usize, opcode: String },

    /// A token could not be converted to the operand kind the opcode
    /// declares at that position.
    #[error("line {line}: '{token}' is not a valid {expected}")]
    MalformedOperand {
        line: usize,
        token: String,
        expected: &'static str,
    },

    /// The line ended before the opcode's operand shape was satisfied.
    #[error("line {line}: {opcode} expects {expected} operand(s), found {found}")]
    MissingOperand {
        line: usize,
        opcode: &'static str,
        expected: usize,
        found: usize,
    },

    /// Tokens remained after the opcode's operand shape was satisfied.
    #[error("line {line}: unexpected trailing token '{token}'")]
    TrailingOperand { line: usize, token: String },

    /// A label name was bound on two different lines.
    #[error("line {line}: label '{label}' is already defined")]
    DuplicateLabel { line: usize, label: String },

    /// A registered builder received operands that do not match its
    /// declared shape. Indicates a registry entry bug, not bad input.
    #[error("opcode '{opcode}' builder was given operands outside its declared shape")]
    ShapeMismatch { opcode: &'static str },
}

impl AsmError {
    /// Whether the translator recovers from this error by skipping the
    /// offending line.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AsmError::DuplicateLabel { .. })
    }
}

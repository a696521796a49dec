//! SML common types: the data model shared by the translator and the
//! machine.
//!
//! This crate provides:
//!
//! - [`Register`] and [`RegisterFile`] — the fixed eight-register file
//! - [`LabelTable`] — symbolic jump addresses, insert-once
//! - [`Op`] / [`Instruction`] — the closed instruction set
//! - [`Program`] — the index-addressable instruction sequence
//! - [`LabelError`] — the label table's failure conditions
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime
//! cost) and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod label;
pub mod program;
pub mod register;

// Re-export commonly used types at the crate root.
pub use error::{LabelError, RegisterParseError};
pub use instruction::{Instruction, Op, Operand, OperandKind};
pub use label::LabelTable;
pub use program::Program;
pub use register::{Register, RegisterFile, ALL_REGISTERS};

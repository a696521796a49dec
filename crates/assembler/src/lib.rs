//! SML translator — turns `[label:] opcode operand...` source text into
//! a label table and an executable program.
//!
//! Construction is driven by the [`Registry`]: each opcode keyword maps
//! to an ordered operand shape and a builder function, so the
//! line-scanning [`Translator`] needs no per-opcode knowledge.
//!
//! # Usage
//!
//! ```
//! use sml_assembler::translate;
//!
//! let listing = translate("mov EAX 3\nout EAX\n").unwrap();
//! assert_eq!(listing.program.len(), 2);
//! assert!(listing.is_clean());
//! ```
//!
//! Lines whose opcode is unknown or whose operands do not convert are
//! skipped and reported in [`Listing::diagnostics`]; a duplicate label
//! aborts the load.

pub mod error;
pub mod registry;
pub mod translator;

pub use error::AsmError;
pub use registry::{BuildFn, OpcodeEntry, Registry};
pub use translator::{Listing, Translator};

/// Translate `source` with the built-in instruction set.
///
/// Shorthand for `Translator::new().translate(source)`.
///
/// # Errors
///
/// Returns [`AsmError::DuplicateLabel`] if a label is bound twice.
pub fn translate(source: &str) -> Result<Listing, AsmError> {
    Translator::new().translate(source)
}

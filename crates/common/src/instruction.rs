//! The instruction model: one variant per opcode, plus the operand kinds
//! the translator uses to drive construction.

use crate::register::Register;
use std::fmt;

/// The kind of operand an opcode position expects.
///
/// An opcode's operand shape is an ordered sequence of these; the
/// registry converts one raw token per kind when building an
/// instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// A register name (one of the fixed eight).
    Register,
    /// A signed 32-bit integer literal.
    Integer,
    /// A jump-target label, taken verbatim and resolved at jump time.
    Label,
}

/// A converted operand, ready for an instruction builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    Integer(i32),
    Label(String),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(r) => write!(f, "{r}"),
            Operand::Integer(n) => write!(f, "{n}"),
            Operand::Label(l) => write!(f, "{l}"),
        }
    }
}

/// The closed set of SML operations.
///
/// Arithmetic opcodes read-modify-write their destination register and
/// wrap on overflow. Execution semantics live in the vm crate's single
/// dispatch over this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// `dest <- value` (literal store).
    Mov { dest: Register, value: i32 },
    /// `dest <- dest + src`.
    Add { dest: Register, src: Register },
    /// `dest <- dest - src`.
    Sub { dest: Register, src: Register },
    /// `dest <- dest * src`.
    Mul { dest: Register, src: Register },
    /// `dest <- dest / src`, truncating toward zero. Division by zero is
    /// a runtime error.
    Div { dest: Register, src: Register },
    /// Write the value of `src` to the machine's output channel.
    Out { src: Register },
    /// Jump to `target` if the value of `src` is nonzero.
    Jnz { src: Register, target: String },
}

impl Op {
    /// The opcode keyword as written in source text.
    pub fn keyword(&self) -> &'static str {
        match self {
            Op::Mov { .. } => "mov",
            Op::Add { .. } => "add",
            Op::Sub { .. } => "sub",
            Op::Mul { .. } => "mul",
            Op::Div { .. } => "div",
            Op::Out { .. } => "out",
            Op::Jnz { .. } => "jnz",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Mov { dest, value } => write!(f, "mov {dest} {value}"),
            Op::Add { dest, src } => write!(f, "add {dest} {src}"),
            Op::Sub { dest, src } => write!(f, "sub {dest} {src}"),
            Op::Mul { dest, src } => write!(f, "mul {dest} {src}"),
            Op::Div { dest, src } => write!(f, "div {dest} {src}"),
            Op::Out { src } => write!(f, "out {src}"),
            Op::Jnz { src, target } => write!(f, "jnz {src} {target}"),
        }
    }
}

/// One program instruction: an operation plus the label bound to its own
/// address, if any.
///
/// The label is carried for display and round-tripping only; control
/// flow goes through the label table. Instructions are never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub label: Option<String>,
    pub op: Op,
}

impl Instruction {
    /// Create an instruction with an optional label.
    pub fn new(label: Option<String>, op: Op) -> Self {
        Self { label, op }
    }

    /// Create an unlabelled instruction.
    pub fn plain(op: Op) -> Self {
        Self { label: None, op }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{label}: ")?;
        }
        write!(f, "{}", self.op)
    }
}

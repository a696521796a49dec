//! The opcode registry: keyword → (operand shape, builder).
//!
//! This table is the translator's only knowledge of the instruction
//! set. Adding an opcode means adding an [`Op`] variant and registering
//! an entry here; the line-scanning code never changes.

use crate::error::AsmError;
use sml_common::{Instruction, Op, Operand, OperandKind, Register};
use std::collections::HashMap;

/// Builds an instruction from converted operands.
///
/// The registry guarantees the slice matches the entry's declared
/// shape in length and kinds; a builder that still sees a mismatch
/// reports [`AsmError::ShapeMismatch`].
pub type BuildFn = fn(Option<String>, &[Operand]) -> Result<Instruction, AsmError>;

/// One registered opcode: its keyword, its ordered operand shape, and
/// the builder that assembles the instruction.
#[derive(Clone, Copy)]
pub struct OpcodeEntry {
    pub keyword: &'static str,
    pub operands: &'static [OperandKind],
    pub build: BuildFn,
}

const REG_INT: &[OperandKind] = &[OperandKind::Register, OperandKind::Integer];
const REG_REG: &[OperandKind] = &[OperandKind::Register, OperandKind::Register];
const REG: &[OperandKind] = &[OperandKind::Register];
const REG_LABEL: &[OperandKind] = &[OperandKind::Register, OperandKind::Label];

/// The seven built-in opcodes.
const DEFAULT_OPCODES: [OpcodeEntry; 7] = [
    OpcodeEntry {
        keyword: "mov",
        operands: REG_INT,
        build: build_mov,
    },
    OpcodeEntry {
        keyword: "add",
        operands: REG_REG,
        build: build_add,
    },
    OpcodeEntry {
        keyword: "sub",
        operands: REG_REG,
        build: build_sub,
    },
    OpcodeEntry {
        keyword: "mul",
        operands: REG_REG,
        build: build_mul,
    },
    OpcodeEntry {
        keyword: "div",
        operands: REG_REG,
        build: build_div,
    },
    OpcodeEntry {
        keyword: "out",
        operands: REG,
        build: build_out,
    },
    OpcodeEntry {
        keyword: "jnz",
        operands: REG_LABEL,
        build: build_jnz,
    },
];

fn two_registers(operands: &[Operand], opcode: &'static str) -> Result<(Register, Register), AsmError> {
    match operands {
        [Operand::Register(dest), Operand::Register(src)] => Ok((*dest, *src)),
        _ => Err(AsmError::ShapeMismatch { opcode }),
    }
}

fn build_mov(label: Option<String>, operands: &[Operand]) -> Result<Instruction, AsmError> {
    match operands {
        [Operand::Register(dest), Operand::Integer(value)] => Ok(Instruction::new(
            label,
            Op::Mov {
                dest: *dest,
                value: *value,
            },
        )),
        _ => Err(AsmError::ShapeMismatch { opcode: "mov" }),
    }
}

fn build_add(label: Option<String>, operands: &[Operand]) -> Result<Instruction, AsmError> {
    let (dest, src) = two_registers(operands, "add")?;
    Ok(Instruction::new(label, Op::Add { dest, src }))
}

fn build_sub(label: Option<String>, operands: &[Operand]) -> Result<Instruction, AsmError> {
    let (dest, src) = two_registers(operands, "sub")?;
    Ok(Instruction::new(label, Op::Sub { dest, src }))
}

fn build_mul(label: Option<String>, operands: &[Operand]) -> Result<Instruction, AsmError> {
    let (dest, src) = two_registers(operands, "mul")?;
    Ok(Instruction::new(label, Op::Mul { dest, src }))
}

fn build_div(label: Option<String>, operands: &[Operand]) -> Result<Instruction, AsmError> {
    let (dest, src) = two_registers(operands, "div")?;
    Ok(Instruction::new(label, Op::Div { dest, src }))
}

fn build_out(label: Option<String>, operands: &[Operand]) -> Result<Instruction, AsmError> {
    match operands {
        [Operand::Register(src)] => Ok(Instruction::new(label, Op::Out { src: *src })),
        _ => Err(AsmError::ShapeMismatch { opcode: "out" }),
    }
}

fn build_jnz(label: Option<String>, operands: &[Operand]) -> Result<Instruction, AsmError> {
    match operands {
        [Operand::Register(src), Operand::Label(target)] => Ok(Instruction::new(
            label,
            Op::Jnz {
                src: *src,
                target: target.clone(),
            },
        )),
        _ => Err(AsmError::ShapeMismatch { opcode: "jnz" }),
    }
}

/// Lookup table from opcode keyword to operand shape and builder.
#[derive(Clone)]
pub struct Registry {
    entries: HashMap<&'static str, OpcodeEntry>,
}

impl Registry {
    /// An empty registry with no opcodes.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// A registry with the seven built-in opcodes registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for entry in DEFAULT_OPCODES {
            registry.register(entry);
        }
        registry
    }

    /// Register an opcode. Re-registering a keyword replaces the
    /// previous entry. Must happen before any load that uses it.
    pub fn register(&mut self, entry: OpcodeEntry) {
        self.entries.insert(entry.keyword, entry);
    }

    /// Look up the entry for `keyword`, if registered.
    pub fn lookup(&self, keyword: &str) -> Option<&OpcodeEntry> {
        self.entries.get(keyword)
    }

    /// Build the instruction for `keyword`, pulling exactly as many
    /// tokens from `tokens` as its operand shape requires.
    ///
    /// # Errors
    ///
    /// [`AsmError::UnknownOpcode`] if `keyword` is not registered;
    /// [`AsmError::MissingOperand`] if the token source runs dry;
    /// [`AsmError::MalformedOperand`] if a token does not convert to
    /// its declared kind.
    pub fn build<'a, I>(
        &self,
        line: usize,
        label: Option<&str>,
        keyword: &str,
        tokens: &mut I,
    ) -> Result<Instruction, AsmError>
    where
        I: Iterator<Item = &'a str>,
    {
        let entry = self.lookup(keyword).ok_or_else(|| AsmError::UnknownOpcode {
            line,
            opcode: keyword.to_string(),
        })?;

        let mut operands = Vec::with_capacity(entry.operands.len());
        for (found, kind) in entry.operands.iter().enumerate() {
            let token = tokens.next().ok_or(AsmError::MissingOperand {
                line,
                opcode: entry.keyword,
                expected: entry.operands.len(),
                found,
            })?;
            operands.push(convert(line, *kind, token)?);
        }

        (entry.build)(label.map(str::to_string), &operands)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Convert one raw token according to its declared operand kind.
///
/// Label tokens are taken verbatim; they resolve against the label
/// table at jump time, not here.
fn convert(line: usize, kind: OperandKind, token: &str) -> Result<Operand, AsmError> {
    match kind {
        OperandKind::Register => token
            .parse()
            .map(Operand::Register)
            .map_err(|_| AsmError::MalformedOperand {
                line,
                token: token.to_string(),
                expected: "register name",
            }),
        OperandKind::Integer => token
            .parse()
            .map(Operand::Integer)
            .map_err(|_| AsmError::MalformedOperand {
                line,
                token: token.to_string(),
                expected: "integer literal",
            }),
        OperandKind::Label => Ok(Operand::Label(token.to_string())),
    }
}

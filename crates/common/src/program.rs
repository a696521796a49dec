//! Program representation: an ordered, index-addressable instruction
//! sequence. The index of an instruction is the address labels bind to
//! and the program counter walks.

use crate::instruction::Instruction;
use std::fmt;

/// A loaded SML program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instruction, returning the address it was stored at.
    pub fn push(&mut self, instruction: Instruction) -> usize {
        self.instructions.push(instruction);
        self.instructions.len() - 1
    }

    /// Fetch the instruction at `address`, if it is in range.
    pub fn get(&self, address: usize) -> Option<&Instruction> {
        self.instructions.get(address)
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Remove every instruction.
    pub fn clear(&mut self) {
        self.instructions.clear();
    }

    /// Iterate instructions in address order.
    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Program {
    /// One instruction per line, in address order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{instruction}")?;
        }
        Ok(())
    }
}

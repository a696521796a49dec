//! The fixed register set and the register file that stores their values.

use crate::error::RegisterParseError;
use std::fmt;
use std::str::FromStr;

/// One of the eight named machine registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    EAX,
    EBX,
    ECX,
    EDX,
    ESP,
    EBP,
    ESI,
    EDI,
}

/// All registers, in declaration order. Index in this array = slot index
/// in the register file.
pub const ALL_REGISTERS: [Register; 8] = [
    Register::EAX,
    Register::EBX,
    Register::ECX,
    Register::EDX,
    Register::ESP,
    Register::EBP,
    Register::ESI,
    Register::EDI,
];

impl Register {
    /// Returns the register's source-text name.
    pub fn name(&self) -> &'static str {
        match self {
            Register::EAX => "EAX",
            Register::EBX => "EBX",
            Register::ECX => "ECX",
            Register::EDX => "EDX",
            Register::ESP => "ESP",
            Register::EBP => "EBP",
            Register::ESI => "ESI",
            Register::EDI => "EDI",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Register {
    type Err = RegisterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_REGISTERS
            .iter()
            .find(|r| r.name() == s)
            .copied()
            .ok_or_else(|| RegisterParseError(s.to_string()))
    }
}

/// The machine's register storage: one signed 32-bit slot per register.
///
/// Every register always holds a defined value; a fresh file reads 0
/// everywhere, and [`RegisterFile::clear`] returns it to that state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    values: [i32; ALL_REGISTERS.len()],
}

impl RegisterFile {
    /// Create a register file with every register set to 0.
    pub fn new() -> Self {
        Self {
            values: [0; ALL_REGISTERS.len()],
        }
    }

    /// Store `value` in `register`, replacing the previous value.
    pub fn set(&mut self, register: Register, value: i32) {
        self.values[register.slot()] = value;
    }

    /// Read the current value of `register`.
    pub fn get(&self, register: Register) -> i32 {
        self.values[register.slot()]
    }

    /// Reset every register to 0.
    pub fn clear(&mut self) {
        self.values = [0; ALL_REGISTERS.len()];
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, register) in ALL_REGISTERS.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", register, self.get(*register))?;
        }
        write!(f, "]")
    }
}

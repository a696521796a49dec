//! Machine state: register file, label table, program, program counter.

use crate::error::RuntimeError;
use crate::execute::Control;
use sml_common::{LabelTable, Program, Register, RegisterFile};
use std::fmt;
use std::io::{self, Write};

/// The SML machine.
///
/// Owns the register file, the loaded program with its label table, the
/// program counter, and the output sink `out` writes to. The machine is
/// the sole mutator of all of them during a run.
///
/// `W` is the output channel; [`Machine::new`] binds stdout, tests use
/// [`Machine::with_output`] to capture into a buffer.
pub struct Machine<W> {
    pub(crate) registers: RegisterFile,
    pub(crate) labels: LabelTable,
    pub(crate) program: Program,
    pub(crate) pc: usize,
    pub(crate) out: W,
}

impl Machine<io::Stdout> {
    /// A machine whose `out` instruction writes to stdout.
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Machine<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Machine<W> {
    /// A machine writing `out` values to the given sink.
    pub fn with_output(out: W) -> Self {
        Self {
            registers: RegisterFile::new(),
            labels: LabelTable::new(),
            program: Program::new(),
            pc: 0,
            out,
        }
    }

    /// Install a program and its label table, replacing any prior load.
    /// The program counter returns to 0.
    pub fn load(&mut self, labels: LabelTable, program: Program) {
        self.labels = labels;
        self.program = program;
        self.pc = 0;
    }

    /// Run the loaded program from address 0 to completion.
    ///
    /// Resets the program counter and clears every register first, then
    /// steps until the program counter runs off the end of the program.
    /// There is no halt instruction and no step limit; a program that
    /// never runs off the end never returns.
    ///
    /// # Errors
    ///
    /// Propagates the first [`RuntimeError`]; the machine stops at the
    /// faulting instruction.
    pub fn execute(&mut self) -> Result<(), RuntimeError> {
        self.pc = 0;
        self.registers.clear();
        while self.step()? {}
        Ok(())
    }

    /// Execute the single instruction at the current program counter.
    ///
    /// Returns `false` if the machine is halted (program counter at or
    /// past the end), `true` if an instruction ran. Unlike
    /// [`Machine::execute`] this does not reset any state, which lets a
    /// test harness drive a divergent program under an external step
    /// bound.
    pub fn step(&mut self) -> Result<bool, RuntimeError> {
        let Some(instruction) = self.program.get(self.pc) else {
            return Ok(false);
        };
        let op = instruction.op.clone();
        match self.dispatch(&op)? {
            Control::Advance => self.pc += 1,
            Control::Jump(address) => self.pc = address,
        }
        Ok(true)
    }

    /// Whether the program counter has run off the end of the program.
    pub fn halted(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Current program counter.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Read a register.
    pub fn get(&self, register: Register) -> i32 {
        self.registers.get(register)
    }

    /// Write a register. Intended for harness setup; `execute()` clears
    /// all registers before running.
    pub fn set(&mut self, register: Register, value: i32) {
        self.registers.set(register, value);
    }

    /// The loaded program.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// The loaded label table.
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// The register file.
    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// Consume the machine and return its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W> fmt::Display for Machine<W> {
    /// The loaded program listing, one instruction per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)
    }
}

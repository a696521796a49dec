//! Per-instruction semantics: the single dispatch over the closed
//! instruction set.

use crate::error::RuntimeError;
use crate::machine::Machine;
use sml_common::{Op, Register};
use std::io::Write;

/// What an executed instruction tells the fetch loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Advance to the next sequential address.
    Advance,
    /// Set the program counter to the given address.
    Jump(usize),
}

impl<W: Write> Machine<W> {
    /// Execute one operation against the machine state.
    ///
    /// Arithmetic wraps on overflow (fixed-width two's complement);
    /// `div` truncates toward zero and faults on a zero divisor; `jnz`
    /// resolves its target only when the jump is taken.
    pub(crate) fn dispatch(&mut self, op: &Op) -> Result<Control, RuntimeError> {
        match op {
            Op::Mov { dest, value } => {
                self.registers.set(*dest, *value);
                Ok(Control::Advance)
            }
            Op::Add { dest, src } => self.binary(*dest, *src, i32::wrapping_add),
            Op::Sub { dest, src } => self.binary(*dest, *src, i32::wrapping_sub),
            Op::Mul { dest, src } => self.binary(*dest, *src, i32::wrapping_mul),
            Op::Div { dest, src } => {
                let divisor = self.registers.get(*src);
                if divisor == 0 {
                    return Err(RuntimeError::DivisionByZero { at: self.pc });
                }
                // wrapping_div: i32::MIN / -1 wraps instead of panicking.
                self.binary(*dest, *src, i32::wrapping_div)
            }
            Op::Out { src } => {
                let value = self.registers.get(*src);
                writeln!(self.out, "{value}").map_err(|e| RuntimeError::Output {
                    at: self.pc,
                    message: e.to_string(),
                })?;
                Ok(Control::Advance)
            }
            Op::Jnz { src, target } => {
                if self.registers.get(*src) == 0 {
                    return Ok(Control::Advance);
                }
                let address =
                    self.labels
                        .address(target)
                        .map_err(|_| RuntimeError::UndefinedLabel {
                            name: target.clone(),
                            at: self.pc,
                        })?;
                Ok(Control::Jump(address))
            }
        }
    }

    /// Read-modify-write `dest` with the value of `src`.
    fn binary(
        &mut self,
        dest: Register,
        src: Register,
        apply: fn(i32, i32) -> i32,
    ) -> Result<Control, RuntimeError> {
        let result = apply(self.registers.get(dest), self.registers.get(src));
        self.registers.set(dest, result);
        Ok(Control::Advance)
    }
}

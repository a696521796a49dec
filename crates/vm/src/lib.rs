//! SML virtual machine — the fetch-execute engine.
//!
//! The machine owns a fixed eight-register file, the loaded program
//! with its label table, and a program counter. `execute()` resets the
//! registers, then fetches the instruction at the program counter and
//! dispatches it until the counter runs off the end of the program —
//! there is no halt instruction and no step limit.
//!
//! # Usage
//!
//! ```
//! use sml_common::{Instruction, LabelTable, Op, Program, Register};
//! use sml_vm::Machine;
//!
//! let mut program = Program::new();
//! program.push(Instruction::plain(Op::Mov { dest: Register::EAX, value: 3 }));
//! program.push(Instruction::plain(Op::Out { src: Register::EAX }));
//!
//! let mut machine = Machine::with_output(Vec::new());
//! machine.load(LabelTable::new(), program);
//! machine.execute().unwrap();
//! assert_eq!(machine.into_output(), b"3\n");
//! ```

pub mod error;
pub mod execute;
pub mod machine;

pub use error::RuntimeError;
pub use execute::Control;
pub use machine::Machine;

//! Integration tests for the SML machine: whole-program runs against
//! hand-built label tables and instruction sequences.

use proptest::prelude::*;
use sml_common::Register::{EAX, EBX, ECX};
use sml_common::{Instruction, LabelTable, Op, Program, Register};
use sml_vm::{Machine, RuntimeError};

// ============================================================
// Helpers
// ============================================================

fn mov(dest: Register, value: i32) -> Instruction {
    Instruction::plain(Op::Mov { dest, value })
}

fn add(dest: Register, src: Register) -> Instruction {
    Instruction::plain(Op::Add { dest, src })
}

fn sub(dest: Register, src: Register) -> Instruction {
    Instruction::plain(Op::Sub { dest, src })
}

fn div(dest: Register, src: Register) -> Instruction {
    Instruction::plain(Op::Div { dest, src })
}

fn out(src: Register) -> Instruction {
    Instruction::plain(Op::Out { src })
}

fn jnz(src: Register, target: &str) -> Instruction {
    Instruction::plain(Op::Jnz {
        src,
        target: target.to_string(),
    })
}

fn labelled(label: &str, instruction: Instruction) -> Instruction {
    Instruction::new(Some(label.to_string()), instruction.op)
}

/// Run a program to completion and return its captured output.
fn run(labels: LabelTable, instructions: Vec<Instruction>) -> Result<String, RuntimeError> {
    let mut machine = Machine::with_output(Vec::new());
    machine.load(labels, instructions.into_iter().collect::<Program>());
    machine.execute()?;
    Ok(String::from_utf8(machine.into_output()).unwrap())
}

fn run_plain(instructions: Vec<Instruction>) -> Result<String, RuntimeError> {
    run(LabelTable::new(), instructions)
}

// ============================================================
// Sequential execution
// ============================================================

#[test]
fn empty_program_halts_immediately() {
    assert_eq!(run_plain(vec![]).unwrap(), "");
}

#[test]
fn mov_then_out_prints_the_value() {
    let output = run_plain(vec![mov(EAX, 3), out(EAX)]).unwrap();
    assert_eq!(output, "3\n");
}

#[test]
fn out_values_appear_in_execution_order() {
    let output = run_plain(vec![
        mov(EAX, 1),
        out(EAX),
        mov(EAX, 2),
        out(EAX),
        mov(EAX, -3),
        out(EAX),
    ])
    .unwrap();
    assert_eq!(output, "1\n2\n-3\n");
}

#[test]
fn arithmetic_chain() {
    // (5 + 6) - 2 = 9
    let output = run_plain(vec![
        mov(EAX, 5),
        mov(EBX, 6),
        mov(ECX, 2),
        add(EAX, EBX),
        sub(EAX, ECX),
        out(EAX),
    ])
    .unwrap();
    assert_eq!(output, "9\n");
}

// ============================================================
// Control flow
// ============================================================

#[test]
fn countdown_loop_runs_until_register_zeroes() {
    // EAX = 3; loop: out EAX; EAX -= 1; jnz EAX loop
    let mut labels = LabelTable::new();
    labels.insert("loop", 2).unwrap();
    let output = run(
        labels,
        vec![
            mov(EAX, 3),
            mov(EBX, 1),
            labelled("loop", out(EAX)),
            sub(EAX, EBX),
            jnz(EAX, "loop"),
        ],
    )
    .unwrap();
    assert_eq!(output, "3\n2\n1\n");
}

#[test]
fn untaken_jnz_to_missing_label_is_fine() {
    let output = run_plain(vec![jnz(EAX, "nowhere"), mov(EAX, 1), out(EAX)]).unwrap();
    assert_eq!(output, "1\n");
}

#[test]
fn taken_jnz_to_missing_label_is_fatal() {
    let err = run_plain(vec![mov(EAX, 1), jnz(EAX, "nowhere")]).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::UndefinedLabel {
            name: "nowhere".to_string(),
            at: 1
        }
    );
}

#[test]
fn jump_past_the_end_halts_at_next_fetch() {
    let mut labels = LabelTable::new();
    labels.insert("end", 99).unwrap();
    let output = run(
        labels,
        vec![mov(EAX, 1), jnz(EAX, "end"), out(EAX)],
    )
    .unwrap();
    // The out at address 2 is skipped by the jump off the end.
    assert_eq!(output, "");
}

#[test]
fn divergent_program_is_still_running_after_a_large_step_bound() {
    // l: jnz EAX l — with EAX pre-set nonzero this spins forever, so
    // the bound lives in the harness, never in the engine.
    let mut labels = LabelTable::new();
    labels.insert("l", 0).unwrap();
    let mut machine = Machine::with_output(Vec::new());
    machine.load(
        labels,
        vec![labelled("l", jnz(EAX, "l"))].into_iter().collect(),
    );
    machine.set(EAX, 1);
    for _ in 0..10_000 {
        assert!(machine.step().unwrap());
    }
    assert!(!machine.halted());
    assert_eq!(machine.pc(), 0);
}

// ============================================================
// Faults
// ============================================================

#[test]
fn division_by_zero_propagates_with_its_address() {
    let err = run_plain(vec![mov(EAX, 6), div(EAX, EBX)]).unwrap_err();
    assert_eq!(err, RuntimeError::DivisionByZero { at: 1 });
}

#[test]
fn fault_stops_the_run_before_later_output() {
    let err = run_plain(vec![mov(EAX, 1), div(EAX, EBX), out(EAX)]).unwrap_err();
    assert_eq!(err, RuntimeError::DivisionByZero { at: 1 });
}

// ============================================================
// Re-execution
// ============================================================

#[test]
fn execute_twice_gives_identical_output() {
    let mut machine = Machine::with_output(Vec::new());
    machine.load(
        LabelTable::new(),
        vec![mov(EAX, 7), out(EAX)].into_iter().collect(),
    );
    machine.execute().unwrap();
    machine.execute().unwrap();
    assert_eq!(machine.into_output(), b"7\n7\n");
}

#[test]
fn execute_resets_registers_between_runs() {
    // First run leaves EAX = 11; the second starts from zero again.
    let mut machine = Machine::with_output(Vec::new());
    machine.load(
        LabelTable::new(),
        vec![mov(EBX, 11), add(EAX, EBX), out(EAX)].into_iter().collect(),
    );
    machine.execute().unwrap();
    machine.execute().unwrap();
    assert_eq!(machine.into_output(), b"11\n11\n");
}

// ============================================================
// Arithmetic properties
// ============================================================

proptest! {
    /// add/sub/mul agree with wrapping i32 arithmetic for all inputs.
    #[test]
    fn binary_ops_match_wrapping_semantics(a in any::<i32>(), b in any::<i32>()) {
        let output = run_plain(vec![
            mov(EAX, a),
            mov(EBX, b),
            add(EAX, EBX),
            out(EAX),
        ]).unwrap();
        prop_assert_eq!(output, format!("{}\n", a.wrapping_add(b)));

        let output = run_plain(vec![
            mov(EAX, a),
            mov(EBX, b),
            sub(EAX, EBX),
            out(EAX),
        ]).unwrap();
        prop_assert_eq!(output, format!("{}\n", a.wrapping_sub(b)));
    }

    /// div matches Rust's truncating division whenever the divisor is
    /// nonzero, and always faults when it is zero.
    #[test]
    fn div_matches_truncating_division(a in any::<i32>(), b in any::<i32>()) {
        let result = run_plain(vec![
            mov(EAX, a),
            mov(EBX, b),
            div(EAX, EBX),
            out(EAX),
        ]);
        if b == 0 {
            prop_assert_eq!(result, Err(RuntimeError::DivisionByZero { at: 2 }));
        } else {
            prop_assert_eq!(result.unwrap(), format!("{}\n", a.wrapping_div(b)));
        }
    }
}

//! CLI command implementations.

use sml_assembler::Listing;
use sml_vm::Machine;
use std::fs;

/// Translate and execute a .sml source file.
pub fn run(args: &[String]) -> Result<(), i32> {
    let listing = translate_file(args, "run")?;
    report_skipped(&listing);

    let mut machine = Machine::new();
    machine.load(listing.labels, listing.program);
    machine.execute().map_err(|e| {
        eprintln!("runtime error: {e}");
        2
    })
}

/// Translate a .sml source file without running it.
pub fn check(args: &[String]) -> Result<(), i32> {
    let listing = translate_file(args, "check")?;
    report_skipped(&listing);
    eprintln!(
        "translated {} instruction(s), {} label(s)",
        listing.program.len(),
        listing.labels.len()
    );
    if listing.is_clean() {
        Ok(())
    } else {
        Err(1)
    }
}

/// Translate a .sml source file and print its canonical listing.
pub fn listing(args: &[String]) -> Result<(), i32> {
    let listing = translate_file(args, "listing")?;
    report_skipped(&listing);
    if !listing.program.is_empty() {
        println!("{}", listing.program);
    }
    if !listing.labels.is_empty() {
        println!("labels: {}", listing.labels);
    }
    Ok(())
}

fn translate_file(args: &[String], command: &str) -> Result<Listing, i32> {
    if args.is_empty() {
        eprintln!("error: {command} requires an input file");
        eprintln!("Usage: sml {command} <input.sml>");
        return Err(1);
    }

    let input = &args[0];
    let source = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        1
    })?;

    sml_assembler::translate(&source).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}

fn report_skipped(listing: &Listing) {
    for diagnostic in &listing.diagnostics {
        eprintln!("warning: {diagnostic} (line skipped)");
    }
}

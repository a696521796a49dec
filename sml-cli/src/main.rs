//! SML CLI — translate, inspect, and run SML source files.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/translation error (including skipped lines under `check`)
//! - 2: Runtime error

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "check" => commands::check(&args[2..]),
        "listing" => commands::listing(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: sml <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <input.sml>       Translate and execute a program");
    eprintln!("  check <input.sml>     Translate only, reporting skipped lines");
    eprintln!("  listing <input.sml>   Print the translated program and labels");
}

//! Thin binary entry point for the jetkit CLI.
//!
//! All user-facing concerns live in `cli/`: argument parsing (`setup.rs`),
//! dispatch (`commands.rs`) and terminal styling (`styles.rs`). This file
//! only runs the CLI and turns an error into a styled message plus a
//! non-zero exit.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {e:#}", cli::styles::ERROR.apply_to("Error:"));
        std::process::exit(1);
    }
}

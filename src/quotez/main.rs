//! # Quotez CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument
//! parsing, logging setup, the interactive shell and all terminal output.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jsontable_core` linkage.
//! - Print a deterministic summary of a loaded document for quick local
//!   sanity checks.

use std::process::ExitCode;

fn main() -> ExitCode {
    println!("jsontable_core version={}", jsontable_core::core_version());

    let Some(path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match jsontable_core::load_document(&path) {
        Ok(set) => {
            println!(
                "shape={} records={} columns={}",
                set.shape().as_str(),
                set.len(),
                set.columns().len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to load `{path}`: {err}");
            ExitCode::FAILURE
        }
    }
}

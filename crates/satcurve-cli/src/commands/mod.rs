//! Command implementations.

pub mod generate;
pub mod inspect;

pub use generate::GenerateArgs;
pub use inspect::InspectArgs;

use std::io::Read;

use anyhow::Context;
use colored::Colorize;

/// Reads the input table from a file path, or from stdin when the path
/// is `-`.
pub(crate) fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading table from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading table from '{path}'"))
    }
}

/// Prints one non-fatal finding to stderr.
pub(crate) fn print_warning(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

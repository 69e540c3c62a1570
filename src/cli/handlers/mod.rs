//! Command handlers for the CLI.

mod check;
mod completions;
mod export;

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{Output, OutputFormat};

pub use check::handle_check;
pub use completions::handle_completions;
pub use export::handle_export;

/// Prints a result in the requested format.
///
/// `paths` are printed one per line for `OutputFormat::Paths`.
pub(crate) fn print_result<T: Serialize>(
    format: OutputFormat,
    data: T,
    human_message: &str,
    paths: &[String],
) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{human_message}"),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(data))?);
        }
        OutputFormat::Paths => {
            for path in paths {
                println!("{path}");
            }
        }
    }
    Ok(())
}

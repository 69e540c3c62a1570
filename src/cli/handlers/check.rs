//! Check command handler.

use std::path::Path;

use anyhow::{Result, bail};

use crate::cli::CheckArgs;
use crate::cli::output::ConverterReport;
use crate::convert::{find_pandoc, pandoc_version};

use super::print_result;

pub fn handle_check(args: &CheckArgs, pandoc: Option<&Path>) -> Result<()> {
    let Some(path) = find_pandoc(pandoc) else {
        bail!("Pandoc not found. Install pandoc or set pandoc_path in the config file.");
    };

    let version = pandoc_version(&path);
    let display = path.display().to_string();
    let message = match &version {
        Some(version) => format!("pandoc: {display} ({version})"),
        None => format!("pandoc: {display}"),
    };

    print_result(
        args.format,
        ConverterReport {
            path: display.clone(),
            version,
        },
        &message,
        &[display],
    )
}

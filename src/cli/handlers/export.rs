//! Handler for the `export` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::cli::ExportArgs;
use crate::cli::config::Config;
use crate::cli::output::ExportSummary;
use crate::convert::{PandocConverter, find_pandoc};
use crate::domain::StyleConfig;
use crate::export::{ExportOptions, NoteInput, PREAMBLE_INPUT_NAME, export_folder, export_note};
use crate::infra::{FOLDER_STYLE_FILE, Vault, list_folder_notes, load_style, read_text, write_output};

use super::print_result;

/// Handle the `export` command.
pub fn handle_export(
    args: &ExportArgs,
    vault_dir: &Path,
    config: &Config,
    pandoc: Option<&Path>,
) -> Result<()> {
    let target = &args.path;
    let is_folder = target.is_dir();

    if !is_folder {
        if !target.is_file() {
            bail!("Note not found: {}", target.display());
        }
        if !has_md_extension(target) {
            bail!("Not a Markdown file: {}", target.display());
        }
    }

    let Some(pandoc_path) = find_pandoc(pandoc) else {
        bail!("Pandoc not found. Install pandoc or set pandoc_path in the config file.");
    };
    tracing::info!("using pandoc at {}", pandoc_path.display());
    let converter = PandocConverter::new(pandoc_path);
    let vault = Vault::new(vault_dir);

    let summary = if is_folder {
        export_folder_target(args, target, &vault, config, &converter)?
    } else {
        export_note_target(args, target, &vault, config, &converter)?
    };

    for warning in &summary.warnings {
        tracing::warn!("{warning}");
    }

    let message = match summary.warnings.len() {
        0 => format!("Exported to {}", summary.path),
        count => format!(
            "Exported to {} with {count} warning(s); see log for details",
            summary.path
        ),
    };
    let paths = summary.files.clone();
    print_result(args.format, summary, &message, &paths)
}

fn export_note_target(
    args: &ExportArgs,
    note_path: &Path,
    vault: &Vault,
    config: &Config,
    converter: &PandocConverter,
) -> Result<ExportSummary> {
    let mut style = base_style(args.style.as_deref(), None);
    if style.preamble.is_empty() {
        if let Some(preamble) = config.default_preamble() {
            style.preamble = preamble.to_string();
        }
    }

    let content = read_text(note_path)?;
    let origin_dir = parent_dir(note_path);
    let resolver = vault.resolver(&origin_dir, Some(note_path));
    let preamble_loader = vault.preamble_loader(&origin_dir);
    let options = ExportOptions {
        style,
        resolver: &resolver,
        preamble_loader: &preamble_loader,
        converter,
    };

    let result = export_note(&content, &options)
        .with_context(|| format!("failed to export {}", note_path.display()))?;

    let output_path = match &args.output {
        Some(path) => path.clone(),
        None => config
            .export_dir(vault.root())
            .join(format!("{}.tex", file_stem(note_path)?)),
    };
    write_output(&output_path, &result.latex)?;
    tracing::info!("wrote {}", output_path.display());

    let path = output_path.display().to_string();
    Ok(ExportSummary {
        files: vec![path.clone()],
        path,
        warnings: result.warnings,
    })
}

fn export_folder_target(
    args: &ExportArgs,
    folder: &Path,
    vault: &Vault,
    config: &Config,
    converter: &PandocConverter,
) -> Result<ExportSummary> {
    let note_paths = list_folder_notes(folder)?;
    if note_paths.is_empty() {
        bail!("No Markdown files in folder: {}", folder.display());
    }

    let mut style = base_style(args.style.as_deref(), Some(folder));
    if style.preamble.is_empty() {
        let folder_preamble = format!("{PREAMBLE_INPUT_NAME}.tex");
        if folder.join(&folder_preamble).is_file() {
            style.preamble = format!("./{folder_preamble}");
        } else if let Some(preamble) = config.default_preamble() {
            style.preamble = preamble.to_string();
        }
    }

    let mut inputs = Vec::with_capacity(note_paths.len());
    for path in &note_paths {
        inputs.push(NoteInput::new(file_stem(path)?, read_text(path)?));
    }

    let resolver = vault.resolver(folder, None);
    let preamble_loader = vault.preamble_loader(folder);
    let options = ExportOptions {
        style,
        resolver: &resolver,
        preamble_loader: &preamble_loader,
        converter,
    };

    let result = export_folder(inputs, &options)
        .with_context(|| format!("failed to export {}", folder.display()))?;

    let output_dir = match &args.output {
        Some(path) => path.clone(),
        None => config.export_dir(vault.root()).join(folder_name(folder)?),
    };
    let main_path = result.write_to(&output_dir)?;

    let mut files = vec![main_path.display().to_string()];
    if !result.preamble.is_empty() {
        files.push(output_dir.join(format!("{PREAMBLE_INPUT_NAME}.tex")).display().to_string());
    }
    files.extend(
        result
            .files
            .iter()
            .map(|file| output_dir.join(format!("{}.tex", file.name)).display().to_string()),
    );

    Ok(ExportSummary {
        path: main_path.display().to_string(),
        files,
        warnings: result.warnings,
    })
}

/// Picks the base style: `--style`, then the folder's style file, then defaults.
fn base_style(style_flag: Option<&Path>, folder: Option<&Path>) -> StyleConfig {
    if let Some(path) = style_flag {
        return load_style(path);
    }

    match folder.map(|dir| dir.join(FOLDER_STYLE_FILE)) {
        Some(path) if path.is_file() => load_style(&path),
        _ => StyleConfig::default(),
    }
}

fn has_md_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .with_context(|| format!("invalid file name: {}", path.display()))
}

/// The folder's own name, resolving `.` and `..` first.
fn folder_name(folder: &Path) -> Result<String> {
    let resolved = folder
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", folder.display()))?;
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("folder has no name: {}", folder.display()))
}

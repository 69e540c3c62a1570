//! Vault-backed link resolution and preamble loading.

use std::path::{Path, PathBuf};

use crate::export::{PreambleError, PreambleLoader};
use crate::infra::fs::{read_text, scan_markdown_files};
use crate::preprocess::NoteResolver;

/// A directory of markdown notes that link targets resolve against.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Finds the note file a link target names.
    ///
    /// A target containing `/` is a path from the vault root. Otherwise the
    /// note is matched by file stem (case-insensitively), preferring a note in
    /// `origin_dir`, then the shallowest match, then lexical order. A trailing
    /// `.md` on the target is optional.
    pub fn find_note(&self, target: &str, origin_dir: &Path) -> Option<PathBuf> {
        let target = target.trim();
        let target = target.strip_suffix(".md").unwrap_or(target);
        if target.is_empty() {
            return None;
        }

        if target.contains('/') {
            let path = self.root.join(format!("{target}.md"));
            return path.is_file().then_some(path);
        }

        let wanted = target.to_lowercase();
        let origin = normalize(origin_dir);

        let mut candidates: Vec<PathBuf> = scan_markdown_files(&self.root)
            .ok()?
            .filter(|rel| {
                rel.file_stem()
                    .and_then(|s| s.to_str())
                    .is_some_and(|stem| stem.to_lowercase() == wanted)
            })
            .collect();

        candidates.sort_by_key(|rel| {
            let in_origin = self
                .root
                .join(rel)
                .parent()
                .is_some_and(|parent| normalize(parent) == origin);
            (!in_origin, rel.components().count(), rel.clone())
        });

        candidates.into_iter().next().map(|rel| self.root.join(rel))
    }

    /// Creates a note resolver for one export.
    ///
    /// `current_note` is what an empty target (a same-document embed)
    /// resolves to.
    pub fn resolver(&self, origin_dir: &Path, current_note: Option<&Path>) -> VaultResolver<'_> {
        VaultResolver {
            vault: self,
            origin_dir: origin_dir.to_path_buf(),
            current_note: current_note.map(Path::to_path_buf),
        }
    }

    /// Creates a preamble loader that resolves `./` paths against `base_dir`.
    pub fn preamble_loader(&self, base_dir: &Path) -> VaultPreambleLoader<'_> {
        VaultPreambleLoader {
            vault: self,
            base_dir: base_dir.to_path_buf(),
        }
    }
}

/// Resolves embed targets to note text within a vault.
#[derive(Debug)]
pub struct VaultResolver<'a> {
    vault: &'a Vault,
    origin_dir: PathBuf,
    current_note: Option<PathBuf>,
}

impl NoteResolver for VaultResolver<'_> {
    fn resolve(&self, target: &str) -> Option<String> {
        let path = if target.trim().is_empty() {
            self.current_note.clone()?
        } else {
            self.vault.find_note(target, &self.origin_dir)?
        };

        match read_text(&path) {
            Ok(content) => Some(content),
            Err(err) => {
                tracing::debug!("could not read embed target {}: {err}", path.display());
                None
            }
        }
    }
}

/// Loads preamble files relative to an export's base folder or the vault root.
#[derive(Debug)]
pub struct VaultPreambleLoader<'a> {
    vault: &'a Vault,
    base_dir: PathBuf,
}

impl VaultPreambleLoader<'_> {
    fn locate(&self, path: &str) -> PathBuf {
        if let Some(relative) = path.strip_prefix("./") {
            self.base_dir.join(relative)
        } else if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.vault.root.join(path)
        }
    }
}

impl PreambleLoader for VaultPreambleLoader<'_> {
    fn load(&self, path: &str) -> Result<String, PreambleError> {
        let located = self.locate(path);
        if !located.is_file() {
            return Err(PreambleError::NotFound {
                path: path.to_string(),
            });
        }

        read_text(&located).map_err(|source| PreambleError::Read {
            path: path.to_string(),
            source,
        })
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

//! Isolated test environment with a temp vault and a stub converter.

use super::{NotetexCommand, TestNote};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Shell script standing in for pandoc.
///
/// Answers `--version`, fails on input containing `FAIL_CONVERSION`, and
/// otherwise echoes its input unchanged.
const STUB_PANDOC: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "pandoc 3.1.9"
    exit 0
fi
input=$(cat)
case "$input" in
    *FAIL_CONVERSION*)
        echo "stub pandoc: cannot convert" >&2
        exit 1
        ;;
esac
printf '%s\n' "$input"
"#;

/// Isolated test environment.
///
/// Layout inside the temp directory:
/// - `vault/`  notes, the `--dir` of every command
/// - `config/` used as the config home so no user config leaks in
/// - `bin/pandoc` the stub converter
pub struct TestEnv {
    _temp_dir: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        for dir in ["vault", "config", "bin"] {
            std::fs::create_dir_all(root.join(dir)).expect("Failed to create directory");
        }

        let env = Self {
            _temp_dir: temp_dir,
            root,
        };
        env.install_stub_pandoc();
        env
    }

    /// Returns the vault directory.
    pub fn vault_dir(&self) -> PathBuf {
        self.root.join("vault")
    }

    /// Returns the directory used as the config home.
    pub fn config_home(&self) -> PathBuf {
        self.root.join("config")
    }

    /// Returns the stub converter's path.
    pub fn pandoc_path(&self) -> PathBuf {
        self.root.join("bin").join("pandoc")
    }

    /// Default export folder for this vault.
    pub fn export_dir(&self) -> PathBuf {
        self.vault_dir().join("latex-exports")
    }

    /// Writes a note at `rel_path` inside the vault.
    pub fn add_note(&self, rel_path: &str, note: &TestNote) -> PathBuf {
        self.write_file(rel_path, &note.to_markdown())
    }

    /// Writes any file inside the vault, creating parent folders.
    pub fn write_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.vault_dir().join(rel_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes `notetex/config.toml` under the config home.
    pub fn write_config(&self, toml: &str) {
        let dir = self.config_home().join("notetex");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        std::fs::write(dir.join("config.toml"), toml).expect("Failed to write config");
    }

    /// Reads a file inside the vault.
    pub fn read(&self, rel_path: &str) -> String {
        let path = self.vault_dir().join(rel_path);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Creates a command configured for this environment.
    pub fn cmd(&self) -> NotetexCommand {
        NotetexCommand::new()
            .config_home(&self.config_home())
            .dir(&self.vault_dir())
            .pandoc(&self.pandoc_path())
    }

    fn install_stub_pandoc(&self) {
        let path = self.pandoc_path();
        std::fs::write(&path, STUB_PANDOC).expect("Failed to write stub pandoc");
        make_executable(&path);
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark stub executable");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_layout() {
        let env = TestEnv::new();
        assert!(env.vault_dir().is_dir());
        assert!(env.config_home().is_dir());
        assert!(env.pandoc_path().is_file());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.vault_dir()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_in_subfolder() {
        let env = TestEnv::new();
        let path = env.add_note("Book/intro.md", &TestNote::new("Hello"));

        assert!(path.is_file());
        assert_eq!(env.read("Book/intro.md"), "Hello");
    }

    #[test]
    fn test_env_command_targets_vault() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.vault_dir().to_string_lossy());
        assert_eq!(args[2], "--pandoc");
    }
}

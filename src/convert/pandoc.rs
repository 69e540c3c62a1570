//! Pandoc as the converter backend.
//!
//! Discovery order:
//! 1. An explicitly configured path
//! 2. `pandoc` on `PATH` via `which`
//! 3. Common install locations

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::{ConvertError, ConvertOptions, Converter};

/// Install locations probed when nothing on `PATH` works.
pub const COMMON_PANDOC_PATHS: &[&str] = &[
    "/usr/local/bin/pandoc",
    "/opt/homebrew/bin/pandoc",
    "/usr/bin/pandoc",
];

/// Runs a Pandoc binary once per conversion, text over stdin/stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PandocConverter {
    path: PathBuf,
}

impl PandocConverter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn args(options: &ConvertOptions) -> Vec<String> {
        let mut args: Vec<String> = ["-f", "markdown", "-t", "latex", "--wrap=preserve"]
            .iter()
            .map(|arg| arg.to_string())
            .collect();

        if options.standalone {
            args.push("-s".to_string());
            if let Some(class) = &options.document_class {
                args.push("-V".to_string());
                args.push(format!("documentclass={class}"));
            }
        }

        args
    }
}

impl Converter for PandocConverter {
    fn convert(&self, markdown: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
        tracing::debug!(path = %self.path.display(), bytes = markdown.len(), "running pandoc");

        let mut child = Command::new(&self.path)
            .args(Self::args(options))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ConvertError::Spawn {
                path: self.path.clone(),
                source,
            })?;

        // Feed stdin from a separate thread so a full stdout pipe cannot stall us.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = markdown.to_owned();
            std::thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child
            .wait_with_output()
            .map_err(|source| ConvertError::Spawn {
                path: self.path.clone(),
                source,
            })?;

        if let Some(handle) = writer {
            let written = handle
                .join()
                .map_err(|_| ConvertError::Other("converter input thread panicked".to_string()))?;
            // A converter that exits early closes its stdin; report its status instead.
            if let Err(source) = written {
                if output.status.success() {
                    return Err(ConvertError::Input {
                        path: self.path.clone(),
                        source,
                    });
                }
            }
        }

        if !output.status.success() {
            return Err(ConvertError::Failed {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| ConvertError::InvalidOutput)
    }
}

/// Whether `path` runs and answers `--version` successfully.
pub fn is_pandoc_available(path: &Path) -> bool {
    Command::new(path)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Locates a working Pandoc binary.
pub fn find_pandoc(custom: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = custom.filter(|p| !p.as_os_str().is_empty()) {
        if is_pandoc_available(path) {
            return Some(path.to_path_buf());
        }
        tracing::debug!(path = %path.display(), "configured pandoc is not usable");
    }

    if let Ok(path) = which::which("pandoc") {
        if is_pandoc_available(&path) {
            return Some(path);
        }
    }

    COMMON_PANDOC_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| is_pandoc_available(path))
}

/// First line of `--version` output, e.g. `pandoc 3.1.9`.
pub fn pandoc_version(path: &Path) -> Option<String> {
    let output = Command::new(path)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout.lines().next().map(|line| line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fragment_arguments() {
        assert_eq!(
            PandocConverter::args(&ConvertOptions::fragment()),
            vec!["-f", "markdown", "-t", "latex", "--wrap=preserve"]
        );
    }

    #[test]
    fn standalone_arguments_carry_class() {
        let options = ConvertOptions {
            standalone: true,
            document_class: Some("book".to_string()),
        };
        let args = PandocConverter::args(&options);
        assert_eq!(&args[5..], ["-s", "-V", "documentclass=book"]);
    }

    #[test]
    fn class_ignored_without_standalone() {
        let options = ConvertOptions {
            standalone: false,
            document_class: Some("book".to_string()),
        };
        assert_eq!(PandocConverter::args(&options).len(), 5);
    }

    #[test]
    fn missing_binary_is_unavailable() {
        let missing = Path::new("/nonexistent/notetex/pandoc");
        assert!(!is_pandoc_available(missing));
        assert_eq!(pandoc_version(missing), None);
    }

    #[test]
    fn missing_binary_fails_to_spawn() {
        let converter = PandocConverter::new("/nonexistent/notetex/pandoc");
        let err = converter
            .convert("text", &ConvertOptions::fragment())
            .unwrap_err();
        assert!(matches!(err, ConvertError::Spawn { .. }));
    }

    #[cfg(unix)]
    mod with_stub {
        use super::*;
        use pretty_assertions::assert_eq;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn stub(dir: &TempDir, body: &str) -> PathBuf {
            let path = dir.path().join("pandoc");
            std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn converts_through_stdin_and_stdout() {
            let dir = TempDir::new().unwrap();
            let path = stub(&dir, "tr a-z A-Z");

            let output = PandocConverter::new(&path)
                .convert("hello", &ConvertOptions::fragment())
                .unwrap();

            assert_eq!(output, "HELLO");
        }

        #[test]
        fn non_zero_exit_reports_stderr() {
            let dir = TempDir::new().unwrap();
            let path = stub(&dir, "cat >/dev/null\necho 'bad input' >&2\nexit 3");

            let err = PandocConverter::new(&path)
                .convert("x", &ConvertOptions::fragment())
                .unwrap_err();

            match err {
                ConvertError::Failed { code, stderr } => {
                    assert_eq!(code, 3);
                    assert_eq!(stderr, "bad input");
                }
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn custom_path_wins_and_reports_version() {
            let dir = TempDir::new().unwrap();
            let path = stub(&dir, "echo 'pandoc 3.1.9'\necho 'Features: +server'");

            assert_eq!(find_pandoc(Some(&path)), Some(path.clone()));
            assert_eq!(pandoc_version(&path), Some("pandoc 3.1.9".to_string()));
        }
    }
}

//! File I/O, frontmatter parsing, vault lookups

mod frontmatter;
mod fs;
mod style_file;
mod vault;

pub use frontmatter::{SplitNote, extract_frontmatter, parse_frontmatter_override};
pub use fs::{FsError, list_folder_notes, read_text, scan_markdown_files, write_output};
pub use style_file::{FOLDER_STYLE_FILE, load_style};
pub use vault::{Vault, VaultPreambleLoader, VaultResolver};

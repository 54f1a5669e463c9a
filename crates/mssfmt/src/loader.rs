//! Reading scripts from disk.

use std::fs;
use std::path::{Path, PathBuf};

use mssfmt_core::{parse_script, ParsedScript, WordStream};
use tracing::debug;

use crate::error::{CliError, Result};

/// A script loaded into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// Display name used in diagnostics, the file name.
    pub name: String,
    /// Where the script was read from.
    pub path: PathBuf,
    /// The script text, byte-order mark included.
    pub content: String,
}

impl Script {
    /// Scans the script into words.
    #[must_use]
    pub fn scan(&self) -> WordStream {
        WordStream::scan(self.name.as_str(), self.content.as_str())
    }

    /// Scans the script and parses its SELECT statements.
    #[must_use]
    pub fn parse(&self) -> ParsedScript {
        parse_script(self.name.as_str(), self.content.as_str())
    }
}

/// Reads the script at `path`.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be read and
/// [`CliError::InvalidUtf8`] if it is not UTF-8.
pub fn load_script(path: impl AsRef<Path>) -> Result<Script> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|_| CliError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    debug!(name = %name, bytes = content.len(), "loaded script");

    Ok(Script {
        name,
        path: path.to_path_buf(),
        content,
    })
}

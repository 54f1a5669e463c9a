//! Machine-readable parse results.

use mssfmt_core::{ParsedScript, SelectQuery};
use serde::Serialize;

/// JSON document printed by `mssfmt parse --json`.
#[derive(Debug, Serialize)]
pub struct ParseReport<'a> {
    /// Script display name.
    pub name: &'a str,
    /// Parsed SELECT statements.
    pub queries: &'a [SelectQuery],
    /// Diagnostics, rendered as `file:line:col: message`.
    pub diagnostics: Vec<String>,
}

impl<'a> ParseReport<'a> {
    /// Builds a report over a parsed script.
    #[must_use]
    pub fn new(script: &'a ParsedScript) -> Self {
        Self {
            name: script.words.name(),
            queries: &script.queries,
            diagnostics: script.diagnostics.iter().map(ToString::to_string).collect(),
        }
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

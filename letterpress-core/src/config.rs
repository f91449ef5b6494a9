//! Editor configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::{EditorError, EditorResult};

/// Default maximum length, in characters, of a segment promoted to heading.
pub const DEFAULT_HEADING_MAX_CHARS: usize = 100;

/// Tuning for the text import heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportConfig {
    /// A segment becomes a heading only if strictly shorter than this,
    /// counting any leading `#` marks.
    pub heading_max_chars: usize,
    /// Only the first non-empty segment may become a heading. When false,
    /// later short segments starting with `#` are headings too.
    pub heading_from_first_segment_only: bool,
    /// Append a default button after the imported segments.
    pub append_call_to_action: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            heading_max_chars: DEFAULT_HEADING_MAX_CHARS,
            heading_from_first_segment_only: true,
            append_call_to_action: true,
        }
    }
}

/// Configuration for an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Maximum number of history snapshots, the current one included.
    pub history_limit: usize,
    /// Text import settings.
    pub import: ImportConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            import: ImportConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values are invalid.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> EditorResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        tracing::info!("Loaded editor config from {}", path.as_ref().display());
        Self::from_json(&contents)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Config`] if `history_limit` is zero.
    pub fn validate(&self) -> EditorResult<()> {
        if self.history_limit == 0 {
            return Err(EditorError::Config(
                "historyLimit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

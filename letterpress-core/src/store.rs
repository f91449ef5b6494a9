//! Named document storage with optional filesystem persistence.
//!
//! [`DocumentStore`] is the persistence collaborator the editing core hands
//! snapshots to. It only ever stores the serialized block sequence; selection
//! and history stay with the [`crate::Editor`] session.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::schema;
use crate::{Block, EditorError, EditorResult};

/// Thread-safe document storage.
///
/// Documents are keyed by their sanitized name, the same string used as the
/// file stem, so names that sanitize alike address one document.
///
/// # Example
///
/// ```
/// use letterpress_core::store::DocumentStore;
/// use letterpress_core::{registry, BlockVariant};
///
/// let store = DocumentStore::new();
/// let blocks = vec![registry::create_default(BlockVariant::Heading)];
/// store.save("welcome", &blocks).unwrap();
/// assert_eq!(store.get("welcome").unwrap(), blocks);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Arc<RwLock<HashMap<String, Vec<Block>>>>,
    /// Optional data directory for filesystem persistence.
    data_dir: Option<PathBuf>,
}

impl DocumentStore {
    /// Create an in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that also writes each document to `data_dir`.
    ///
    /// The directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Io`] if the directory cannot be created.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> EditorResult<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self {
            documents: Arc::default(),
            data_dir: Some(data_dir),
        })
    }

    /// The data directory, if any.
    #[must_use]
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn path_for(&self, key: &str) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(format!("{key}.json")))
    }

    fn read_map(&self) -> RwLockReadGuard<'_, HashMap<String, Vec<Block>>> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_map(&self) -> RwLockWriteGuard<'_, HashMap<String, Vec<Block>>> {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a document, replacing any previous version.
    ///
    /// The file is written before the in-memory copy changes, so a failed
    /// save leaves the store as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or written.
    pub fn save(&self, name: &str, blocks: &[Block]) -> EditorResult<()> {
        let key = sanitize_filename(name);
        if let Some(path) = self.path_for(&key) {
            let json = schema::serialize_pretty(blocks)?;
            std::fs::write(&path, json)?;
            tracing::info!("Saved document {name} to {}", path.display());
        }
        self.write_map().insert(key, blocks.to_vec());
        Ok(())
    }

    /// Get a document held in memory.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Vec<Block>> {
        self.read_map().get(&sanitize_filename(name)).cloned()
    }

    /// Check whether a document exists in memory or on disk.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let key = sanitize_filename(name);
        self.read_map().contains_key(&key)
            || self.path_for(&key).is_some_and(|path| path.is_file())
    }

    /// Get a document, reading it from disk if it is not in memory.
    ///
    /// Blocks that fail to parse are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unknown or its file is unreadable.
    pub fn load(&self, name: &str) -> EditorResult<Vec<Block>> {
        if let Some(blocks) = self.get(name) {
            return Ok(blocks);
        }
        let key = sanitize_filename(name);
        let path = self
            .path_for(&key)
            .ok_or_else(|| EditorError::Config("No data directory configured".into()))?;
        let contents = std::fs::read_to_string(&path)?;
        let loaded = schema::load_lenient(&contents)?;
        if !loaded.warnings.is_empty() {
            tracing::warn!(
                "Document {name}: {} block(s) skipped or repaired on load",
                loaded.warnings.len()
            );
        }

        self.write_map().insert(key, loaded.blocks.clone());
        tracing::info!("Loaded document {name} from {}", path.display());
        Ok(loaded.blocks)
    }

    /// Storage keys of all known documents, in memory or on disk, sorted.
    ///
    /// Keys are sanitized names (the file stems), so `"q3 promo"` is listed
    /// as `"q3_promo"`. Every key is accepted by [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory can't be read.
    pub fn list(&self) -> EditorResult<Vec<String>> {
        let mut names: Vec<String> = self.read_map().keys().cloned().collect();
        if let Some(dir) = &self.data_dir {
            for entry in std::fs::read_dir(dir)? {
                let path = entry?.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_string());
                    }
                }
            }
        }
        names.sort();
        names.dedup();
        Ok(names)
    }

    /// Forget a document and remove its file. Returns whether it existed.
    pub fn delete(&self, name: &str) -> bool {
        let key = sanitize_filename(name);
        let in_memory = self.write_map().remove(&key).is_some();
        let on_disk = match self.path_for(&key) {
            Some(path) if path.exists() => match std::fs::remove_file(&path) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Failed to delete document file {}: {e}", path.display());
                    false
                }
            },
            _ => false,
        };
        in_memory || on_disk
    }
}

/// Sanitize a document name for use as a filename.
///
/// Replaces any character that is not alphanumeric, `-`, or `_` with `_`.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

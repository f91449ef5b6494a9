//! Canonical serialized form of a document.
//!
//! A document is persisted as a JSON array of blocks, each a flat record:
//!
//! ```json
//! [
//!   { "id": "…", "type": "heading", "content": "Hi", "style": { "fontSize": "32px" } },
//!   { "id": "…", "type": "list", "items": ["a"], "listType": "ordered", "style": {} }
//! ]
//! ```
//!
//! Selection and history are session state and never appear here.

use std::collections::HashSet;

use crate::{Block, BlockId, BlockVariant, EditorError, EditorResult};

/// Serialize a block sequence.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize(blocks: &[Block]) -> EditorResult<String> {
    serde_json::to_string(blocks).map_err(EditorError::Serialization)
}

/// Serialize a block sequence with indentation.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_pretty(blocks: &[Block]) -> EditorResult<String> {
    serde_json::to_string_pretty(blocks).map_err(EditorError::Serialization)
}

/// Deserialize a block sequence, rejecting the whole input on any bad block.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or any block is malformed.
pub fn deserialize(json: &str) -> EditorResult<Vec<Block>> {
    serde_json::from_str(json).map_err(EditorError::Serialization)
}

/// Result of a lenient load.
#[derive(Debug, Default)]
pub struct LoadResult {
    /// Blocks that parsed, in their original order.
    pub blocks: Vec<Block>,
    /// One entry per skipped block or reassigned ID.
    pub warnings: Vec<LoadWarning>,
}

/// A problem found during a lenient load.
#[derive(Debug)]
pub struct LoadWarning {
    /// Input array index for a skipped block, output index for a
    /// reassigned ID.
    pub index: usize,
    /// What went wrong.
    pub error: EditorError,
}

/// Deserialize a block sequence, skipping entries that do not parse.
///
/// Entries with a `type` tag outside the variant set are reported as
/// [`EditorError::UnknownVariant`]; other malformed entries as
/// [`EditorError::Serialization`]. Duplicate IDs are replaced with fresh ones.
///
/// # Errors
///
/// Returns an error only if the input is not a JSON array.
pub fn load_lenient(json: &str) -> EditorResult<LoadResult> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut result = LoadResult::default();

    for (index, value) in values.into_iter().enumerate() {
        let tag = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        match serde_json::from_value::<Block>(value) {
            Ok(block) => result.blocks.push(block),
            Err(e) => {
                let error = match tag {
                    Some(tag) if tag.parse::<BlockVariant>().is_err() => {
                        EditorError::UnknownVariant(tag)
                    }
                    None => EditorError::UnknownVariant(String::new()),
                    Some(_) => EditorError::Serialization(e),
                };
                tracing::warn!("Skipping block {index}: {error}");
                result.warnings.push(LoadWarning { index, error });
            }
        }
    }

    for (index, id) in dedup_ids(&mut result.blocks) {
        tracing::warn!("Reassigned duplicate block id {id} at {index}");
        result.warnings.push(LoadWarning {
            index,
            error: EditorError::DuplicateId(id),
        });
    }

    Ok(result)
}

/// Give every block after the first with a repeated ID a fresh one.
///
/// Returns the position and original ID of every block that was changed.
/// Positions index into `blocks`.
pub fn dedup_ids(blocks: &mut [Block]) -> Vec<(usize, BlockId)> {
    let mut seen = HashSet::with_capacity(blocks.len());
    let mut changed = Vec::new();
    for (index, block) in blocks.iter_mut().enumerate() {
        if !seen.insert(block.id) {
            changed.push((index, block.id));
            block.id = BlockId::new();
            seen.insert(block.id);
        }
    }
    changed
}

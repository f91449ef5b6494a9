//! Ordered block storage for one document.
//!
//! [`Document`] holds the block sequence and the current selection. It does
//! not record history; [`crate::Editor`] wraps it for that.
//!
//! Reordering is expressed as a pair of pure functions, [`remove_at`] and
//! [`insert_at`], composed by [`move_item`]. The insertion index of a move is
//! interpreted against the sequence *after* removal.

use serde::{Deserialize, Serialize};

use crate::{Block, BlockId, EditorError, EditorResult};

/// Remove the element at `index`, returning the remaining sequence and the
/// removed element.
///
/// # Errors
///
/// Returns [`EditorError::IndexOutOfRange`] unless `index < items.len()`.
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> EditorResult<(Vec<T>, T)> {
    let removed = items
        .get(index)
        .cloned()
        .ok_or(EditorError::IndexOutOfRange {
            index,
            len: items.len(),
        })?;
    let mut rest = Vec::with_capacity(items.len().saturating_sub(1));
    rest.extend_from_slice(&items[..index]);
    rest.extend_from_slice(&items[index + 1..]);
    Ok((rest, removed))
}

/// Insert `item` so that it ends up at `index`.
///
/// # Errors
///
/// Returns [`EditorError::IndexOutOfRange`] unless `index <= items.len()`.
pub fn insert_at<T>(mut items: Vec<T>, index: usize, item: T) -> EditorResult<Vec<T>> {
    if index > items.len() {
        return Err(EditorError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    items.insert(index, item);
    Ok(items)
}

/// Splice the element at `from` out and back in at `to`.
///
/// `from` must lie in `[0, len - 1]` and `to` in `[0, len]`, both checked
/// against the original length. `to` then addresses the post-removal
/// sequence; `to == len` lands at the end.
///
/// # Errors
///
/// Returns [`EditorError::IndexOutOfRange`] if either index is out of range.
/// The input is untouched in that case.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> EditorResult<Vec<T>> {
    if to > items.len() {
        return Err(EditorError::IndexOutOfRange {
            index: to,
            len: items.len(),
        });
    }
    let (rest, item) = remove_at(items, from)?;
    let to = to.min(rest.len());
    insert_at(rest, to, item)
}

/// An ordered block sequence plus the selected block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Blocks in display order.
    blocks: Vec<Block>,
    /// Selected block. Always `None` or the ID of a block in `blocks`.
    #[serde(skip)]
    selected: Option<BlockId>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from existing blocks, with nothing selected.
    #[must_use]
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            selected: None,
        }
    }

    /// Blocks in display order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Index of a block.
    #[must_use]
    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Get a block by ID.
    #[must_use]
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Check whether a block is present.
    #[must_use]
    pub fn contains(&self, id: BlockId) -> bool {
        self.position(id).is_some()
    }

    fn require(&self, id: BlockId) -> EditorResult<usize> {
        self.position(id).ok_or(EditorError::BlockNotFound(id))
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) -> BlockId {
        let id = block.id;
        self.blocks.push(block);
        id
    }

    /// Append a block and make it the selection.
    pub(crate) fn push_selected(&mut self, block: Block) -> BlockId {
        let id = self.push(block);
        self.selected = Some(id);
        id
    }

    /// Replace the block with the same ID as `block`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::BlockNotFound`] if no block has that ID.
    pub fn replace(&mut self, block: Block) -> EditorResult<()> {
        let index = self.require(block.id)?;
        self.blocks[index] = block;
        Ok(())
    }

    /// Remove a block, clearing the selection if it pointed at it.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::BlockNotFound`] if the block is absent.
    pub fn remove(&mut self, id: BlockId) -> EditorResult<Block> {
        let index = self.require(id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(self.blocks.remove(index))
    }

    /// Deep-copy a block under a fresh ID, directly after the source.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::BlockNotFound`] if the block is absent.
    pub fn duplicate(&mut self, id: BlockId) -> EditorResult<BlockId> {
        let index = self.require(id)?;
        let copy = self.blocks[index].duplicate();
        let copy_id = copy.id;
        self.blocks.insert(index + 1, copy);
        Ok(copy_id)
    }

    /// Move the block at `from` to `to`. See [`move_item`].
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::IndexOutOfRange`] if either index is invalid.
    pub fn reorder(&mut self, from: usize, to: usize) -> EditorResult<()> {
        self.blocks = move_item(&self.blocks, from, to)?;
        Ok(())
    }

    /// Set or clear the selection.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::BlockNotFound`] if `id` is not in the document.
    pub fn select(&mut self, id: Option<BlockId>) -> EditorResult<()> {
        if let Some(id) = id {
            self.require(id)?;
        }
        self.selected = id;
        Ok(())
    }

    /// The selected block ID.
    #[must_use]
    pub fn selected_id(&self) -> Option<BlockId> {
        self.selected
    }

    /// The selected block.
    #[must_use]
    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Replace the whole sequence. A selection that no longer resolves is
    /// cleared.
    pub fn set_blocks(&mut self, blocks: Vec<Block>) {
        self.blocks = blocks;
        if let Some(id) = self.selected {
            if !self.contains(id) {
                self.selected = None;
            }
        }
    }

    /// Copy of the block sequence.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Block> {
        self.blocks.clone()
    }
}

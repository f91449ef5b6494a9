//! The editing session: mutation API over a document with undo/redo.
//!
//! Every successful mutating call pushes exactly one snapshot to the history.
//! Failed calls leave both the document and the history untouched. Selection
//! changes are not historied.

use crate::config::EditorConfig;
use crate::history::{History, HistoryOutcome};
use crate::patch::BlockPatch;
use crate::registry::create_default;
use crate::schema::dedup_ids;
use crate::{Block, BlockId, BlockVariant, Document, EditorError, EditorResult};

/// One editing session over one document.
#[derive(Debug, Clone)]
pub struct Editor {
    document: Document,
    history: History,
    config: EditorConfig,
}

impl Editor {
    /// Start a session on an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Start a session on an empty document with custom settings.
    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self::with_blocks(Vec::new(), config)
    }

    /// Start a session on hydrated blocks. The hydrated state is the first
    /// history entry, so it cannot be undone.
    #[must_use]
    pub fn with_blocks(mut blocks: Vec<Block>, config: EditorConfig) -> Self {
        dedup_ids(&mut blocks);
        let history = History::new(blocks.clone(), config.history_limit);
        Self {
            document: Document::from_blocks(blocks),
            history,
            config,
        }
    }

    /// The current document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Blocks in display order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.document.blocks()
    }

    /// Session settings.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The undo/redo history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    fn commit(&mut self, op: &'static str) {
        self.history.push(self.document.snapshot());
        tracing::debug!(
            op,
            blocks = self.document.len(),
            cursor = self.history.cursor(),
            "committed"
        );
    }

    /// Append a default block of `variant` and select it.
    pub fn add(&mut self, variant: BlockVariant) -> BlockId {
        let id = self.document.push_selected(create_default(variant));
        tracing::debug!(block = %id, %variant, "add");
        self.commit("add");
        id
    }

    /// Merge `patch` into the block `id`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::BlockNotFound`] if the block is absent.
    pub fn update(&mut self, id: BlockId, patch: &BlockPatch) -> EditorResult<()> {
        let current = self.document.get(id).ok_or(EditorError::BlockNotFound(id))?;
        let merged = patch.apply(current);
        self.document.replace(merged)?;
        tracing::debug!(block = %id, "update");
        self.commit("update");
        Ok(())
    }

    /// Remove the block `id`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::BlockNotFound`] if the block is absent.
    pub fn delete(&mut self, id: BlockId) -> EditorResult<Block> {
        let removed = self.document.remove(id)?;
        tracing::debug!(block = %id, variant = %removed.variant(), "delete");
        self.commit("delete");
        Ok(removed)
    }

    /// Copy the block `id` to the position right after it.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::BlockNotFound`] if the block is absent.
    pub fn duplicate(&mut self, id: BlockId) -> EditorResult<BlockId> {
        let copy = self.document.duplicate(id)?;
        tracing::debug!(source = %id, block = %copy, "duplicate");
        self.commit("duplicate");
        Ok(copy)
    }

    /// Move the block at `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::IndexOutOfRange`] if either index is invalid.
    pub fn reorder(&mut self, from: usize, to: usize) -> EditorResult<()> {
        self.document.reorder(from, to)?;
        tracing::debug!(from, to, "reorder");
        self.commit("reorder");
        Ok(())
    }

    /// Set or clear the selection. Not recorded in history.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::BlockNotFound`] if `id` is not in the document.
    pub fn select(&mut self, id: Option<BlockId>) -> EditorResult<()> {
        self.document.select(id)
    }

    /// The selected block.
    #[must_use]
    pub fn selected_block(&self) -> Option<&Block> {
        self.document.selected_block()
    }

    /// Replace the whole sequence as one undoable step.
    pub fn load_blocks(&mut self, mut blocks: Vec<Block>) {
        dedup_ids(&mut blocks);
        self.document.set_blocks(blocks);
        self.commit("load");
    }

    /// Append blocks as one undoable step. Incoming IDs that collide with
    /// existing ones are replaced.
    pub fn append_blocks(&mut self, blocks: Vec<Block>) {
        let mut all = self.document.snapshot();
        all.extend(blocks);
        dedup_ids(&mut all);
        self.document.set_blocks(all);
        self.commit("append");
    }

    /// Restore the previous snapshot.
    pub fn undo(&mut self) -> HistoryOutcome {
        match self.history.undo() {
            Some(snapshot) => {
                self.document.set_blocks(snapshot.to_vec());
                tracing::debug!(cursor = self.history.cursor(), "undo");
                HistoryOutcome::Changed
            }
            None => HistoryOutcome::NoOp,
        }
    }

    /// Restore the next snapshot.
    pub fn redo(&mut self) -> HistoryOutcome {
        match self.history.redo() {
            Some(snapshot) => {
                self.document.set_blocks(snapshot.to_vec());
                tracing::debug!(cursor = self.history.cursor(), "redo");
                HistoryOutcome::Changed
            }
            None => HistoryOutcome::NoOp,
        }
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlockKind;

    #[test]
    fn test_add_selects_new_block() {
        let mut editor = Editor::new();
        let id = editor.add(BlockVariant::Heading);
        assert_eq!(editor.document().selected_id(), Some(id));
        assert_eq!(editor.history().undo_levels(), 1);
    }

    #[test]
    fn test_add_undo_redo_keeps_id() {
        let mut editor = Editor::new();
        let id = editor.add(BlockVariant::Heading);
        assert_eq!(editor.blocks()[0].kind.content(), Some("Your Heading Here"));

        assert_eq!(editor.undo(), HistoryOutcome::Changed);
        assert!(editor.blocks().is_empty());
        assert_eq!(editor.document().selected_id(), None);

        assert_eq!(editor.redo(), HistoryOutcome::Changed);
        assert_eq!(editor.blocks().len(), 1);
        assert_eq!(editor.blocks()[0].id, id);
        assert_eq!(editor.blocks()[0].variant(), BlockVariant::Heading);
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut editor = Editor::new();
        assert_eq!(editor.undo(), HistoryOutcome::NoOp);
        assert_eq!(editor.redo(), HistoryOutcome::NoOp);
    }

    #[test]
    fn test_failed_mutation_records_nothing() {
        let mut editor = Editor::new();
        editor.add(BlockVariant::Paragraph);
        let missing = BlockId::new();

        assert!(matches!(
            editor.update(missing, &BlockPatch::content("x")),
            Err(EditorError::BlockNotFound(_))
        ));
        assert!(editor.delete(missing).is_err());
        assert!(editor.duplicate(missing).is_err());
        assert!(matches!(
            editor.reorder(0, 5),
            Err(EditorError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert_eq!(editor.history().len(), 2);
    }

    #[test]
    fn test_update_then_undo() {
        let mut editor = Editor::new();
        let id = editor.add(BlockVariant::Paragraph);
        let before = editor.blocks().to_vec();

        editor
            .update(id, &BlockPatch::content("Updated"))
            .expect("update");
        let after = editor.blocks().to_vec();
        assert_eq!(after[0].kind.content(), Some("Updated"));

        editor.undo();
        assert_eq!(editor.blocks(), before.as_slice());
        editor.redo();
        assert_eq!(editor.blocks(), after.as_slice());
    }

    #[test]
    fn test_select_not_historied() {
        let mut editor = Editor::new();
        let id = editor.add(BlockVariant::Spacer);
        let levels = editor.history().len();
        editor.select(None).expect("clear");
        editor.select(Some(id)).expect("select");
        assert_eq!(editor.history().len(), levels);
    }

    #[test]
    fn test_undo_clears_dangling_selection() {
        let mut editor = Editor::new();
        editor.add(BlockVariant::Heading);
        let id = editor.add(BlockVariant::Paragraph);
        assert_eq!(editor.document().selected_id(), Some(id));
        editor.undo();
        assert_eq!(editor.document().selected_id(), None);
    }

    #[test]
    fn test_new_mutation_discards_redo() {
        let mut editor = Editor::new();
        editor.add(BlockVariant::Heading);
        editor.undo();
        editor.add(BlockVariant::Paragraph);
        assert_eq!(editor.redo(), HistoryOutcome::NoOp);
        assert_eq!(editor.blocks().len(), 1);
        assert_eq!(editor.blocks()[0].variant(), BlockVariant::Paragraph);
    }

    #[test]
    fn test_load_blocks_is_one_step() {
        let mut editor = Editor::new();
        editor.add(BlockVariant::Heading);
        let imported = vec![
            create_default(BlockVariant::Paragraph),
            create_default(BlockVariant::Button),
        ];
        editor.load_blocks(imported.clone());
        assert_eq!(editor.blocks(), imported.as_slice());
        editor.undo();
        assert_eq!(editor.blocks().len(), 1);
        assert_eq!(editor.blocks()[0].variant(), BlockVariant::Heading);
    }

    #[test]
    fn test_append_blocks_replaces_colliding_ids() {
        let mut editor = Editor::new();
        let id = editor.add(BlockVariant::Heading);
        let clash = editor.blocks()[0].clone();
        editor.append_blocks(vec![clash]);
        assert_eq!(editor.blocks().len(), 2);
        assert_eq!(editor.blocks()[0].id, id);
        assert_ne!(editor.blocks()[1].id, id);
    }

    #[test]
    fn test_with_blocks_hydrates_first_entry() {
        let blocks = vec![create_default(BlockVariant::Divider)];
        let mut editor = Editor::with_blocks(blocks.clone(), EditorConfig::default());
        assert_eq!(editor.blocks(), blocks.as_slice());
        assert_eq!(editor.undo(), HistoryOutcome::NoOp);
    }

    #[test]
    fn test_history_limit_from_config() {
        let config = EditorConfig {
            history_limit: 3,
            ..EditorConfig::default()
        };
        let mut editor = Editor::with_config(config);
        for _ in 0..5 {
            editor.add(BlockVariant::Spacer);
        }
        assert_eq!(editor.history().len(), 3);
        assert_eq!(editor.undo(), HistoryOutcome::Changed);
        assert_eq!(editor.undo(), HistoryOutcome::Changed);
        assert_eq!(editor.undo(), HistoryOutcome::NoOp);
        assert_eq!(editor.blocks().len(), 3);
    }

    #[test]
    fn test_duplicate_middle_of_three() {
        let mut editor = Editor::new();
        editor.add(BlockVariant::Heading);
        let middle = editor.add(BlockVariant::Paragraph);
        editor.add(BlockVariant::Button);

        let copy = editor.duplicate(middle).expect("duplicate");
        let blocks = editor.blocks();
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[1].id, middle);
        assert_eq!(blocks[2].id, copy);
        assert_ne!(copy, middle);
        assert!(matches!(blocks[2].kind, BlockKind::Paragraph { .. }));
    }
}

//! Partial block updates.

use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockKind, BlockVariant, Column, ListType, StyleMap};
use crate::registry::{default_column, MAX_COLUMNS};

/// A partial update merged into a block by [`crate::Editor::update`].
///
/// Style entries are merged key by key. Payload fields that the target
/// variant does not carry are ignored, so a patch can never change which
/// fields a block has.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockPatch {
    /// Style keys to set or overwrite.
    pub style: StyleMap,
    /// Style keys to remove.
    pub unset_style: Vec<String>,
    /// New text content (heading, paragraph, button).
    pub content: Option<String>,
    /// New link URL (button, image).
    pub link: Option<String>,
    /// New image source.
    pub src: Option<String>,
    /// New image alternative text.
    pub alt: Option<String>,
    /// New list items.
    pub items: Option<Vec<String>>,
    /// New list marker style.
    pub list_type: Option<ListType>,
    /// Replacement column cells. `columnCount` follows their number.
    pub columns: Option<Vec<Column>>,
    /// New column count. Cells are padded or truncated to match.
    pub column_count: Option<u8>,
}

impl BlockPatch {
    /// A patch that only replaces text content.
    #[must_use]
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// A patch that only sets one style key.
    #[must_use]
    pub fn style(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut style = StyleMap::new();
        style.insert(key.into(), value.into());
        Self {
            style,
            ..Self::default()
        }
    }

    /// Check whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Return a merged copy of `block`. The ID is never touched.
    #[must_use]
    pub fn apply(&self, block: &Block) -> Block {
        let mut merged = block.clone();

        for key in &self.unset_style {
            merged.style.remove(key);
        }
        merged
            .style
            .extend(self.style.iter().map(|(k, v)| (k.clone(), v.clone())));

        match &mut merged.kind {
            BlockKind::Heading { content } | BlockKind::Paragraph { content } => {
                set(content, self.content.as_ref());
            }
            BlockKind::Button { content, link } => {
                set(content, self.content.as_ref());
                set(link, self.link.as_ref());
            }
            BlockKind::Image { src, alt, link } => {
                set(src, self.src.as_ref());
                set(alt, self.alt.as_ref());
                set(link, self.link.as_ref());
            }
            BlockKind::Divider | BlockKind::Spacer => {}
            BlockKind::Columns {
                column_count,
                columns,
            } => {
                if let Some(replacement) = &self.columns {
                    columns.clone_from(replacement);
                    columns.truncate(usize::from(MAX_COLUMNS));
                    *column_count = u8::try_from(columns.len()).unwrap_or(MAX_COLUMNS);
                }
                if let Some(count) = self.column_count {
                    *column_count = count;
                }
                *column_count = (*column_count).clamp(1, MAX_COLUMNS);
                let target = usize::from(*column_count);
                while columns.len() < target {
                    columns.push(default_column(columns.len()));
                }
                columns.truncate(target);
            }
            BlockKind::List { items, list_type } => {
                set(items, self.items.as_ref());
                if let Some(lt) = self.list_type {
                    *list_type = lt;
                }
            }
        }

        if self.ignored_by(block) {
            tracing::debug!(
                block = %block.id,
                variant = %block.variant(),
                "patch carries fields the variant does not have; ignored"
            );
        }

        merged
    }

    /// Check whether any payload field in the patch does not apply to `block`.
    fn ignored_by(&self, block: &Block) -> bool {
        use BlockVariant::{Button, Columns, Heading, Image, List, Paragraph};

        let variant = block.variant();
        let stray = |present: bool, allowed: &[BlockVariant]| present && !allowed.contains(&variant);

        stray(self.content.is_some(), &[Heading, Paragraph, Button])
            || stray(self.link.is_some(), &[Button, Image])
            || stray(self.src.is_some() || self.alt.is_some(), &[Image])
            || stray(self.items.is_some() || self.list_type.is_some(), &[List])
            || stray(
                self.columns.is_some() || self.column_count.is_some(),
                &[Columns],
            )
    }
}

fn set<T: Clone>(slot: &mut T, value: Option<&T>) {
    if let Some(v) = value {
        slot.clone_from(v);
    }
}

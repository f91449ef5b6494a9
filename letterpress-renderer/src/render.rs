//! Projection from blocks to presentation nodes.
//!
//! [`render`] is pure and total over [`Block`]: the variant set is closed, so
//! there is no runtime fallthrough. Unknown variants can only come from a
//! crafted serialized document; [`render_json_lenient`] drops those blocks and
//! reports them instead of failing the whole document.

use letterpress_core::registry::{style_keys, COLUMN_CELL_STYLE};
use letterpress_core::schema::load_lenient;
use letterpress_core::{Block, BlockKind, Column, EditorError, ListType, StyleMap};

use crate::error::{RenderError, RenderResult};
use crate::node::{GridCell, PresentationNode, RenderedBlock, TextTag};

/// Keep only the entries of `style` named in `keys`.
fn filter_style(style: &StyleMap, keys: &[&str]) -> StyleMap {
    style
        .iter()
        .filter(|(key, _)| keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Style of `block` restricted to the keys its variant honours.
#[must_use]
pub fn resolve_style(block: &Block) -> StyleMap {
    filter_style(&block.style, style_keys(block.variant()))
}

fn text(tag: TextTag, content: &str, style: StyleMap) -> PresentationNode {
    PresentationNode::Text {
        tag,
        content: content.to_string(),
        style,
    }
}

fn grid_cells(columns: &[Column], column_count: u8) -> Vec<GridCell> {
    let empty = Column::new("");
    (0..usize::from(column_count))
        .map(|i| {
            let column = columns.get(i).unwrap_or(&empty);
            GridCell {
                content: column.content.clone(),
                style: filter_style(&column.style, &COLUMN_CELL_STYLE),
            }
        })
        .collect()
}

/// Render one block.
#[must_use]
pub fn render(block: &Block) -> PresentationNode {
    let mut style = resolve_style(block);
    match &block.kind {
        BlockKind::Heading { content } => text(TextTag::H1, content, style),
        BlockKind::Paragraph { content } => text(TextTag::P, content, style),
        BlockKind::Button { content, link } => {
            let mut outer = StyleMap::new();
            if let Some(align) = style.remove("textAlign") {
                outer.insert("textAlign".to_string(), align);
            }
            PresentationNode::Container {
                style: outer,
                children: vec![PresentationNode::Link {
                    href: link.clone(),
                    style,
                    children: vec![text(TextTag::Span, content, StyleMap::new())],
                }],
            }
        }
        BlockKind::Image { src, alt, link } => {
            let image = PresentationNode::Image {
                src: src.clone(),
                alt: alt.clone(),
                style,
            };
            if link.is_empty() {
                image
            } else {
                PresentationNode::Link {
                    href: link.clone(),
                    style: StyleMap::new(),
                    children: vec![image],
                }
            }
        }
        BlockKind::Divider => PresentationNode::Rule {
            thickness: style.remove("borderWidth"),
            color: style.remove("borderColor"),
            margin_top: style.remove("marginTop"),
            margin_bottom: style.remove("marginBottom"),
        },
        BlockKind::Spacer => PresentationNode::Spacer {
            height: style.remove("height"),
        },
        BlockKind::Columns {
            column_count,
            columns,
        } => PresentationNode::Grid {
            column_count: *column_count,
            style,
            cells: grid_cells(columns, *column_count),
        },
        BlockKind::List { items, list_type } => PresentationNode::List {
            ordered: *list_type == ListType::Ordered,
            items: items.clone(),
            style,
        },
    }
}

/// Render every block of a document in order.
#[must_use]
pub fn render_document(blocks: &[Block]) -> Vec<RenderedBlock> {
    blocks
        .iter()
        .map(|block| RenderedBlock {
            id: block.id,
            node: render(block),
        })
        .collect()
}

/// A block left out of a lenient render.
#[derive(Debug)]
pub struct SkippedBlock {
    /// Position in the serialized array.
    pub index: usize,
    /// Why it was skipped.
    pub error: RenderError,
}

/// Output of [`render_json_lenient`].
#[derive(Debug, Default)]
pub struct LenientRender {
    /// Rendered blocks, in document order.
    pub blocks: Vec<RenderedBlock>,
    /// Blocks that rendered as nothing.
    pub skipped: Vec<SkippedBlock>,
}

/// Render a serialized document, rendering nothing for blocks that don't
/// parse.
///
/// # Errors
///
/// Returns [`RenderError::Serialization`] if the input is not a JSON array.
pub fn render_json_lenient(json: &str) -> RenderResult<LenientRender> {
    let loaded = load_lenient(json).map_err(|e| match e {
        EditorError::Serialization(e) => RenderError::Serialization(e),
        other => RenderError::InvalidBlock(other.to_string()),
    })?;

    let skipped = loaded
        .warnings
        .into_iter()
        .filter_map(|warning| {
            let error = match warning.error {
                EditorError::UnknownVariant(tag) => RenderError::UnknownVariant(tag),
                // Reassigned IDs still render.
                EditorError::DuplicateId(_) => return None,
                other => RenderError::InvalidBlock(other.to_string()),
            };
            tracing::warn!("Rendering nothing for block {}: {error}", warning.index);
            Some(SkippedBlock {
                index: warning.index,
                error,
            })
        })
        .collect();

    Ok(LenientRender {
        blocks: render_document(&loaded.blocks),
        skipped,
    })
}

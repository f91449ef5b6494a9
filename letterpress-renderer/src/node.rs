//! Presentation nodes: the style-resolved tree a display surface consumes.
//!
//! Every style map on a node holds only keys the renderer honours for the
//! source variant. Keys stay in their stored camelCase form; the HTML writer
//! converts them to CSS property names.

use letterpress_core::{BlockId, StyleMap};
use serde::{Deserialize, Serialize};

/// Element kind of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTag {
    /// Top-level heading.
    H1,
    /// Paragraph.
    P,
    /// Inline run inside another node.
    Span,
}

impl TextTag {
    /// HTML element name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::P => "p",
            Self::Span => "span",
        }
    }
}

/// One cell of a grid node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Literal cell content.
    pub content: String,
    /// Resolved cell style.
    pub style: StyleMap,
}

/// A node of the presentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "camelCase")]
pub enum PresentationNode {
    /// Literal text.
    Text {
        /// Element kind.
        tag: TextTag,
        /// Text, not interpreted as markup.
        content: String,
        /// Resolved style.
        style: StyleMap,
    },

    /// Anchor wrapping other nodes.
    Link {
        /// Target URL.
        href: String,
        /// Resolved style.
        style: StyleMap,
        /// Wrapped nodes.
        children: Vec<PresentationNode>,
    },

    /// Block-level wrapper.
    Container {
        /// Resolved style.
        style: StyleMap,
        /// Wrapped nodes.
        children: Vec<PresentationNode>,
    },

    /// Image reference. The source is passed through untouched.
    Image {
        /// Image URI.
        src: String,
        /// Alternative text.
        alt: String,
        /// Resolved style.
        style: StyleMap,
    },

    /// Zero-height horizontal rule.
    Rule {
        /// Line thickness (`borderWidth`).
        #[serde(skip_serializing_if = "Option::is_none")]
        thickness: Option<String>,
        /// Line color (`borderColor`).
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        /// Space above.
        #[serde(rename = "marginTop", skip_serializing_if = "Option::is_none")]
        margin_top: Option<String>,
        /// Space below.
        #[serde(rename = "marginBottom", skip_serializing_if = "Option::is_none")]
        margin_bottom: Option<String>,
    },

    /// Empty vertical space.
    Spacer {
        /// Height of the gap.
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<String>,
    },

    /// Fixed-column grid with one cell per column.
    Grid {
        /// Number of columns; always equals `cells.len()`.
        #[serde(rename = "columnCount")]
        column_count: u8,
        /// Resolved container style.
        style: StyleMap,
        /// Cells in column order.
        cells: Vec<GridCell>,
    },

    /// Ordered or unordered list.
    List {
        /// Numbered markers when true.
        ordered: bool,
        /// Item texts, unstyled individually.
        items: Vec<String>,
        /// Resolved list style.
        style: StyleMap,
    },
}

/// The presentation of one block, keyed by its ID so a surface can map
/// interaction back to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedBlock {
    /// Source block.
    pub id: BlockId,
    /// Rendered tree.
    pub node: PresentationNode,
}

//! Document blocks - the building blocks of a message.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EditorError;

/// Open mapping of presentation attributes (`fontSize`, `color`, ...).
///
/// Keys the renderer does not know about are preserved but ignored.
pub type StyleMap = BTreeMap<String, String>;

/// Unique identifier for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    /// Create a new unique block ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a block ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of block variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockVariant {
    /// Large title text.
    Heading,
    /// Body text.
    Paragraph,
    /// Call-to-action link styled as a button.
    Button,
    /// Image, optionally linked.
    Image,
    /// Horizontal rule.
    Divider,
    /// Vertical whitespace.
    Spacer,
    /// Fixed-count grid of content cells.
    Columns,
    /// Ordered or unordered list.
    List,
}

impl BlockVariant {
    /// Every variant, in palette order.
    pub const ALL: [Self; 8] = [
        Self::Heading,
        Self::Paragraph,
        Self::Button,
        Self::Image,
        Self::Divider,
        Self::Spacer,
        Self::Columns,
        Self::List,
    ];

    /// The serialized tag of this variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Button => "button",
            Self::Image => "image",
            Self::Divider => "divider",
            Self::Spacer => "spacer",
            Self::Columns => "columns",
            Self::List => "list",
        }
    }
}

impl fmt::Display for BlockVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockVariant {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| EditorError::UnknownVariant(s.to_string()))
    }
}

/// List marker style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Bulleted list.
    #[default]
    Unordered,
    /// Numbered list.
    Ordered,
}

/// One cell of a columns block. Holds raw content, not a nested block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Literal cell content.
    pub content: String,
    /// Cell presentation attributes.
    #[serde(default)]
    pub style: StyleMap,
}

impl Column {
    /// Create a column with the given content and no style.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: StyleMap::new(),
        }
    }
}

/// Variant-specific payload of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockKind {
    /// Title text.
    Heading {
        /// Text content.
        content: String,
    },

    /// Body text.
    Paragraph {
        /// Text content.
        content: String,
    },

    /// Call-to-action button.
    Button {
        /// Button label.
        content: String,
        /// Target URL.
        link: String,
    },

    /// Image.
    Image {
        /// Image source URI. Never validated or fetched.
        src: String,
        /// Alternative text.
        alt: String,
        /// Optional target URL. Empty means unlinked.
        #[serde(default)]
        link: String,
    },

    /// Horizontal rule. Thickness, color and margins live in the style map.
    Divider,

    /// Vertical whitespace. Height lives in the style map.
    Spacer,

    /// Fixed-count grid.
    Columns {
        /// Number of grid columns.
        #[serde(rename = "columnCount")]
        column_count: u8,
        /// Cell contents, one per column.
        columns: Vec<Column>,
    },

    /// Ordered or unordered list.
    List {
        /// Item texts, rendered literally.
        items: Vec<String>,
        /// Marker style.
        #[serde(rename = "listType", default)]
        list_type: ListType,
    },
}

impl BlockKind {
    /// The variant tag of this payload.
    #[must_use]
    pub const fn variant(&self) -> BlockVariant {
        match self {
            Self::Heading { .. } => BlockVariant::Heading,
            Self::Paragraph { .. } => BlockVariant::Paragraph,
            Self::Button { .. } => BlockVariant::Button,
            Self::Image { .. } => BlockVariant::Image,
            Self::Divider => BlockVariant::Divider,
            Self::Spacer => BlockVariant::Spacer,
            Self::Columns { .. } => BlockVariant::Columns,
            Self::List { .. } => BlockVariant::List,
        }
    }

    /// Text content for text-bearing variants.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Heading { content }
            | Self::Paragraph { content }
            | Self::Button { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// A typed content unit in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Unique identifier. Immutable after creation.
    pub id: BlockId,
    /// Variant payload.
    #[serde(flatten)]
    pub kind: BlockKind,
    /// Presentation attributes.
    #[serde(default)]
    pub style: StyleMap,
}

impl Block {
    /// Create a new block with a fresh ID and no style.
    ///
    /// Prefer [`crate::registry::create_default`], which fills in the
    /// variant's default style.
    #[must_use]
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: BlockId::new(),
            kind,
            style: StyleMap::new(),
        }
    }

    /// Set the style map.
    #[must_use]
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    /// The variant tag of this block.
    #[must_use]
    pub const fn variant(&self) -> BlockVariant {
        self.kind.variant()
    }

    /// Copy this block under a fresh ID.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: BlockId::new(),
            ..self.clone()
        }
    }

    /// Look up a style value.
    #[must_use]
    pub fn style_value(&self, key: &str) -> Option<&str> {
        self.style.get(key).map(String::as_str)
    }
}

//! Block registry: default factory and editable-field descriptors.
//!
//! The registry is the single source of truth for what a variant carries.
//! [`create_default`] always yields a structurally complete block, and
//! [`style_keys`] lists exactly the style attributes the renderer consumes,
//! so the property editor never offers a field that would be ignored.

use serde::Serialize;

use crate::block::{Block, BlockKind, BlockVariant, Column, ListType, StyleMap};

/// Largest supported `columnCount`.
pub const MAX_COLUMNS: u8 = 4;

/// Placeholder link used by new buttons.
pub const DEFAULT_LINK: &str = "https://example.com";

const TEXT_STYLE: [&str; 3] = ["fontSize", "color", "textAlign"];
const HEADING_STYLE: [&str; 4] = ["fontSize", "color", "textAlign", "fontWeight"];
const PARAGRAPH_STYLE: [&str; 4] = ["fontSize", "color", "textAlign", "lineHeight"];
const BUTTON_STYLE: [&str; 6] = [
    "fontSize",
    "color",
    "textAlign",
    "backgroundColor",
    "borderRadius",
    "padding",
];
const IMAGE_STYLE: [&str; 1] = ["width"];
const DIVIDER_STYLE: [&str; 4] = ["borderColor", "borderWidth", "marginTop", "marginBottom"];
const SPACER_STYLE: [&str; 1] = ["height"];
const COLUMNS_STYLE: [&str; 2] = ["backgroundColor", "padding"];

/// Style keys honoured on each cell of a columns block.
pub const COLUMN_CELL_STYLE: [&str; 5] = ["padding", "backgroundColor", "textAlign", "fontSize", "color"];

/// Style keys the renderer honours for a variant.
#[must_use]
pub const fn style_keys(variant: BlockVariant) -> &'static [&'static str] {
    match variant {
        BlockVariant::Heading => &HEADING_STYLE,
        BlockVariant::Paragraph => &PARAGRAPH_STYLE,
        BlockVariant::Button => &BUTTON_STYLE,
        BlockVariant::Image => &IMAGE_STYLE,
        BlockVariant::Divider => &DIVIDER_STYLE,
        BlockVariant::Spacer => &SPACER_STYLE,
        BlockVariant::Columns => &COLUMNS_STYLE,
        BlockVariant::List => &TEXT_STYLE,
    }
}

fn style(pairs: &[(&str, &str)]) -> StyleMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Default cell for column `index` (zero-based).
#[must_use]
pub fn default_column(index: usize) -> Column {
    Column {
        content: format!("Column {} content", index + 1),
        style: style(&[("padding", "10px")]),
    }
}

/// Create a new block of `variant` with a fresh ID and the variant defaults.
#[must_use]
pub fn create_default(variant: BlockVariant) -> Block {
    let (kind, style) = match variant {
        BlockVariant::Heading => (
            BlockKind::Heading {
                content: "Your Heading Here".to_string(),
            },
            style(&[
                ("fontSize", "32px"),
                ("fontWeight", "bold"),
                ("color", "#000000"),
                ("textAlign", "left"),
            ]),
        ),
        BlockVariant::Paragraph => (
            BlockKind::Paragraph {
                content: "Your paragraph text goes here. Click to edit.".to_string(),
            },
            style(&[
                ("fontSize", "16px"),
                ("color", "#333333"),
                ("lineHeight", "1.5"),
                ("textAlign", "left"),
            ]),
        ),
        BlockVariant::Button => (
            BlockKind::Button {
                content: "Click Here".to_string(),
                link: DEFAULT_LINK.to_string(),
            },
            style(&[
                ("backgroundColor", "#007bff"),
                ("color", "#ffffff"),
                ("padding", "12px 24px"),
                ("borderRadius", "24px"),
                ("fontSize", "16px"),
                ("textAlign", "center"),
            ]),
        ),
        BlockVariant::Image => (
            BlockKind::Image {
                src: "https://via.placeholder.com/600x300".to_string(),
                alt: "Image".to_string(),
                link: String::new(),
            },
            style(&[("width", "100%")]),
        ),
        BlockVariant::Divider => (
            BlockKind::Divider,
            style(&[
                ("borderColor", "#dddddd"),
                ("borderWidth", "1px"),
                ("marginTop", "20px"),
                ("marginBottom", "20px"),
            ]),
        ),
        BlockVariant::Spacer => (BlockKind::Spacer, style(&[("height", "20px")])),
        BlockVariant::Columns => (
            BlockKind::Columns {
                column_count: 2,
                columns: (0..2).map(default_column).collect(),
            },
            StyleMap::new(),
        ),
        BlockVariant::List => (
            BlockKind::List {
                items: vec![
                    "First item".to_string(),
                    "Second item".to_string(),
                    "Third item".to_string(),
                ],
                list_type: ListType::Unordered,
            },
            style(&[("fontSize", "16px"), ("color", "#333333"), ("textAlign", "left")]),
        ),
    };

    Block::new(kind).with_style(style)
}

/// What a field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "target", content = "key", rename_all = "camelCase")]
pub enum FieldTarget {
    /// Text content.
    Content,
    /// Link URL.
    Link,
    /// Image source.
    Src,
    /// Image alternative text.
    Alt,
    /// List items.
    Items,
    /// List marker style.
    ListType,
    /// Number of grid columns.
    ColumnCount,
    /// Column cell contents.
    Columns,
    /// A key in the style map.
    Style(&'static str),
}

/// Input control suggested for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "input", rename_all = "camelCase")]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    TextArea,
    /// URL.
    Url,
    /// Color picker.
    Color,
    /// CSS length such as `16px` or `100%`.
    Length,
    /// One of a fixed set of values.
    Select {
        /// Allowed values.
        options: &'static [&'static str],
    },
    /// Bounded integer.
    Number {
        /// Inclusive minimum.
        min: u8,
        /// Inclusive maximum.
        max: u8,
    },
    /// Editable list of strings.
    StringList,
}

/// One editable property of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Human readable label.
    pub label: &'static str,
    /// What the field edits.
    #[serde(flatten)]
    pub target: FieldTarget,
    /// Suggested input control.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    const fn new(label: &'static str, target: FieldTarget, kind: FieldKind) -> Self {
        Self {
            label,
            target,
            kind,
        }
    }
}

const ALIGN_OPTIONS: &[&str] = &["left", "center", "right"];
const WEIGHT_OPTIONS: &[&str] = &["normal", "bold"];
const LIST_TYPE_OPTIONS: &[&str] = &["unordered", "ordered"];

fn style_field(key: &'static str) -> FieldDescriptor {
    let (label, kind) = match key {
        "fontSize" => ("Font size", FieldKind::Length),
        "color" => ("Text color", FieldKind::Color),
        "textAlign" => ("Alignment", FieldKind::Select { options: ALIGN_OPTIONS }),
        "fontWeight" => ("Font weight", FieldKind::Select { options: WEIGHT_OPTIONS }),
        "lineHeight" => ("Line height", FieldKind::Text),
        "backgroundColor" => ("Background color", FieldKind::Color),
        "borderRadius" => ("Corner radius", FieldKind::Length),
        "padding" => ("Padding", FieldKind::Length),
        "width" => ("Width", FieldKind::Length),
        "borderColor" => ("Border color", FieldKind::Color),
        "borderWidth" => ("Border width", FieldKind::Length),
        "marginTop" => ("Margin top", FieldKind::Length),
        "marginBottom" => ("Margin bottom", FieldKind::Length),
        "height" => ("Height", FieldKind::Length),
        _ => ("Style", FieldKind::Text),
    };
    FieldDescriptor::new(label, FieldTarget::Style(key), kind)
}

/// Editable fields for a block, payload fields first, then style fields.
///
/// The result depends only on the block's variant.
#[must_use]
pub fn editable_fields(block: &Block) -> Vec<FieldDescriptor> {
    variant_fields(block.variant())
}

/// Editable fields for a variant.
#[must_use]
pub fn variant_fields(variant: BlockVariant) -> Vec<FieldDescriptor> {
    let mut fields = match variant {
        BlockVariant::Heading => vec![FieldDescriptor::new(
            "Text",
            FieldTarget::Content,
            FieldKind::Text,
        )],
        BlockVariant::Paragraph => vec![FieldDescriptor::new(
            "Text",
            FieldTarget::Content,
            FieldKind::TextArea,
        )],
        BlockVariant::Button => vec![
            FieldDescriptor::new("Label", FieldTarget::Content, FieldKind::Text),
            FieldDescriptor::new("Link URL", FieldTarget::Link, FieldKind::Url),
        ],
        BlockVariant::Image => vec![
            FieldDescriptor::new("Image URL", FieldTarget::Src, FieldKind::Url),
            FieldDescriptor::new("Alt text", FieldTarget::Alt, FieldKind::Text),
            FieldDescriptor::new("Link URL", FieldTarget::Link, FieldKind::Url),
        ],
        BlockVariant::Divider | BlockVariant::Spacer => Vec::new(),
        BlockVariant::Columns => vec![
            FieldDescriptor::new(
                "Columns",
                FieldTarget::ColumnCount,
                FieldKind::Number {
                    min: 1,
                    max: MAX_COLUMNS,
                },
            ),
            FieldDescriptor::new("Column content", FieldTarget::Columns, FieldKind::StringList),
        ],
        BlockVariant::List => vec![
            FieldDescriptor::new("Items", FieldTarget::Items, FieldKind::StringList),
            FieldDescriptor::new(
                "List type",
                FieldTarget::ListType,
                FieldKind::Select {
                    options: LIST_TYPE_OPTIONS,
                },
            ),
        ],
    };
    fields.extend(style_keys(variant).iter().copied().map(style_field));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_defaults() {
        let block = create_default(BlockVariant::Heading);
        assert_eq!(block.variant(), BlockVariant::Heading);
        assert_eq!(block.kind.content(), Some("Your Heading Here"));
        assert_eq!(block.style_value("fontSize"), Some("32px"));
        assert_eq!(block.style_value("fontWeight"), Some("bold"));
        assert_eq!(block.style_value("textAlign"), Some("left"));
        assert_eq!(block.style_value("color"), Some("#000000"));
    }

    #[test]
    fn test_button_defaults() {
        let block = create_default(BlockVariant::Button);
        match &block.kind {
            BlockKind::Button { link, .. } => assert_eq!(link, DEFAULT_LINK),
            other => panic!("Expected Button, got {other:?}"),
        }
        assert_eq!(block.style_value("backgroundColor"), Some("#007bff"));
    }

    #[test]
    fn test_defaults_have_fresh_ids() {
        let a = create_default(BlockVariant::Paragraph);
        let b = create_default(BlockVariant::Paragraph);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_default_variant_matches_request() {
        for variant in BlockVariant::ALL {
            assert_eq!(create_default(variant).variant(), variant);
        }
    }

    #[test]
    fn test_default_style_only_uses_rendered_keys() {
        for variant in BlockVariant::ALL {
            let block = create_default(variant);
            let keys = style_keys(variant);
            for key in block.style.keys() {
                assert!(
                    keys.contains(&key.as_str()),
                    "{variant} default uses unrendered style key {key}"
                );
            }
        }
    }

    #[test]
    fn test_columns_default_is_consistent() {
        let block = create_default(BlockVariant::Columns);
        match &block.kind {
            BlockKind::Columns {
                column_count,
                columns,
            } => assert_eq!(usize::from(*column_count), columns.len()),
            other => panic!("Expected Columns, got {other:?}"),
        }
    }

    #[test]
    fn test_fields_are_stable_per_variant() {
        for variant in BlockVariant::ALL {
            let a = editable_fields(&create_default(variant));
            let b = editable_fields(&create_default(variant));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_spacer_fields() {
        let fields = variant_fields(BlockVariant::Spacer);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].target, FieldTarget::Style("height"));
    }

    #[test]
    fn test_divider_fields() {
        let targets: Vec<_> = variant_fields(BlockVariant::Divider)
            .into_iter()
            .map(|f| f.target)
            .collect();
        assert!(targets.contains(&FieldTarget::Style("borderColor")));
        assert!(targets.contains(&FieldTarget::Style("borderWidth")));
        assert!(!targets.contains(&FieldTarget::Content));
    }

    #[test]
    fn test_text_variants_share_typography() {
        for variant in [
            BlockVariant::Heading,
            BlockVariant::Paragraph,
            BlockVariant::Button,
            BlockVariant::List,
        ] {
            let targets: Vec<_> = variant_fields(variant).into_iter().map(|f| f.target).collect();
            for key in TEXT_STYLE {
                assert!(targets.contains(&FieldTarget::Style(key)), "{variant} lacks {key}");
            }
        }
    }

    #[test]
    fn test_link_only_on_button_and_image() {
        for variant in BlockVariant::ALL {
            let has_link = variant_fields(variant)
                .iter()
                .any(|f| f.target == FieldTarget::Link);
            assert_eq!(
                has_link,
                matches!(variant, BlockVariant::Button | BlockVariant::Image)
            );
        }
    }
}

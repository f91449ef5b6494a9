//! Text import: turn generated prose into an initial block sequence.
//!
//! The input is split on blank lines. The first non-empty segment becomes a
//! heading when it is short, every other segment becomes a paragraph, and a
//! default button is appended as the call to action.
//!
//! ```text
//! "Big Sale\n\nEverything 50% off."  ->  [heading, paragraph, button]
//! ```
//!
//! Emphasis, lists and other structure in the source text are not recognised.

use crate::config::ImportConfig;
use crate::registry::create_default;
use crate::{Block, BlockKind, BlockVariant};

/// Split `raw` into trimmed, non-empty segments separated by blank lines.
///
/// Lines holding only whitespace count as blank. `\r\n` line endings are
/// accepted.
#[must_use]
pub fn segments(raw: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut segments);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut segments);
    segments
}

fn flush(current: &mut Vec<&str>, segments: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let joined = current.join("\n");
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }
    current.clear();
}

/// Heading text for `segment`, or `None` if it should stay a paragraph.
fn heading_text(segment: &str, is_first: bool, config: &ImportConfig) -> Option<String> {
    let marked = segment.starts_with('#');
    if !is_first && (config.heading_from_first_segment_only || !marked) {
        return None;
    }
    if segment.chars().count() >= config.heading_max_chars {
        return None;
    }
    Some(segment.trim_start_matches('#').trim().to_string())
}

/// Convert raw text into blocks.
///
/// Blank input yields an empty sequence. Otherwise the output holds one
/// block per non-empty segment, plus the trailing button when enabled.
#[must_use]
pub fn import_text(raw: &str, config: &ImportConfig) -> Vec<Block> {
    let segments = segments(raw);
    if segments.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::with_capacity(segments.len() + 1);
    for (index, segment) in segments.iter().enumerate() {
        let block = match heading_text(segment, index == 0, config) {
            Some(text) if text.is_empty() => continue,
            Some(text) => with_content(BlockVariant::Heading, text),
            None => with_content(BlockVariant::Paragraph, segment.clone()),
        };
        blocks.push(block);
    }

    if config.append_call_to_action {
        blocks.push(create_default(BlockVariant::Button));
    }

    tracing::debug!(
        segments = segments.len(),
        blocks = blocks.len(),
        "imported text"
    );
    blocks
}

fn with_content(variant: BlockVariant, text: String) -> Block {
    let mut block = create_default(variant);
    if let BlockKind::Heading { content } | BlockKind::Paragraph { content } = &mut block.kind {
        *content = text;
    }
    block
}

//! # Letterpress Renderer
//!
//! Projects a block document into a style-resolved presentation tree and
//! serializes that tree to email-safe HTML.
//!
//! ```text
//! ┌──────────┐  render   ┌───────────────────┐  to_html  ┌──────────┐
//! │ [Block]  │ ────────▶ │ PresentationNode  │ ────────▶ │  HTML    │
//! └──────────┘           └───────────────────┘           └──────────┘
//! ```
//!
//! Rendering is pure and offline: no block is mutated, no resource is
//! fetched, and image sources are passed through as given.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod html;
pub mod node;
pub mod render;

pub use error::{RenderError, RenderResult};
pub use node::{GridCell, PresentationNode, RenderedBlock, TextTag};
pub use render::{render, render_document, render_json_lenient, LenientRender};

/// Page settings for [`html::to_html_document`].
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Maximum width of the content column.
    pub content_width: String,
    /// Page background color.
    pub background_color: String,
    /// Base font stack.
    pub font_family: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            content_width: "600px".to_string(),
            background_color: "#ffffff".to_string(),
            font_family: "Arial, sans-serif".to_string(),
        }
    }
}

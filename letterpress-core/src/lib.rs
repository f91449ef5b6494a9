//! # Letterpress Core
//!
//! Editing model for block-based email documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               letterpress-core              │
//! ├─────────────────────────────────────────────┤
//! │  Registry        │  Editor (mutation API)   │
//! │  - Defaults      │  - add / update / delete │
//! │  - Field lists   │  - duplicate / reorder   │
//! │                  │  - undo / redo           │
//! ├─────────────────────────────────────────────┤
//! │  Document        │  History                 │
//! │  - Block order   │  - Snapshot stack        │
//! │  - Selection     │  - Cursor                │
//! ├─────────────────────────────────────────────┤
//! │  Import (text -> blocks)  │  Schema / Store │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The core is synchronous and single-owner: every call runs to completion
//! before the next one starts, so no locking is needed inside an
//! [`Editor`]. Only [`store::DocumentStore`] is shared across threads.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod block;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod history;
pub mod import;
pub mod patch;
pub mod registry;
pub mod schema;
pub mod store;

pub use block::{Block, BlockId, BlockKind, BlockVariant, Column, ListType, StyleMap};
pub use config::{EditorConfig, ImportConfig};
pub use document::Document;
pub use editor::Editor;
pub use error::{EditorError, EditorResult};
pub use history::{History, HistoryOutcome};
pub use import::import_text;
pub use patch::BlockPatch;
pub use registry::{create_default, editable_fields, FieldDescriptor, FieldKind, FieldTarget};

/// Letterpress core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

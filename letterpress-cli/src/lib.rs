//! # Letterpress CLI
//!
//! Drives the editing core from the command line against a directory of
//! stored documents.
//!
//! ## Commands
//!
//! - `import` - turn plain text into a document (heading, paragraphs, button)
//! - `render` - print a document as an HTML fragment, a full page, or a JSON
//!   presentation tree
//! - `fields` - list the editable fields of a block variant
//! - `edit` - apply a JSON script of edit operations as one session
//! - `list` / `delete` - manage stored documents

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use letterpress_core::registry::variant_fields;
use letterpress_core::store::DocumentStore;
use letterpress_core::{
    import_text, BlockId, BlockPatch, BlockVariant, Editor, EditorConfig, EditorError,
    HistoryOutcome,
};
use letterpress_renderer::html::{to_html, to_html_document};
use letterpress_renderer::{render_document, RendererConfig};
use serde::Deserialize;

/// Command-line arguments for letterpress.
#[derive(Debug, Clone, Parser)]
#[command(name = "letterpress")]
#[command(about = "Block-based email document editor")]
#[command(version)]
pub struct CliArgs {
    /// Editor configuration file (JSON)
    #[arg(long, env = "LETTERPRESS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding stored documents
    #[arg(long, env = "LETTERPRESS_DATA_DIR", default_value = "letterpress-data")]
    pub data_dir: PathBuf,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Output format for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// HTML fragment, one line per block
    Html,
    /// Complete HTML page
    Page,
    /// JSON presentation tree
    Tree,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Import plain text into a document
    Import {
        /// Document name
        name: String,
        /// Text file to read (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Append to the existing document instead of replacing it
        #[arg(long)]
        append: bool,
    },

    /// Render a stored document
    Render {
        /// Document name
        name: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = RenderFormat::Html)]
        format: RenderFormat,
        /// Content column width for full pages
        #[arg(long, default_value = "600px")]
        content_width: String,
    },

    /// List the editable fields of a block variant
    Fields {
        /// Variant name (heading, paragraph, button, image, divider, spacer,
        /// columns, list)
        variant: BlockVariant,
    },

    /// Apply a JSON array of edit operations to a document
    Edit {
        /// Document name
        name: String,
        /// Script file
        #[arg(short, long)]
        script: PathBuf,
    },

    /// List stored documents
    List,

    /// Delete a stored document
    Delete {
        /// Document name
        name: String,
    },
}

/// One scripted edit. Blocks are addressed by their position.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum EditOp {
    /// Append a default block.
    Add {
        /// Variant to add.
        variant: BlockVariant,
    },
    /// Patch the block at `index`.
    Update {
        /// Block position.
        index: usize,
        /// Changes to merge.
        patch: BlockPatch,
    },
    /// Remove the block at `index`.
    Delete {
        /// Block position.
        index: usize,
    },
    /// Copy the block at `index` to the next position.
    Duplicate {
        /// Block position.
        index: usize,
    },
    /// Move a block.
    Reorder {
        /// Current position.
        from: usize,
        /// Target position.
        to: usize,
    },
    /// Step back one edit.
    Undo,
    /// Step forward one edit.
    Redo,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EditorConfig> {
    match path {
        Some(path) => EditorConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(EditorConfig::default()),
    }
}

fn block_at(editor: &Editor, index: usize) -> Result<BlockId, EditorError> {
    editor
        .blocks()
        .get(index)
        .map(|block| block.id)
        .ok_or_else(|| EditorError::IndexOutOfRange {
            index,
            len: editor.blocks().len(),
        })
}

/// Apply one scripted edit.
///
/// # Errors
///
/// Returns the editor error for an invalid position or missing block.
pub fn apply_op(editor: &mut Editor, op: &EditOp) -> Result<(), EditorError> {
    match op {
        EditOp::Add { variant } => {
            editor.add(*variant);
        }
        EditOp::Update { index, patch } => {
            let id = block_at(editor, *index)?;
            editor.update(id, patch)?;
        }
        EditOp::Delete { index } => {
            let id = block_at(editor, *index)?;
            editor.delete(id)?;
        }
        EditOp::Duplicate { index } => {
            let id = block_at(editor, *index)?;
            editor.duplicate(id)?;
        }
        EditOp::Reorder { from, to } => editor.reorder(*from, *to)?,
        EditOp::Undo => {
            if editor.undo() == HistoryOutcome::NoOp {
                tracing::info!("Nothing to undo");
            }
        }
        EditOp::Redo => {
            if editor.redo() == HistoryOutcome::NoOp {
                tracing::info!("Nothing to redo");
            }
        }
    }
    Ok(())
}

fn read_text(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read stdin"),
    }
}

fn existing(store: &DocumentStore, name: &str) -> anyhow::Result<Vec<letterpress_core::Block>> {
    if store.contains(name) {
        store
            .load(name)
            .with_context(|| format!("Failed to load document {name}"))
    } else {
        Ok(Vec::new())
    }
}

/// Run a command and return what it prints.
///
/// # Errors
///
/// Returns an error if configuration, storage or an edit fails.
pub fn run(args: &CliArgs) -> anyhow::Result<String> {
    let config = load_config(args.config.as_deref())?;
    let store = DocumentStore::with_data_dir(&args.data_dir)
        .with_context(|| format!("Failed to open data dir {}", args.data_dir.display()))?;

    match &args.command {
        Command::Import {
            name,
            input,
            append,
        } => {
            let text = read_text(input.as_deref())?;
            let mut editor = Editor::with_blocks(existing(&store, name)?, config);
            let imported = import_text(&text, &editor.config().import);
            let count = imported.len();
            if *append {
                editor.append_blocks(imported);
            } else {
                editor.load_blocks(imported);
            }
            store.save(name, editor.blocks())?;
            tracing::info!("Imported {count} block(s) into {name}");
            Ok(format!(
                "{name}: imported {count} block(s), {} total",
                editor.blocks().len()
            ))
        }
        Command::Render {
            name,
            format,
            content_width,
        } => {
            let blocks = store
                .load(name)
                .with_context(|| format!("Failed to load document {name}"))?;
            let rendered = render_document(&blocks);
            match format {
                RenderFormat::Html => Ok(to_html(&rendered)),
                RenderFormat::Page => {
                    let renderer = RendererConfig {
                        content_width: content_width.clone(),
                        ..RendererConfig::default()
                    };
                    Ok(to_html_document(&rendered, &renderer))
                }
                RenderFormat::Tree => Ok(serde_json::to_string_pretty(&rendered)?),
            }
        }
        Command::Fields { variant } => Ok(serde_json::to_string_pretty(&variant_fields(*variant))?),
        Command::Edit { name, script } => {
            let script_text = std::fs::read_to_string(script)
                .with_context(|| format!("Failed to read script {}", script.display()))?;
            let ops: Vec<EditOp> =
                serde_json::from_str(&script_text).context("Invalid edit script")?;

            let mut editor = Editor::with_blocks(existing(&store, name)?, config);
            for (i, op) in ops.iter().enumerate() {
                apply_op(&mut editor, op).with_context(|| format!("Edit {i} failed: {op:?}"))?;
            }
            store.save(name, editor.blocks())?;
            Ok(format!(
                "{name}: applied {} edit(s), {} block(s)",
                ops.len(),
                editor.blocks().len()
            ))
        }
        Command::List => Ok(store.list()?.join("\n")),
        Command::Delete { name } => {
            if store.delete(name) {
                Ok(format!("Deleted {name}"))
            } else {
                anyhow::bail!("No document named {name}")
            }
        }
    }
}

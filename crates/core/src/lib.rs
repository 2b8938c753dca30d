//! Markdown vault ingestion and indexing.
//!
//! A vault is a directory of markdown notes and images. [`vault::Vault`]
//! walks it, parses each note's frontmatter and wikilinks, and derives a
//! navigation tree and a reference graph for the rendering layer.

pub mod config;
pub mod frontmatter;
pub mod markup;
pub mod note;
pub mod vault;
pub mod wikilink;

pub use note::{Note, NoteError, NoteOutcome, SkipReason};
pub use vault::{ItemPath, Vault, VaultError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

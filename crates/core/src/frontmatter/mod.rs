//! Frontmatter extraction.
//!
//! This module provides functionality to:
//! - Split a YAML frontmatter block from the body of a markdown document
//! - Validate the block as a string-keyed mapping
//! - Read normalized tags from the decoded metadata

pub mod parser;
pub mod types;

pub use parser::{FrontmatterParseError, parse};
pub use types::{Metadata, ParsedDocument};

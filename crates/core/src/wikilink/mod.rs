//! Wikilink recognition.
//!
//! Body text is split into bracket and text tokens by [`Lexer`] and fed one
//! token at a time through [`WikilinkScanner`], a small state machine that
//! emits a [`Wikilink`] each time a `[[...]]` or `![[...]]` sequence closes.

pub mod lexer;
pub mod scanner;
pub mod types;

pub use lexer::{Lexer, Token};
pub use scanner::{References, ScanState, WikilinkScanner, scan, transition};
pub use types::Wikilink;

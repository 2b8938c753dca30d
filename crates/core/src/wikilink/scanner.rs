//! Token-fed state machine recognizing `[[target|label]]` and `![[target]]`.

use super::lexer::{Lexer, Token};
use super::types::Wikilink;

/// Position of the scanner inside a bracket sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Start,
    FirstOpen,
    SecondOpen,
    Text,
    FirstClose,
}

/// Side effect attached to a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    /// Nothing to record.
    Stay,
    /// A sequence opened; remember whether it is an embed.
    Begin { embedded: bool },
    /// Text between the brackets becomes the pending link.
    Capture(&'a str),
    /// The sequence closed; hand out the pending link.
    Emit,
}

/// Transition table of the scanner. Any pair not listed leaves the state
/// unchanged.
pub fn transition<'a>(state: ScanState, token: &Token<'a>) -> (ScanState, Action<'a>) {
    use ScanState::*;

    match (state, token) {
        (Start, Token::EmbedOpen) => (FirstOpen, Action::Begin { embedded: true }),
        (Start, Token::Open) => (FirstOpen, Action::Begin { embedded: false }),
        (FirstOpen, Token::Open) => (SecondOpen, Action::Stay),
        (SecondOpen, Token::Text(text)) => (Text, Action::Capture(*text)),
        (Text, Token::Close) => (FirstClose, Action::Stay),
        (FirstClose, Token::Close) => (Start, Action::Emit),
        (state, _) => (state, Action::Stay),
    }
}

/// Incremental wikilink recognizer.
///
/// Fed one unit at a time; returns a link only on the `]` that completes a
/// sequence. Unterminated sequences are never emitted.
#[derive(Debug, Default)]
pub struct WikilinkScanner {
    state: ScanState,
    embedded: bool,
    pending: Option<Wikilink>,
}

impl WikilinkScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Drop any partial sequence and return to [`ScanState::Start`].
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Feed a literal bracket string (`"!["`, `"["`, `"]"`) or a text run.
    pub fn feed(&mut self, input: &str) -> Option<Wikilink> {
        self.feed_token(Token::classify(input))
    }

    pub fn feed_token(&mut self, token: Token<'_>) -> Option<Wikilink> {
        let (next, action) = transition(self.state, &token);
        self.state = next;

        match action {
            Action::Stay => None,
            Action::Begin { embedded } => {
                self.embedded = embedded;
                None
            }
            Action::Capture(text) => {
                self.pending = Some(Wikilink::from_inner(text, self.embedded));
                None
            }
            Action::Emit => {
                self.embedded = false;
                self.pending.take()
            }
        }
    }
}

/// Lazy iterator over the wikilinks of a text.
pub struct References<'a> {
    lexer: Lexer<'a>,
    scanner: WikilinkScanner,
}

impl Iterator for References<'_> {
    type Item = Wikilink;

    fn next(&mut self) -> Option<Self::Item> {
        for token in self.lexer.by_ref() {
            if let Some(link) = self.scanner.feed_token(token) {
                return Some(link);
            }
        }
        None
    }
}

/// Scan `text` with a fresh scanner.
pub fn scan(text: &str) -> References<'_> {
    References { lexer: Lexer::new(text), scanner: WikilinkScanner::new() }
}

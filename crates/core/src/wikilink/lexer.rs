//! Splits text into the units the wikilink scanner consumes.

use std::iter::Peekable;
use std::str::CharIndices;

/// A lexical unit of note text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `![`
    EmbedOpen,
    /// `[`
    Open,
    /// `]`
    Close,
    /// A maximal run of any other characters.
    Text(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a single fed string.
    pub fn classify(input: &'a str) -> Self {
        match input {
            "![" => Self::EmbedOpen,
            "[" => Self::Open,
            "]" => Self::Close,
            text => Self::Text(text),
        }
    }
}

/// Iterator over the [`Token`]s of a string slice.
pub struct Lexer<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, chars: text.char_indices().peekable() }
    }

    fn opens_at(&self, idx: usize, c: char) -> bool {
        match c {
            '[' | ']' => true,
            '!' => self.text[idx + 1..].starts_with('['),
            _ => false,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let &(start, c) = self.chars.peek()?;

        match c {
            '[' => {
                self.chars.next();
                return Some(Token::Open);
            }
            ']' => {
                self.chars.next();
                return Some(Token::Close);
            }
            '!' if self.text[start + 1..].starts_with('[') => {
                self.chars.next();
                self.chars.next();
                return Some(Token::EmbedOpen);
            }
            _ => {}
        }

        self.chars.next();
        let mut end = start + c.len_utf8();
        while let Some(&(idx, next)) = self.chars.peek() {
            if self.opens_at(idx, next) {
                break;
            }
            self.chars.next();
            end = idx + next.len_utf8();
        }

        Some(Token::Text(&self.text[start..end]))
    }
}

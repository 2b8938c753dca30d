//! Wikilink token type.

use std::fmt;

use serde::Serialize;

/// A reference recognized in note text.
///
/// Embedded references (`![[target]]`) never carry a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Wikilink {
    /// Raw target as written between the brackets.
    pub target: String,
    /// Display text after the first `|`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the target should be embedded rather than linked.
    pub embedded: bool,
}

impl Wikilink {
    pub fn new(target: impl Into<String>, label: Option<String>) -> Self {
        Self { target: target.into(), label, embedded: false }
    }

    pub fn embedded(target: impl Into<String>) -> Self {
        Self { target: target.into(), label: None, embedded: true }
    }

    /// Decode the text between the brackets.
    ///
    /// The text is split on the first `|` into target and label. For embeds
    /// the label segment is dropped.
    pub fn from_inner(text: &str, embedded: bool) -> Self {
        let (target, label) = match text.split_once('|') {
            Some((target, label)) => (target, Some(label.to_string())),
            None => (text, None),
        };

        if embedded { Self::embedded(target) } else { Self::new(target, label) }
    }

    /// Target without any `#heading` or `#^block` suffix.
    pub fn target_name(&self) -> &str {
        self.target.split_once('#').map_or(self.target.as_str(), |(name, _)| name)
    }

    /// Text to show for this link: the label, or the target otherwise.
    pub fn display_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.target)
    }
}

impl fmt::Display for Wikilink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.label, self.embedded) {
            (_, true) => write!(f, "![[{}]]", self.target),
            (Some(label), false) => write!(f, "[[{}|{}]]", self.target, label),
            (None, false) => write!(f, "[[{}]]", self.target),
        }
    }
}

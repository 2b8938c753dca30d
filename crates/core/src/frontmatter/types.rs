//! Frontmatter types and data structures.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::parser::FrontmatterParseError;

/// Decoded YAML frontmatter of a note.
///
/// Keys are guaranteed to be strings; insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: Mapping,
}

impl Metadata {
    /// Wrap a decoded mapping, rejecting non-string keys.
    pub fn from_mapping(fields: Mapping) -> Result<Self, FrontmatterParseError> {
        if let Some(key) = fields.keys().find(|k| !k.is_string()) {
            return Err(FrontmatterParseError::NonStringKey(describe_key(key)));
        }
        Ok(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().filter_map(|(k, v)| k.as_str().map(|k| (k, v)))
    }

    /// Tags declared through `tag` and `tags`.
    ///
    /// `tag` is a comma separated string, `tags` a sequence. Entries from
    /// `tag` come first. Blank tokens, non-string entries and repeats are
    /// dropped.
    ///
    /// ```
    /// use mdgarden_core::frontmatter::parse;
    ///
    /// let doc = parse("---\ntag: a, b\ntags: [c, d]\n---\nbody").unwrap();
    /// assert_eq!(doc.metadata().tags(), ["a", "b", "c", "d"]);
    /// ```
    pub fn tags(&self) -> Vec<String> {
        let from_tag = self
            .get_str("tag")
            .into_iter()
            .flat_map(|s| s.split(','))
            .map(str::trim)
            .filter(|t| !t.is_empty());

        let from_tags = self
            .get("tags")
            .and_then(Value::as_sequence)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str);

        let mut tags: Vec<String> = Vec::new();
        for tag in from_tag.chain(from_tags) {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        tags
    }

    /// Serialize the fields as JSON for rendering contexts.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.fields).unwrap_or(serde_json::Value::Null)
    }
}

fn describe_key(key: &Value) -> String {
    serde_yaml::to_string(key)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| format!("{key:?}"))
}

/// Result of splitting frontmatter from markdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// Parsed frontmatter, `None` when the document has no delimited block.
    pub frontmatter: Option<Metadata>,
    /// The markdown body (everything after frontmatter).
    pub body: String,
}

impl ParsedDocument {
    /// Frontmatter, or empty metadata when none was present.
    pub fn metadata(&self) -> Metadata {
        self.frontmatter.clone().unwrap_or_default()
    }
}

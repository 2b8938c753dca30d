//! Frontmatter parsing from markdown documents.

use serde_yaml::Value;
use thiserror::Error;

use super::types::{Metadata, ParsedDocument};

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML in frontmatter section: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("frontmatter must be a mapping, found {0}")]
    NotAMapping(&'static str),

    #[error("frontmatter mapping key is not a string: {0}")]
    NonStringKey(String),
}

impl FrontmatterParseError {
    /// Whether the block decoded but has the wrong shape (non-mapping
    /// document or non-string key).
    pub fn is_key_type_error(&self) -> bool {
        matches!(self, Self::NotAMapping(_) | Self::NonStringKey(_))
    }
}

const DELIMITER: &str = "---";

/// Editors on Windows often save UTF-8 with a leading BOM.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse frontmatter from markdown content.
///
/// Frontmatter is delimited by `---` lines and must open on the first
/// non-blank line of the document:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
/// Without an opening and a closing delimiter the document is returned
/// unchanged with no frontmatter.
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterParseError> {
    let Some((yaml, body)) = split(content) else {
        return Ok(ParsedDocument { frontmatter: None, body: content.to_string() });
    };

    let metadata = if yaml.trim().is_empty() {
        Metadata::default()
    } else {
        match serde_yaml::from_str::<Value>(yaml)? {
            Value::Mapping(mapping) => Metadata::from_mapping(mapping)?,
            Value::Null => Metadata::default(),
            other => return Err(FrontmatterParseError::NotAMapping(kind_of(&other))),
        }
    };

    Ok(ParsedDocument { frontmatter: Some(metadata), body: body.to_string() })
}

/// Split content into the raw frontmatter block and the body.
fn split(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut lines = LineSpans::new(content);

    let opening = lines.find(|(_, _, line)| !line.trim().is_empty())?;
    if !is_delimiter(opening.2) {
        return None;
    }
    let yaml_start = opening.1;

    let (close_start, close_end, _) = lines.find(|(_, _, line)| is_delimiter(line))?;
    Some((&content[yaml_start..close_start], &content[close_end..]))
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Lines of a string with their byte spans.
///
/// Yields `(start, end, line)` where `end` is past the line terminator and
/// `line` excludes it.
struct LineSpans<'a> {
    content: &'a str,
    pos: usize,
}

impl<'a> LineSpans<'a> {
    fn new(content: &'a str) -> Self {
        Self { content, pos: 0 }
    }
}

impl<'a> Iterator for LineSpans<'a> {
    type Item = (usize, usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.content.len() {
            return None;
        }
        let start = self.pos;
        let rest = &self.content[start..];
        let (line, end) = match rest.find('\n') {
            Some(i) => (&rest[..i], start + i + 1),
            None => (rest, self.content.len()),
        };
        self.pos = end;
        Some((start, end, line.strip_suffix('\r').unwrap_or(line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_frontmatter() {
        let content = "# Hello\n\nSome content";
        let result = parse(content).unwrap();
        assert!(result.frontmatter.is_none());
        assert!(result.metadata().is_empty());
        assert_eq!(result.body, content);
    }

    #[test]
    fn parse_simple_frontmatter() {
        let content = "---\ntitle: Hello\n---\n# Content";
        let result = parse(content).unwrap();
        let fm = result.frontmatter.unwrap();
        assert_eq!(fm.get_str("title"), Some("Hello"));
        assert_eq!(result.body, "# Content");
    }

    #[test]
    fn parse_frontmatter_with_multiple_fields() {
        let content =
            "---\ntitle: Test\ndate: 2024-01-15\ntags:\n  - rust\n  - cli\n---\n\nBody";
        let result = parse(content).unwrap();
        let fm = result.frontmatter.unwrap();
        assert_eq!(fm.get_str("title"), Some("Test"));
        assert_eq!(fm.tags(), vec!["rust", "cli"]);
        assert_eq!(result.body, "\nBody");
    }

    #[test]
    fn parse_empty_frontmatter_is_present_but_empty() {
        let content = "---\n---\n# Content";
        let result = parse(content).unwrap();
        assert!(result.frontmatter.is_some());
        assert!(result.frontmatter.unwrap().is_empty());
        assert_eq!(result.body, "# Content");
    }

    #[test]
    fn leading_blank_lines_before_opening_delimiter() {
        let content = "\n---\ntag: hello, world\n---\nBody text.\n";
        let result = parse(content).unwrap();
        assert_eq!(result.metadata().tags(), vec!["hello", "world"]);
        assert_eq!(result.body, "Body text.\n");
    }

    #[test]
    fn crlf_delimiters() {
        let content = "---\r\ntitle: Win\r\n---\r\nBody";
        let result = parse(content).unwrap();
        assert_eq!(result.metadata().get_str("title"), Some("Win"));
        assert_eq!(result.body, "Body");
    }

    #[test]
    fn unclosed_frontmatter_is_body() {
        let content = "---\ntitle: Open\nno closing";
        let result = parse(content).unwrap();
        assert!(result.frontmatter.is_none());
        assert_eq!(result.body, content);
    }

    #[test]
    fn horizontal_rules_later_in_body_are_not_frontmatter() {
        let content = "Intro\n\n---\n\nMiddle\n\n---\n";
        let result = parse(content).unwrap();
        assert!(result.frontmatter.is_none());
        assert_eq!(result.body, content);
    }

    #[test]
    fn delimiter_must_be_exact() {
        let content = "----\ntitle: x\n----\nbody";
        assert!(parse(content).unwrap().frontmatter.is_none());
    }

    #[test]
    fn closing_delimiter_at_end_of_file() {
        let result = parse("---\na: 1\n---").unwrap();
        assert_eq!(result.metadata().len(), 1);
        assert_eq!(result.body, "");
    }

    #[test]
    fn invalid_yaml_is_decode_error() {
        let err = parse("---\ntitle: [unclosed\n---\nbody").unwrap_err();
        assert!(matches!(err, FrontmatterParseError::InvalidYaml(_)));
        assert!(!err.is_key_type_error());
    }

    #[test]
    fn scalar_frontmatter_is_key_type_error() {
        let err = parse("---\njust a string\n---\nbody").unwrap_err();
        assert!(matches!(err, FrontmatterParseError::NotAMapping("a string")));
        assert!(err.is_key_type_error());
    }

    #[test]
    fn sequence_frontmatter_is_key_type_error() {
        let err = parse("---\n- a\n- b\n---\nbody").unwrap_err();
        assert!(matches!(err, FrontmatterParseError::NotAMapping("a sequence")));
    }

    #[test]
    fn non_string_key_is_key_type_error() {
        let err = parse("---\n42: answer\n---\nbody").unwrap_err();
        assert!(matches!(err, FrontmatterParseError::NonStringKey(_)));
        assert!(err.is_key_type_error());
    }

    #[test]
    fn comment_only_block_is_empty_metadata() {
        let result = parse("---\n# nothing here\n---\nbody").unwrap();
        assert!(result.frontmatter.unwrap().is_empty());
    }

    #[test]
    fn byte_order_mark_before_opening_delimiter() {
        let result = parse("\u{feff}---\ntags: [x]\n---\nbody").unwrap();
        let fm = result.frontmatter.unwrap();
        assert_eq!(fm.tags(), vec!["x"]);
        assert_eq!(result.body, "body");
    }

    #[test]
    fn byte_order_mark_without_frontmatter_is_kept() {
        let result = parse("\u{feff}# Title\n").unwrap();
        assert!(result.frontmatter.is_none());
        assert_eq!(result.body, "\u{feff}# Title\n");
    }
}

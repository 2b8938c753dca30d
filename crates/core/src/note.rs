//! Notes: frontmatter, tags and wikilinks of a single markdown file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::frontmatter::{self, FrontmatterParseError, Metadata};
use crate::markup::MarkupRenderer;
use crate::wikilink::{self, Wikilink};

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("not a regular file: {0}")]
    MissingFile(PathBuf),

    #[error("failed to read note {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Frontmatter(#[from] FrontmatterParseError),
}

/// Why a well-formed note was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Frontmatter sets `publish: false`.
    Unpublished,
}

/// Outcome of parsing a note that did not fail.
#[derive(Debug, Clone)]
pub enum NoteOutcome {
    Parsed(Note),
    Skipped(SkipReason),
}

impl NoteOutcome {
    pub fn into_note(self) -> Option<Note> {
        match self {
            Self::Parsed(note) => Some(note),
            Self::Skipped(_) => None,
        }
    }
}

/// A parsed markdown note.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    /// Title taken from the file name.
    pub title: String,
    /// Markdown body with the frontmatter block removed.
    pub body: String,
    pub tags: Vec<String>,
    /// Wikilinks in body order.
    pub references: Vec<Wikilink>,
    pub metadata: Metadata,
    /// Whether the source had a delimited frontmatter block, even an empty one.
    pub has_frontmatter: bool,
}

impl Note {
    /// Parse note content.
    ///
    /// A missing or empty frontmatter block still yields a note. Notes that
    /// opt out with `publish: false` are skipped.
    pub fn parse(title: &str, content: &str) -> Result<NoteOutcome, NoteError> {
        let parsed = frontmatter::parse(content)?;
        let has_frontmatter = parsed.frontmatter.is_some();
        let metadata = parsed.frontmatter.unwrap_or_default();

        if is_unpublished(&metadata) {
            return Ok(NoteOutcome::Skipped(SkipReason::Unpublished));
        }

        let tags = metadata.tags();
        let references = wikilink::scan(&parsed.body).collect();

        Ok(NoteOutcome::Parsed(Note {
            title: title.to_string(),
            body: parsed.body,
            tags,
            references,
            metadata,
            has_frontmatter,
        }))
    }

    /// Read and parse a note file. The title is the file stem.
    pub fn from_file(path: &Path) -> Result<NoteOutcome, NoteError> {
        if !path.is_file() {
            return Err(NoteError::MissingFile(path.to_path_buf()));
        }

        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| NoteError::MissingFile(path.to_path_buf()))?;

        let content = fs::read_to_string(path)
            .map_err(|source| NoteError::Read { path: path.to_path_buf(), source })?;

        Self::parse(&title, &content)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Non-embedded references.
    pub fn links(&self) -> impl Iterator<Item = &Wikilink> {
        self.references.iter().filter(|r| !r.embedded)
    }

    pub fn embeds(&self) -> impl Iterator<Item = &Wikilink> {
        self.references.iter().filter(|r| r.embedded)
    }

    pub fn render_html(&self, renderer: &dyn MarkupRenderer) -> String {
        renderer.render(&self.body)
    }
}

fn is_unpublished(metadata: &Metadata) -> bool {
    metadata.get("publish").and_then(serde_yaml::Value::as_bool) == Some(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ComrakRenderer;
    use std::fs;
    use tempfile::TempDir;

    fn parsed(title: &str, content: &str) -> Note {
        Note::parse(title, content).unwrap().into_note().expect("note should parse")
    }

    #[test]
    fn parse_collects_tags_and_references() {
        let content = "---\ntag: a, b\ntags: [c]\n---\nSee [[Other]] and ![[pic.png]].";
        let note = parsed("Title", content);

        assert_eq!(note.title, "Title");
        assert_eq!(note.tags, vec!["a", "b", "c"]);
        assert_eq!(
            note.references,
            vec![Wikilink::new("Other", None), Wikilink::embedded("pic.png")]
        );
        assert_eq!(note.body, "See [[Other]] and ![[pic.png]].");
        assert!(note.has_frontmatter);
    }

    #[test]
    fn note_without_frontmatter_still_parses() {
        let note = parsed("plain", "Just text with [[link]].");
        assert!(!note.has_frontmatter);
        assert!(note.metadata.is_empty());
        assert!(note.tags.is_empty());
        assert_eq!(note.references.len(), 1);
    }

    #[test]
    fn empty_frontmatter_is_distinct_from_none() {
        let note = parsed("empty", "---\n---\nbody");
        assert!(note.has_frontmatter);
        assert!(note.metadata.is_empty());
        assert_eq!(note.body, "body");
    }

    #[test]
    fn title_ignores_metadata_title() {
        let note = parsed("from-file", "---\ntitle: From Metadata\n---\n");
        assert_eq!(note.title, "from-file");
        assert_eq!(note.metadata.get_str("title"), Some("From Metadata"));
    }

    #[test]
    fn unpublished_note_is_skipped() {
        let outcome = Note::parse("draft", "---\npublish: false\n---\nWIP").unwrap();
        assert!(matches!(outcome, NoteOutcome::Skipped(SkipReason::Unpublished)));

        let outcome = Note::parse("live", "---\npublish: true\n---\nDone").unwrap();
        assert!(matches!(outcome, NoteOutcome::Parsed(_)));
    }

    #[test]
    fn frontmatter_errors_propagate() {
        let err = Note::parse("bad", "---\n- not\n- a map\n---\n").unwrap_err();
        assert!(matches!(err, NoteError::Frontmatter(ref e) if e.is_key_type_error()));

        let err = Note::parse("bad", "---\nkey: [\n---\n").unwrap_err();
        assert!(matches!(err, NoteError::Frontmatter(FrontmatterParseError::InvalidYaml(_))));
    }

    #[test]
    fn links_and_embeds_are_partitioned() {
        let note = parsed("n", "[[a]] ![[b.png]] [[c|C]]");
        let links: Vec<_> = note.links().map(|l| l.target.as_str()).collect();
        let embeds: Vec<_> = note.embeds().map(|l| l.target.as_str()).collect();
        assert_eq!(links, vec!["a", "c"]);
        assert_eq!(embeds, vec!["b.png"]);
    }

    #[test]
    fn from_file_uses_stem_as_title() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("My Note.md");
        fs::write(&path, "---\ntags: [x]\n---\nHello").unwrap();

        let note = Note::from_file(&path).unwrap().into_note().unwrap();
        assert_eq!(note.title, "My Note");
        assert!(note.has_tag("x"));
        assert!(!note.has_tag("y"));
    }

    #[test]
    fn from_file_rejects_directories_and_missing_paths() {
        let dir = TempDir::new().unwrap();

        let err = Note::from_file(dir.path()).unwrap_err();
        assert!(matches!(err, NoteError::MissingFile(_)));

        let err = Note::from_file(&dir.path().join("absent.md")).unwrap_err();
        assert!(matches!(err, NoteError::MissingFile(_)));
    }

    #[test]
    fn render_html_uses_body_only() {
        let note = parsed("n", "---\nsecret: value\n---\n# Heading");
        let html = note.render_html(&ComrakRenderer::new());
        assert!(html.contains("<h1>Heading</h1>"));
        assert!(!html.contains("secret"));
    }
}

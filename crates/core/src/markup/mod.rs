//! Markdown to HTML conversion used by the rendering layer.

mod comrak;

pub use self::comrak::ComrakRenderer;

/// Turns note body text into presentation markup.
pub trait MarkupRenderer {
    fn render(&self, markdown: &str) -> String;
}

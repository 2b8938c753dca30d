use comrak::{Options, markdown_to_html};

use super::MarkupRenderer;

/// [`MarkupRenderer`] backed by comrak with the GFM extensions notes
/// commonly rely on.
#[derive(Debug, Clone)]
pub struct ComrakRenderer {
    options: Options<'static>,
}

impl ComrakRenderer {
    pub fn new() -> Self {
        let mut options = Options::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        Self { options }
    }

    /// Allow raw HTML in note bodies to pass through.
    pub fn with_unsafe_html(mut self) -> Self {
        self.options.render.unsafe_ = true;
        self
    }
}

impl Default for ComrakRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupRenderer for ComrakRenderer {
    fn render(&self, markdown: &str) -> String {
        markdown_to_html(markdown, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_heading_and_paragraph() {
        let html = ComrakRenderer::new().render("# Title\n\nSome *text*.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn renders_tables() {
        let html = ComrakRenderer::new().render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn raw_html_is_escaped_by_default() {
        let html = ComrakRenderer::new().render("<script>x</script>");
        assert!(!html.contains("<script>"));

        let html = ComrakRenderer::new().with_unsafe_html().render("<b>x</b>");
        assert!(html.contains("<b>x</b>"));
    }
}

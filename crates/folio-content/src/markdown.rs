//! Markdown to HTML.

use pulldown_cmark::{html, Options, Parser};

/// Render a Markdown fragment to HTML.
pub fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(content, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_paragraphs_and_emphasis() {
        let html = render_markdown("I work on **RAG pipelines**.\n\nSecond paragraph.");

        assert!(html.contains("<p>I work on <strong>RAG pipelines</strong>.</p>"));
        assert!(html.contains("<p>Second paragraph.</p>"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_markdown(""), "");
    }
}

use pulldown_cmark::{Event, Options, Parser};

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts
}

/// Render a chat answer to HTML. Raw HTML in the source is shown as text.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, parser_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_out = String::new();
    pulldown_cmark::html::push_html(&mut html_out, parser);
    html_out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_emphasis_and_lists() {
        let html = render_markdown("**Dune** est disponible :\n\n- tome 1\n- tome 2");
        assert!(html.contains("<strong>Dune</strong>"));
        assert!(html.contains("<li>tome 1</li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

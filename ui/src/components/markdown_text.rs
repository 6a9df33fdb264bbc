//! Renders generated answers as markdown.
//!
//! Uses pulldown-cmark with raw HTML disabled, so model output cannot inject
//! markup.

use pulldown_cmark::{Options, Parser, html};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The markdown text to render.
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn MarkdownText(props: &Props) -> Html {
    let html_content = render_markdown(&props.text);

    let base_classes = classes!(
        "prose",
        "prose-slate",
        "prose-sm",
        "max-w-none",
        "prose-p:my-1",
        "prose-ul:my-1",
        "prose-li:my-0",
        props.class.clone()
    );

    html! {
        <div class={base_classes}>
            { Html::from_html_unchecked(html_content.into()) }
        </div>
    }
}

/// Markdown to HTML with raw HTML escaped rather than rendered.
fn render_markdown(markdown: &str) -> String {
    // Do NOT enable ENABLE_RAW_HTML
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        pulldown_cmark::Event::Html(raw)
        | pulldown_cmark::Event::InlineHtml(raw) => {
            pulldown_cmark::Event::Text(raw)
        }
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_render_as_a_list() {
        let html = render_markdown("* Sort waste\n* Pay on time");
        assert!(html.contains("<li>Sort waste</li>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("Green bin <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

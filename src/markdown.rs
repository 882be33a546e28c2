mod render;
mod tree;

use maud::{Markup, Render};
use pulldown_cmark::{Options, Parser};

pub use render::{Styled, StyledList, Theme};
pub use tree::{Element, Node};

use tree::TreeBuilder;

pub fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_GFM);
    options
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        let mut builder = TreeBuilder::default();
        for event in Parser::new_ext(body, options()) {
            builder.push(event);
        }
        Self {
            nodes: builder.finish(),
        }
    }

    pub fn render(&self, theme: &Theme) -> Markup {
        StyledList {
            nodes: &self.nodes,
            theme,
        }
        .render()
    }
}

pub fn render(body: &str, theme: &Theme) -> Markup {
    Document::parse(body).render(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(src: &str) -> String {
        render(src, &Theme::default()).into_string()
    }

    #[test]
    fn headings_get_their_classes() {
        let out = html("# One\n\n## Two\n\n### Three\n\n#### Four\n");
        let theme = Theme::default();
        assert!(out.contains(&format!("<h1 class=\"{}\">One</h1>", theme.h1)));
        assert!(out.contains(&format!("<h2 class=\"{}\">Two</h2>", theme.h2)));
        assert!(out.contains(&format!("<h3 class=\"{}\">Three</h3>", theme.h3)));
        assert!(out.contains("<h4>Four</h4>"));
    }

    #[test]
    fn links_open_in_new_context() {
        let out = html("[site](https://example.com)");
        assert!(out.contains("href=\"https://example.com\""));
        assert!(out.contains("target=\"_blank\""));
        assert!(out.contains("rel=\"noopener noreferrer\""));
        assert!(!out.contains("title="));
    }

    #[test]
    fn fenced_code_is_flat_pre_code_pair() {
        let out = html("```rust\nfn main() {}\n```\n");
        let theme = Theme::default();
        assert!(out.contains(&format!(
            "<pre class=\"{} language-rust\"><code class=\"language-rust\">fn main() {{}}\n</code></pre>",
            theme.code_block
        )));
    }

    #[test]
    fn code_without_language_falls_back() {
        let out = html("```\nplain\n```\n");
        assert!(out.contains("<code>plain\n</code>"));
        assert!(!out.contains("language-"));

        let indented = html("    let x = 1;\n");
        assert!(indented.contains("<code>let x = 1;\n</code>"));
    }

    #[test]
    fn code_is_escaped() {
        let out = html("```html\n<b>x</b>\n```\n");
        assert!(out.contains("&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn loose_list_items_are_unwrapped() {
        let out = html("- a\n\n- b\n");
        let theme = Theme::default();
        assert!(out.contains(&format!("<li class=\"{}\">a</li>", theme.list_item)));
        assert!(!out.contains("<p"));
    }

    #[test]
    fn multi_paragraph_items_keep_paragraphs() {
        let out = html("- first\n\n  second\n");
        assert_eq!(out.matches("<p ").count(), 2);
    }

    #[test]
    fn ordered_list_start() {
        let out = html("3. c\n4. d\n");
        assert!(out.contains("<ol class="));
        assert!(out.contains("start=\"3\""));
        assert!(!html("1. a\n").contains("start="));
    }

    #[test]
    fn raw_html_passes_through() {
        let out = html("<div class=\"note\">hi</div>\n\ntext with <kbd>K</kbd>\n");
        assert!(out.contains("<div class=\"note\">hi</div>"));
        assert!(out.contains("<kbd>K</kbd>"));
    }

    #[test]
    fn gfm_extensions() {
        let out = html("~~old~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n- [x] done\n");
        assert!(out.contains("<del>old</del>"));
        assert!(out.contains("<thead><tr><th>a</th><th>b</th></tr></thead>"));
        assert!(out.contains("<tbody><tr><td>1</td><td>2</td></tr></tbody>"));
        assert!(out.contains("type=\"checkbox\""));
        assert!(out.contains("checked"));
    }

    #[test]
    fn blockquote_and_rule() {
        let theme = Theme::default();
        let out = html("> quoted\n\n---\n");
        assert!(out.contains(&format!("<blockquote class=\"{}\">", theme.blockquote)));
        assert!(out.contains(&format!("<hr class=\"{}\">", theme.rule)));
    }

    #[test]
    fn bare_urls_become_links() {
        let out = html("visit https://example.com today, or www.rust-lang.org.\n");
        assert!(out.contains(concat!(
            "href=\"https://example.com\" target=\"_blank\" ",
            "rel=\"noopener noreferrer\">https://example.com</a> today"
        )));
        assert!(out.contains("href=\"http://www.rust-lang.org\""));
        assert!(out.contains(">www.rust-lang.org</a>."));
    }

    #[test]
    fn urls_in_code_and_links_stay_literal() {
        let out = html("`https://a.example` and [https://b.example](https://c.example)\n");
        assert!(out.contains(">https://a.example</code>"));
        assert_eq!(out.matches("<a ").count(), 1);
        assert!(out.contains("href=\"https://c.example\""));

        let fenced = html("```\nhttps://d.example\n```\n");
        assert!(!fenced.contains("<a "));
    }

    #[test]
    fn plain_domains_are_not_linked() {
        assert!(!html("see main.rs for details\n").contains("<a "));
    }

    #[test]
    fn blockquote_alerts() {
        let out = html("> [!NOTE]\n> Heads up.\n");
        assert!(out.contains("markdown-alert markdown-alert-note"));
        assert!(out.contains("Heads up."));
    }

    #[test]
    fn inline_code_class() {
        let theme = Theme::default();
        let out = html("use `cargo`");
        assert!(out.contains(&format!("<code class=\"{}\">cargo</code>", theme.inline_code)));
    }
}

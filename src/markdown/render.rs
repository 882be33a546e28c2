use maud::{html, Markup, PreEscaped, Render};
use serde::Deserialize;

use super::tree::{Element, Node};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub paragraph: String,
    pub link: String,
    pub inline_code: String,
    pub code_block: String,
    pub blockquote: String,
    pub rule: String,
    pub unordered_list: String,
    pub ordered_list: String,
    pub list_item: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            h1: "text-5xl sm:text-5xl font-bold tracking-wide mb-8 text-gray-900".into(),
            h2: "text-4xl sm:text-4xl font-semibold tracking-wide my-8 text-gray-800".into(),
            h3: "text-2xl sm:text-2xl font-medium my-3 text-gray-700".into(),
            paragraph: "text-lg leading-relaxed mb-6 text-gray-800".into(),
            link: concat!(
                "text-gray-800 hover:text-gray-900 underline decoration-transparent ",
                "hover:underline decoration-gray-300 transition duration-300 ease-in-out"
            )
            .into(),
            inline_code: "bg-gray-200 text-sm text-black px-1 py-0.5 shadow-sm".into(),
            code_block: "bg-gray-900 text-white text-sm p-6 overflow-x-auto rounded-xl shadow-lg"
                .into(),
            blockquote: "border-l-4 border-gray-300 pl-4 text-gray-600 my-6".into(),
            rule: "my-12 border-t border-gray-300".into(),
            unordered_list: "list-disc list-outside space-y-2 pl-5 text-gray-800".into(),
            ordered_list: "list-decimal list-outside space-y-2 pl-5 text-gray-800".into(),
            list_item: "leading-relaxed list-item".into(),
        }
    }
}

pub struct Styled<'a> {
    pub node: &'a Node,
    pub theme: &'a Theme,
}

pub struct StyledList<'a> {
    pub nodes: &'a [Node],
    pub theme: &'a Theme,
}

impl Render for StyledList<'_> {
    fn render(&self) -> Markup {
        let theme = self.theme;
        html! {
            @for node in self.nodes {
                (Styled { node, theme })
            }
        }
    }
}

impl Render for Styled<'_> {
    fn render(&self) -> Markup {
        let theme = self.theme;
        match self.node {
            Node::Text(text) => html! { (text) },
            Node::InlineCode(code) => html! { code class=(theme.inline_code) { (code) } },
            Node::Html(raw) => PreEscaped(raw.clone()),
            Node::FootnoteReference(label) => html! {
                sup.footnote-reference { a href={ "#" (label) } { (label) } }
            },
            Node::TaskMarker(checked) => html! {
                input type="checkbox" disabled checked[*checked];
            },
            Node::SoftBreak => html! { "\n" },
            Node::HardBreak => html! { br; },
            Node::Rule => html! { hr class=(theme.rule); },
            Node::Element(element, children) => render_element(element, children, theme),
        }
    }
}

fn render_code_block(language: Option<&str>, children: &[Node], theme: &Theme) -> Markup {
    let code: String = children.iter().map(Node::text).collect();
    match language {
        Some(language) => {
            let language_class = format!("language-{language}");
            html! {
                div.relative {
                    pre class={ (theme.code_block) " " (language_class) } {
                        code class=(language_class) { (code) }
                    }
                }
            }
        }
        // no language to tag the pair with
        None => html! {
            div.relative {
                pre class=(theme.code_block) { code { (code) } }
            }
        },
    }
}

fn render_item(children: &[Node], theme: &Theme) -> Markup {
    let inner = match children {
        [Node::Element(Element::Paragraph, inline)] => inline.as_slice(),
        _ => children,
    };
    html! {
        li class=(theme.list_item) { (StyledList { nodes: inner, theme }) }
    }
}

fn render_table(children: &[Node], theme: &Theme) -> Markup {
    let (head, rows): (Vec<&Node>, Vec<&Node>) = children
        .iter()
        .partition(|n| matches!(n, Node::Element(Element::TableHead, _)));
    html! {
        table {
            @for node in head {
                (Styled { node, theme })
            }
            @if !rows.is_empty() {
                tbody {
                    @for node in rows {
                        (Styled { node, theme })
                    }
                }
            }
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

fn render_element(element: &Element, children: &[Node], theme: &Theme) -> Markup {
    let kids = StyledList {
        nodes: children,
        theme,
    };
    match element {
        Element::Heading(1) => html! { h1 class=(theme.h1) { (kids) } },
        Element::Heading(2) => html! { h2 class=(theme.h2) { (kids) } },
        Element::Heading(3) => html! { h3 class=(theme.h3) { (kids) } },
        Element::Heading(4) => html! { h4 { (kids) } },
        Element::Heading(5) => html! { h5 { (kids) } },
        Element::Heading(_) => html! { h6 { (kids) } },
        Element::Paragraph => html! { p class=(theme.paragraph) { (kids) } },
        Element::Link { href, title } => html! {
            a class=(theme.link) href=(href) title=[non_empty(title)]
                target="_blank" rel="noopener noreferrer" { (kids) }
        },
        Element::Image { src, title } => {
            let alt: String = children.iter().map(Node::text).collect();
            html! { img src=(src) alt=(alt) title=[non_empty(title)]; }
        }
        Element::BlockQuote { alert: None } => html! {
            blockquote class=(theme.blockquote) { (kids) }
        },
        Element::BlockQuote { alert: Some(alert) } => html! {
            blockquote class={ (theme.blockquote) " markdown-alert markdown-alert-" (alert) } {
                (kids)
            }
        },
        Element::CodeBlock { language } => render_code_block(language.as_deref(), children, theme),
        Element::List { start: None } => html! { ul class=(theme.unordered_list) { (kids) } },
        Element::List { start: Some(start) } => html! {
            ol class=(theme.ordered_list) start=[(*start != 1).then_some(*start)] { (kids) }
        },
        Element::Item => render_item(children, theme),
        Element::Emphasis => html! { em { (kids) } },
        Element::Strong => html! { strong { (kids) } },
        Element::Strikethrough => html! { del { (kids) } },
        Element::Table => render_table(children, theme),
        Element::TableHead => html! { thead { tr { (kids) } } },
        Element::TableRow => html! { tr { (kids) } },
        Element::TableCell { header: true } => html! { th { (kids) } },
        Element::TableCell { header: false } => html! { td { (kids) } },
        Element::FootnoteDefinition(label) => html! {
            div.footnote-definition id=(label) {
                sup.footnote-definition-label { (label) }
                (kids)
            }
        },
        Element::Transparent => html! { (kids) },
    }
}

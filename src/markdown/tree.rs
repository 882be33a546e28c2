use linkify::{LinkFinder, LinkKind};
use pulldown_cmark::{BlockQuoteKind, CodeBlockKind, Event, HeadingLevel, Tag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Heading(u8),
    Paragraph,
    Link { href: String, title: String },
    Image { src: String, title: String },
    BlockQuote { alert: Option<&'static str> },
    CodeBlock { language: Option<String> },
    List { start: Option<u64> },
    Item,
    Emphasis,
    Strong,
    Strikethrough,
    Table,
    TableHead,
    TableRow,
    TableCell { header: bool },
    FootnoteDefinition(String),
    Transparent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element, Vec<Node>),
    Text(String),
    InlineCode(String),
    Html(String),
    FootnoteReference(String),
    TaskMarker(bool),
    SoftBreak,
    HardBreak,
    Rule,
}

impl Node {
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(_, children) => children.iter().for_each(|c| c.collect_text(out)),
            Node::Text(t) | Node::InlineCode(t) | Node::Html(t) => out.push_str(t),
            Node::SoftBreak | Node::HardBreak => out.push('\n'),
            _ => {}
        }
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn alert_name(kind: BlockQuoteKind) -> &'static str {
    match kind {
        BlockQuoteKind::Note => "note",
        BlockQuoteKind::Tip => "tip",
        BlockQuoteKind::Important => "important",
        BlockQuoteKind::Warning => "warning",
        BlockQuoteKind::Caution => "caution",
    }
}

/// Target for a bare link found in text. Only `http(s)://` and `www.` forms
/// are linked; `www.` gets an `http://` scheme.
fn bare_link_href(link: &str) -> Option<String> {
    if link.starts_with("http://") || link.starts_with("https://") {
        Some(link.to_string())
    } else if link.starts_with("www.") {
        Some(format!("http://{link}"))
    } else {
        None
    }
}

/// First word of a fence's info string, e.g. `rust` for "```rust,ignore".
fn fence_language(info: &str) -> Option<String> {
    info.split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
}

#[derive(Default)]
pub(super) struct TreeBuilder {
    stack: Vec<(Element, Vec<Node>)>,
    root: Vec<Node>,
    // consecutive text events, joined so links split across them are found
    pending: String,
}

impl TreeBuilder {
    fn in_table_head(&self) -> bool {
        self.stack
            .iter()
            .any(|(element, _)| *element == Element::TableHead)
    }

    fn in_literal(&self) -> bool {
        self.stack.iter().any(|(element, _)| {
            matches!(
                element,
                Element::Link { .. } | Element::Image { .. } | Element::CodeBlock { .. }
            )
        })
    }

    fn flush_text(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending);
        if self.in_literal() {
            self.push_leaf(Node::Text(text));
            return;
        }
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url]).url_must_have_scheme(false);
        for span in finder.spans(&text) {
            let href = span.kind().and_then(|_| bare_link_href(span.as_str()));
            match href {
                Some(href) => self.push_leaf(Node::Element(
                    Element::Link {
                        href,
                        title: String::new(),
                    },
                    vec![Node::Text(span.as_str().to_string())],
                )),
                None => self.push_leaf(Node::Text(span.as_str().to_string())),
            }
        }
    }

    fn push_leaf(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some((_, children)) => children.push(node),
            None => self.root.push(node),
        }
    }

    fn open(&mut self, tag: Tag) {
        let element = match tag {
            Tag::Heading { level, .. } => Element::Heading(heading_level(level)),
            Tag::Paragraph => Element::Paragraph,
            Tag::Link {
                dest_url, title, ..
            } => Element::Link {
                href: dest_url.to_string(),
                title: title.to_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => Element::Image {
                src: dest_url.to_string(),
                title: title.to_string(),
            },
            Tag::BlockQuote(kind) => Element::BlockQuote {
                alert: kind.map(alert_name),
            },
            Tag::CodeBlock(CodeBlockKind::Fenced(info)) => Element::CodeBlock {
                language: fence_language(&info),
            },
            Tag::CodeBlock(CodeBlockKind::Indented) => Element::CodeBlock { language: None },
            Tag::List(start) => Element::List { start },
            Tag::Item => Element::Item,
            Tag::Emphasis => Element::Emphasis,
            Tag::Strong => Element::Strong,
            Tag::Strikethrough => Element::Strikethrough,
            Tag::Table(_) => Element::Table,
            Tag::TableHead => Element::TableHead,
            Tag::TableRow => Element::TableRow,
            Tag::TableCell => Element::TableCell {
                header: self.in_table_head(),
            },
            Tag::FootnoteDefinition(label) => Element::FootnoteDefinition(label.to_string()),
            _ => Element::Transparent,
        };
        self.stack.push((element, vec![]));
    }

    fn close(&mut self) {
        if let Some((element, children)) = self.stack.pop() {
            self.push_leaf(Node::Element(element, children));
        }
    }

    pub(super) fn push(&mut self, event: Event) {
        if let Event::Text(text) = event {
            self.pending.push_str(&text);
            return;
        }
        self.flush_text();
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(_) => self.close(),
            Event::Code(code) => self.push_leaf(Node::InlineCode(code.to_string())),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.push_leaf(Node::Html(html.to_string()))
            }
            Event::FootnoteReference(label) => {
                self.push_leaf(Node::FootnoteReference(label.to_string()))
            }
            Event::TaskListMarker(checked) => self.push_leaf(Node::TaskMarker(checked)),
            Event::SoftBreak => self.push_leaf(Node::SoftBreak),
            Event::HardBreak => self.push_leaf(Node::HardBreak),
            Event::Rule => self.push_leaf(Node::Rule),
            _ => {}
        }
    }

    pub(super) fn finish(mut self) -> Vec<Node> {
        self.flush_text();
        // unbalanced streams should not happen, but never drop content
        while !self.stack.is_empty() {
            self.close();
        }
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fence_language_takes_first_word() {
        assert_eq!(fence_language("rust"), Some("rust".to_string()));
        assert_eq!(fence_language("rust,ignore"), Some("rust".to_string()));
        assert_eq!(fence_language("js title=x"), Some("js".to_string()));
        assert_eq!(fence_language(""), None);
    }

    #[test]
    fn bare_links_only_for_web_forms() {
        assert_eq!(
            bare_link_href("https://example.com"),
            Some("https://example.com".to_string())
        );
        assert_eq!(
            bare_link_href("www.example.com"),
            Some("http://www.example.com".to_string())
        );
        assert_eq!(bare_link_href("example.com"), None);
    }

    #[test]
    fn text_joins_leaves() {
        let node = Node::Element(
            Element::Paragraph,
            vec![
                Node::Text("a ".into()),
                Node::Element(Element::Strong, vec![Node::Text("b".into())]),
                Node::InlineCode(" c".into()),
            ],
        );
        assert_eq!(node.text(), "a b c");
    }
}

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::metadata::Metadata;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub metadata: Metadata,
    pub body: String,
}

fn block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // shortest block anchored at the very first character
        RegexBuilder::new(r"\A---(.*?)---")
            .dot_matches_new_line(true)
            .build()
            .expect("front matter pattern is valid")
    })
}

pub fn split(text: &str) -> Option<(&str, &str)> {
    let caps = block_pattern().captures(text)?;
    let whole = caps.get(0)?;
    let interior = caps.get(1)?.as_str();
    Some((interior, &text[whole.end()..]))
}

/// Parses `key: value` lines. Only the first colon separates the key, so
/// `time: 12:30` keeps `12:30` intact.
pub fn parse_block(interior: &str) -> Metadata {
    let mut metadata = Metadata::new();
    for line in interior.split('\n') {
        let mut fragments = line.split(':');
        let key = fragments.next().unwrap_or_default().trim();
        let value: Vec<&str> = fragments.collect();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        metadata.insert(key, value.join(":").trim());
    }
    metadata
}

pub fn parse(text: &str) -> FrontMatter {
    match split(text) {
        Some((interior, body)) => FrontMatter {
            metadata: parse_block(interior),
            body: body.to_string(),
        },
        None => FrontMatter {
            metadata: Metadata::new(),
            body: text.to_string(),
        },
    }
}

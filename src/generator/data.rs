use serde::Serialize;

use crate::{article::ArticlePath, front_matter::FrontMatter};

#[derive(Serialize, Debug)]
pub(super) struct PageData<'a> {
    pub site_name: &'a str,
    pub title: String,
    pub path: String,
    pub navbar: String,
    pub content: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(super) struct ArticleEntry {
    pub file_name: String,
    pub title: String,
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub href: String,
}

impl ArticleEntry {
    pub fn new(path: &ArticlePath, content: &FrontMatter) -> Self {
        let meta = &content.metadata;
        Self {
            file_name: path.file_name.clone(),
            title: meta
                .title()
                .map(str::to_string)
                .unwrap_or_else(|| path.file_name.clone()),
            date: meta.date().map(str::to_string),
            tags: meta.tags(),
            image: meta.image().map(str::to_string),
            href: path.href(),
        }
    }
}

#[derive(Serialize, Debug)]
pub(super) struct CategoryIndex<'a> {
    pub category: &'a str,
    pub articles: &'a [ArticleEntry],
}

use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticlePath {
    pub category: String,
    pub file_name: String,
}

impl ArticlePath {
    pub fn new(category: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            file_name: file_name.into(),
        }
    }

    pub fn source_path(&self) -> PathBuf {
        Path::new(&self.category).join(format!("{}.md", self.file_name))
    }

    pub fn page_path(&self) -> PathBuf {
        Path::new(&self.category).join(format!("{}.html", self.file_name))
    }

    pub fn href(&self) -> String {
        format!("/{}/{}.html", self.category, self.file_name)
    }
}

impl fmt::Display for ArticlePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/article/{}/{}.md", self.category, self.file_name)
    }
}

pub fn tag_href(category: &str, tag: &str) -> String {
    format!("/{category}?tag={}", urlencoding::encode(tag))
}

pub trait ArticleSource {
    /// Raw text of the article, decoded as UTF-8 whatever the bytes are.
    fn fetch(&self, path: &ArticlePath) -> anyhow::Result<String>;
}

#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArticleSource for FsSource {
    fn fetch(&self, path: &ArticlePath) -> anyhow::Result<String> {
        let file = self.root.join(path.source_path());
        let bytes = std::fs::read(&file).with_context(|| format!("while reading {file:?}"))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

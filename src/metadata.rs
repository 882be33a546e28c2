use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// A field written with an empty value counts as absent.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.non_empty("title")
    }

    pub fn author(&self) -> Option<&str> {
        self.non_empty("author")
    }

    pub fn date(&self) -> Option<&str> {
        self.non_empty("date")
    }

    pub fn read_time(&self) -> Option<&str> {
        self.non_empty("readTime")
    }

    pub fn image(&self) -> Option<&str> {
        self.non_empty("image")
    }

    /// `tags` exploded on commas. Order is kept and duplicates are not removed.
    pub fn tags(&self) -> Vec<String> {
        self.non_empty("tags").map(split_tags).unwrap_or_default()
    }
}

pub fn split_tags(value: &str) -> Vec<String> {
    value.split(',').map(|tag| tag.trim().to_string()).collect()
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut meta = Metadata::new();
        for (k, v) in iter {
            meta.insert(k, v);
        }
        meta
    }
}

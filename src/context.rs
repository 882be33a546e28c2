use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use log::info;
use serde::Deserialize;

use crate::{
    markdown::Theme,
    navbar::{self, NavLink},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub brand: String,
    pub nav_links: Vec<NavLink>,
    pub theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            brand: "MyBrand".to_string(),
            nav_links: navbar::default_links(),
            theme: Theme::default(),
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("Site config({path:?}) does not exist. using defaults...");
            return Ok(Self::default());
        }
        let fd = File::open(path)?;
        let reader = BufReader::new(fd);
        serde_json::from_reader(reader).with_context(|| format!("while reading {path:?}"))
    }
}

#[derive(Debug)]
pub struct Context {
    pub article_dir: PathBuf,
    pub out_dir: PathBuf,
    pub public_dir: PathBuf,

    pub site: SiteConfig,

    pub handlebars: handlebars::Handlebars<'static>,
}

use std::{
    collections::BTreeMap,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use fs_extra::dir::CopyOptions;
use log::{debug, info, warn};
use maud::{Markup, Render};

use crate::{
    article::{ArticlePage, ArticlePath, ArticleView, FsSource},
    context::Context,
    navbar::{Navbar, NavbarState},
};

mod data;
mod utils;

use data::{ArticleEntry, CategoryIndex, PageData};
use utils::{render_categories, render_listing, sort_article};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub categories: usize,
    pub articles: usize,
}

fn write_page(
    ctx: &Context,
    out_path: &Path,
    title: &str,
    path: &str,
    content: Markup,
) -> anyhow::Result<()> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let navbar = Navbar {
        brand: &ctx.site.brand,
        links: &ctx.site.nav_links,
        state: NavbarState::default(),
    };
    let data = PageData {
        site_name: &ctx.site.name,
        title: title.to_string(),
        path: path.to_string(),
        navbar: navbar.render().into_string(),
        content: content.into_string(),
    };
    let fd = File::create(out_path)?;
    ctx.handlebars
        .render_to_write("layout", &data, fd)
        .with_context(|| format!("while generating {out_path:?}"))?;
    Ok(())
}

/// Categories are the directories directly under `article_dir`; articles are
/// the `.md` files inside them.
fn collect_articles(article_dir: &Path) -> anyhow::Result<BTreeMap<String, Vec<ArticlePath>>> {
    let mut categories: BTreeMap<String, Vec<ArticlePath>> = BTreeMap::new();
    for entry in std::fs::read_dir(article_dir)? {
        let entry = entry?;
        if !entry.metadata()?.is_dir() {
            warn!("Skipping {:?}: articles must be inside a category directory", entry.path());
            continue;
        }
        let category = entry.file_name().to_string_lossy().to_string();
        let articles = categories.entry(category.clone()).or_default();
        for file in std::fs::read_dir(entry.path())? {
            let file: PathBuf = file?.path();
            if !file.is_file() || file.extension().map_or(true, |ext| ext != "md") {
                debug!("Ignoring {file:?}");
                continue;
            }
            if let Some(stem) = file.file_stem() {
                articles.push(ArticlePath::new(category.clone(), stem.to_string_lossy()));
            }
        }
        articles.sort();
    }
    Ok(categories)
}

pub fn generate(ctx: &Context) -> anyhow::Result<Summary> {
    if ctx.out_dir.exists() {
        fs_extra::dir::remove(&ctx.out_dir)?;
    }
    std::fs::create_dir_all(&ctx.out_dir)?;

    // copy `public_dir`
    if ctx.public_dir.is_dir() {
        let mut cp_opts = CopyOptions::new();
        cp_opts.content_only = true;
        cp_opts.overwrite = true;
        fs_extra::dir::copy(&ctx.public_dir, &ctx.out_dir, &cp_opts)
            .with_context(|| format!("while copying {:?}", ctx.public_dir))?;
    } else {
        info!("Public dir({:?}) does not exist. ignoring...", ctx.public_dir);
    }

    let source = FsSource::new(&ctx.article_dir);
    let mut view = ArticleView::new();
    let mut summary = Summary::default();
    let mut category_counts = vec![];

    for (category, paths) in collect_articles(&ctx.article_dir)? {
        info!("Generating {category} ({} articles)", paths.len());
        let mut entries = vec![];
        for path in paths {
            debug!("Rendering {path}");
            view.load(&source, path.clone());
            let content = view.content();
            let page = ArticlePage {
                category: &category,
                content,
                theme: &ctx.site.theme,
            };
            let title = content
                .metadata
                .title()
                .unwrap_or(path.file_name.as_str())
                .to_string();
            write_page(
                ctx,
                &ctx.out_dir.join(path.page_path()),
                &title,
                &path.href(),
                page.render(),
            )?;
            entries.push(ArticleEntry::new(&path, content));
        }
        entries.sort_by(sort_article);

        let category_dir = ctx.out_dir.join(&category);
        write_page(
            ctx,
            &category_dir.join("index.html"),
            &category,
            &format!("/{category}"),
            render_listing(&category, &entries),
        )?;
        let json_path = category_dir.join("index.json");
        let writer = BufWriter::new(File::create(&json_path)?);
        serde_json::to_writer_pretty(
            writer,
            &CategoryIndex {
                category: &category,
                articles: &entries,
            },
        )
        .with_context(|| format!("while writing {json_path:?}"))?;

        summary.categories += 1;
        summary.articles += entries.len();
        category_counts.push((category, entries.len()));
    }

    write_page(
        ctx,
        &ctx.out_dir.join("index.html"),
        "",
        "/",
        render_categories(&category_counts),
    )?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{context::SiteConfig, renderer::generate_renderer};
    use tempfile::TempDir;

    fn setup(temp: &Path) -> Context {
        let article_dir = temp.join("article");
        std::fs::create_dir_all(article_dir.join("life")).unwrap();
        std::fs::create_dir_all(article_dir.join("work")).unwrap();
        std::fs::write(
            article_dir.join("life/first.md"),
            concat!(
                "---\n",
                "title: First Post\n",
                "date: 2024-02-01\n",
                "tags: rust, web dev\n",
                "readTime: 4\n",
                "---\n",
                "# Heading\n\nSee [docs](https://docs.rs).\n",
            ),
        )
        .unwrap();
        std::fs::write(
            article_dir.join("life/second.md"),
            "---\ntitle: Second\ndate: 2024-05-01\n---\nLater.\n",
        )
        .unwrap();
        std::fs::write(article_dir.join("work/plain.md"), "No front matter.\n").unwrap();
        std::fs::write(article_dir.join("work/notes.txt"), "ignored").unwrap();
        std::fs::write(article_dir.join("stray.md"), "ignored").unwrap();

        let public_dir = temp.join("public");
        std::fs::create_dir_all(public_dir.join("img")).unwrap();
        std::fs::write(public_dir.join("style.css"), "body {}").unwrap();
        std::fs::write(public_dir.join("img/cover.png"), "png").unwrap();

        Context {
            article_dir,
            out_dir: temp.join("out"),
            public_dir,
            site: SiteConfig {
                name: "Folio".to_string(),
                ..SiteConfig::default()
            },
            handlebars: generate_renderer(None).unwrap(),
        }
    }

    #[test]
    fn generates_site() {
        let temp = TempDir::new().unwrap();
        let ctx = setup(temp.path());
        let summary = generate(&ctx).unwrap();
        assert_eq!(
            summary,
            Summary {
                categories: 2,
                articles: 3
            }
        );

        let out = &ctx.out_dir;
        let first = std::fs::read_to_string(out.join("life/first.html")).unwrap();
        assert!(first.contains("<title>First Post | Folio</title>"));
        assert!(first.contains("<span>4 min read</span>"));
        assert!(first.contains("href=\"/life?tag=web%20dev\""));
        assert!(first.contains("rel=\"noopener noreferrer\""));
        assert!(first.contains("id=\"navbar\""));
        assert!(first.contains(">MyBrand</a>"));

        let plain = std::fs::read_to_string(out.join("work/plain.html")).unwrap();
        assert!(!plain.contains("<header"));
        assert!(plain.contains("No front matter."));

        assert!(!out.join("work/notes.html").exists());
        assert!(!out.join("stray.html").exists());
        assert!(out.join("style.css").exists());
        assert!(out.join("img/cover.png").exists());
        assert!(out.join("index.html").exists());
    }

    #[test]
    fn category_index_is_sorted_newest_first() {
        let temp = TempDir::new().unwrap();
        let ctx = setup(temp.path());
        generate(&ctx).unwrap();

        let json = std::fs::read_to_string(ctx.out_dir.join("life/index.json")).unwrap();
        let index: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(index["category"], "life");
        assert_eq!(index["articles"][0]["title"], "Second");
        assert_eq!(index["articles"][1]["title"], "First Post");
        assert_eq!(
            index["articles"][1]["tags"],
            serde_json::json!(["rust", "web dev"])
        );

        let html = std::fs::read_to_string(ctx.out_dir.join("life/index.html")).unwrap();
        assert!(html.contains("data-tags=\"rust,web dev\""));
    }

    #[test]
    fn stale_output_is_replaced() {
        let temp = TempDir::new().unwrap();
        let ctx = setup(temp.path());
        std::fs::create_dir_all(&ctx.out_dir).unwrap();
        std::fs::write(ctx.out_dir.join("old.html"), "stale").unwrap();
        generate(&ctx).unwrap();
        assert!(!ctx.out_dir.join("old.html").exists());
    }
}

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use handlebars::{handlebars_helper, html_escape, Handlebars};

const DEFAULT_LAYOUT: &str = include_str!("../template/layout.hbs");

handlebars_helper!(breadcrumbs: |path: PathBuf| {
    let mut current_path = PathBuf::from("/");
    let mut res = String::new();
    let mut components = path.components();
    if path.has_root() {
        components.next();
    }
    res.push_str("<a href=\"/\">/</a> ");
    for (i, c) in components.enumerate() {
        current_path.push(c);
        let label = Path::new(c.as_os_str())
            .file_stem()
            .unwrap_or(c.as_os_str())
            .to_string_lossy()
            .to_string();
        let _ = write!(
            res,
            "{}<a href=\"{}\">{}</a>",
            if i == 0 {""} else {" / "},
            html_escape(&current_path.to_string_lossy()),
            html_escape(&label)
        );
    }

    res
});

/// Builds the page renderer. A `layout.hbs` in `template_dir` replaces the
/// built-in layout.
pub fn generate_renderer(template_dir: Option<&Path>) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.register_helper("breadcrumbs", Box::new(breadcrumbs));
    match template_dir.map(|dir| dir.join("layout.hbs")) {
        Some(layout) if layout.exists() => handlebars
            .register_template_file("layout", &layout)
            .with_context(|| format!("{layout:?}"))?,
        _ => handlebars
            .register_template_string("layout", DEFAULT_LAYOUT)
            .context("built-in layout.hbs")?,
    }

    Ok(handlebars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn breadcrumbs_link_each_level() {
        let mut handlebars = Handlebars::new();
        handlebars.register_helper("breadcrumbs", Box::new(breadcrumbs));
        let out = handlebars
            .render_template("{{{breadcrumbs path}}}", &json!({ "path": "/life/first.html" }))
            .unwrap();
        assert_eq!(
            out,
            "<a href=\"/\">/</a> <a href=\"/life\">life</a> / <a href=\"/life/first.html\">first</a>"
        );
    }

    #[test]
    fn built_in_layout_is_used_by_default() {
        let handlebars = generate_renderer(None).unwrap();
        assert!(handlebars.has_template("layout"));
    }

    #[test]
    fn template_dir_overrides_layout() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("layout.hbs"), "<main>{{{content}}}</main>").unwrap();
        let handlebars = generate_renderer(Some(temp.path())).unwrap();
        let out = handlebars
            .render("layout", &json!({ "content": "<p>x</p>" }))
            .unwrap();
        assert_eq!(out, "<main><p>x</p></main>");
    }
}

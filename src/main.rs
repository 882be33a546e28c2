use std::path::PathBuf;

use anyhow::bail;
use clap::{command, value_parser, Arg, ArgAction};
use log::info;

use folio::{
    context::{Context, SiteConfig},
    generator::generate,
    renderer::generate_renderer,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("article_dir")
                .help("Directory of articles, laid out as {category}/{file_name}.md")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .default_value("article"),
            Arg::new("out_dir")
                .help("Directory path of output. Existing contents will be removed.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .default_value("out"),
            Arg::new("public_dir")
                .help("Directory path of public. Contents will be copied as it is.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .default_value("public"),
            Arg::new("template_dir")
                .long("template-dir")
                .help("Directory containing a layout.hbs replacing the built-in layout")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf)),
            Arg::new("site_config")
                .long("site-config")
                .help("JSON file with the site name, brand, nav links and theme")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .default_value("site.json"),
        ])
        .get_matches();

    let Some(article_dir) = matches.get_one::<PathBuf>("article_dir") else {
        bail!("article_dir is required.");
    };
    if !article_dir.is_dir() {
        bail!("article_dir must be a directory.");
    }
    let Some(out_dir) = matches.get_one::<PathBuf>("out_dir") else {
        bail!("out_dir is required.");
    };
    if out_dir.exists() && !out_dir.is_dir() {
        bail!("if out_dir exists, it must be directory.");
    }
    let Some(public_dir) = matches.get_one::<PathBuf>("public_dir") else {
        bail!("public_dir is required.");
    };
    if public_dir.exists() && !public_dir.is_dir() {
        bail!("public_dir must be a directory.")
    }
    let template_dir = matches.get_one::<PathBuf>("template_dir");
    if let Some(dir) = template_dir {
        if !dir.is_dir() {
            bail!("template_dir must be a directory.")
        }
    }

    let mut site = match matches.get_one::<PathBuf>("site_config") {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    if let Ok(name) = std::env::var("SITE_NAME") {
        site.name = name;
    }

    let ctx = Context {
        article_dir: article_dir.to_owned(),
        out_dir: out_dir.to_owned(),
        public_dir: public_dir.to_owned(),
        site,
        handlebars: generate_renderer(template_dir.map(PathBuf::as_path))?,
    };

    let summary = generate(&ctx)?;
    info!(
        "Generated {} articles in {} categories into {:?}",
        summary.articles, summary.categories, ctx.out_dir
    );

    Ok(())
}

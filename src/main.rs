use std::path::PathBuf;

use anyhow::Context;
use build_html::Html;
use clap::Parser;
use sharemeta::{config::Config, generator::MetaGenerator, item::SharedItem};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(help = "YAML file describing the shared item.")]
    item: PathBuf,
    #[arg(short, long, help = "YAML file configuring the generators")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize Logging.
    let log_environ = env_logger::Env::new()
        .filter("SHAREMETA_LOG")
        .write_style("SHAREMETA_LOG_STYLE");
    let mut log_builder = env_logger::Builder::new();

    log_builder.filter_level(log::LevelFilter::Info);
    log_builder.parse_env(log_environ);
    log_builder.init();

    // Parse Arguments.
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading config `{}`", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };

    let contents = std::fs::read_to_string(&args.item)
        .with_context(|| format!("Could not read item {:?}", args.item))?;
    let item: SharedItem = serde_yaml::from_str(&contents)
        .with_context(|| format!("Invalid item {:?}", args.item))?;

    let meta = config.build_chain().generate_meta(&item);
    if meta.is_empty() {
        log::warn!("No meta tags generated for `{}`", args.item.display());
    }

    for tag in meta {
        println!("{}", tag.to_html_string());
    }

    Ok(())
}

//! `outline` extracts outline documentation from comment text.
//!
//! Inputs come from the command line (files or glob patterns), from the
//! `inputs` patterns of the config file, or from stdin, in that order of
//! preference. Documents sharing a name are merged, sorted unless disabled,
//! and printed as canonical outline text or JSON. `--browse` shows them in a
//! terminal viewer instead.

mod browse;
mod inputs;

use anyhow::{Context, Result};
use clap::Parser as _;
use outline_config::{Config, OutputFormat};
use outline_engine::{Document, Parser, merge_documents, sort_documents, to_outline_string};
use std::path::PathBuf;

use crate::inputs::Input;

#[derive(clap::Parser)]
#[command(
    name = "outline",
    about = "Extract indentation-structured outline documentation from comment text"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, the config `inputs`
    /// are used, then stdin.
    files: Vec<String>,

    /// Config file to use instead of ~/.config/outline/config.toml
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format: outline or json
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Keep documents and entities in the order they were found
    #[arg(long)]
    no_sort: bool,

    /// Columns between tab stops when measuring indentation
    #[arg(long)]
    tab_width: Option<usize>,

    /// Browse the documents in a terminal viewer
    #[arg(long)]
    browse: bool,
}

/// Settings after applying command-line overrides to the config file.
struct Settings {
    tab_width: usize,
    sort: bool,
    format: OutputFormat,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            tab_width: cli.tab_width.unwrap_or(config.tab_width),
            sort: config.sort && !cli.no_sort,
            format: cli.format.unwrap_or(config.format),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let settings = Settings::resolve(&cli, &config);

    let inputs = inputs::collect(&cli.files, &config)?;
    let documents = extract(&inputs, &settings);
    log::info!(
        "extracted {} document(s) from {} input(s)",
        documents.len(),
        inputs.len()
    );

    if cli.browse {
        return browse::run(documents);
    }

    print!("{}", render(&documents, settings.format)?);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let loaded = match &cli.config {
        Some(path) => {
            // An explicitly named config has to exist.
            anyhow::ensure!(path.is_file(), "config file not found: {}", path.display());
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };
    if loaded.is_none() {
        log::debug!(
            "no config file at {}, using defaults",
            Config::config_path().display()
        );
    }
    Ok(loaded.unwrap_or_default())
}

/// Parse every input, skipping malformed documents, then merge and sort.
fn extract(inputs: &[Input], settings: &Settings) -> Vec<Document> {
    let parser = Parser::with_tab_width(settings.tab_width);

    let parsed = inputs.iter().flat_map(|input| {
        parser
            .parse(&input.text)
            .into_iter()
            .filter_map(move |result| match result {
                Ok(doc) => Some(doc),
                Err(e) => {
                    log::warn!("skipping document in {}: {e}", input.label);
                    None
                }
            })
    });

    let mut documents = merge_documents(parsed);
    if settings.sort {
        sort_documents(&mut documents);
    }
    documents
}

fn render(documents: &[Document], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Outline => Ok(documents
            .iter()
            .map(to_outline_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(documents).context("failed to encode documents")?;
            json.push('\n');
            Ok(json)
        }
    }
}

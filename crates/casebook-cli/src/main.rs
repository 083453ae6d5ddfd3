use anyhow::{Context, Result};
use casebook_config::{Config, OutputFormat};
use casebook_engine::{CitationRecord, ParsedDoc, RawDocument, parse_document_with, render};
use clap::{Parser, ValueEnum};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

/// Turn a grounded model response into case-study blocks
#[derive(Parser, Debug)]
#[command(name = "casebook", version)]
#[command(about = "Extract cited case studies, tables and headings from generated text", long_about = None)]
struct Args {
    /// Response to read: a JSON document `{content, citations}` or plain text.
    /// Reads stdin when omitted or `-`.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Treat the input as a JSON document even without a `.json` extension
    #[arg(long)]
    json: bool,

    /// JSON array of citation records (or grounding chunks) for plain-text input
    #[arg(long, value_name = "FILE")]
    citations: Option<PathBuf>,

    /// Output format; overrides the config file
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Config file to use instead of ~/.config/casebook/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a default config file (at --config, or the default location) and exit
    #[arg(long, conflicts_with_all = ["input", "citations", "format", "json"])]
    init_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Html,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Format::Text,
            OutputFormat::Json => Format::Json,
            OutputFormat::Html => Format::Html,
        }
    }
}

fn main() {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = init_config(args.config.as_deref())?;
        log::info!("wrote default config to {}", path.display());
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    let format = args.format.unwrap_or_else(|| config.output.format.into());

    let doc = read_document(&args)?;
    log::debug!(
        "parsing {} bytes with {} citation(s)",
        doc.content.len(),
        doc.citations.len()
    );

    let parsed = parse_document_with(&doc, &config.parse);
    if parsed.blocks.is_empty() {
        log::warn!("no blocks survived parsing");
    }

    let output = format_output(&parsed, format)?;
    io::stdout()
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loaded = match explicit {
        Some(path) => {
            let path = Config::expand_path(path);
            let config = Config::load_from_path(&path)?;
            if config.is_none() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            config
        }
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

/// Writes `Config::default()`, refusing to overwrite an existing file.
fn init_config(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => Config::expand_path(path),
        None => Config::config_path(),
    };
    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }

    let config = Config::default();
    match explicit {
        Some(_) => config.save_to_path(&path)?,
        None => config.save()?,
    }
    Ok(path)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file: {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn is_json_input(args: &Args) -> bool {
    args.json
        || args
            .input
            .as_deref()
            .and_then(|p| p.extension())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read_document(args: &Args) -> Result<RawDocument> {
    let raw = read_input(args.input.as_deref())?;

    let mut doc = if is_json_input(args) {
        RawDocument::from_json(&raw).context("Failed to parse input document")?
    } else {
        RawDocument::new(raw, vec![])
    };

    if let Some(path) = &args.citations {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read citations file: {}", path.display()))?;
        let extra: Vec<CitationRecord> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse citations file: {}", path.display()))?;
        doc.citations.extend(extra);
    }

    Ok(doc)
}

fn format_output(parsed: &ParsedDoc, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => render::text::render(&parsed.blocks),
        Format::Html => render::html::render(&parsed.blocks),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(parsed)?;
            json.push('\n');
            json
        }
    })
}

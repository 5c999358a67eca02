//! Kenall Normalize CLI
//!
//! Decodes an API response payload and prints it as canonical or strict JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kenall_models::{render, DecodeMode, ModelError, ModelsConfig, ResponseKind, SchemaVersion};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kenall-normalize")]
#[command(about = "Decode a registry API payload into canonical or strict form")]
struct Cli {
    /// Response kind (address, address-search, city, holidays, corporate,
    /// corporate-search, bank, banks, bank-branches, bank-branch, invoice-issuer)
    kind: ResponseKind,

    /// Payload file (stdin when omitted)
    input: Option<PathBuf>,

    /// Schema version of the payload (inferred when omitted)
    #[arg(short = 'V', long)]
    version: Option<SchemaVersion>,

    /// Print the strict wire model instead of the canonical record
    #[arg(long)]
    strict: bool,

    /// Config file to load (optional)
    #[arg(short, long)]
    config: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn read_payload(input: Option<&PathBuf>) -> anyhow::Result<serde_json::Value> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    serde_json::from_str(&text).context("payload is not valid JSON")
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = ModelsConfig::load_from(cli.config.as_deref())?;
    let version = cfg.effective_version(cli.version)?;
    let mode = if cli.strict {
        DecodeMode::Strict
    } else {
        cfg.decode.mode
    };
    if mode == DecodeMode::Strict && version.is_none() {
        return Err(ModelError::VersionRequired.into());
    }

    let payload = read_payload(cli.input.as_ref())?;
    info!(kind = %cli.kind, ?mode, "decoding payload");
    let rendered = render(cli.kind, &payload, version.as_ref(), mode)
        .with_context(|| format!("decoding {} payload", cli.kind))?;

    println!("{}", cfg.format_json(&rendered)?);
    Ok(())
}

//! Kenall Config CLI
//!
//! View and manage decoding configuration.

use anyhow::Context;
use clap::{Parser, Subcommand};
use kenall_models::ModelsConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kenall-config")]
#[command(about = "View and manage decoding configuration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration
    Show {
        /// Config file to load (optional)
        #[arg(short, long)]
        config: Option<String>,

        /// Output as TOML
        #[arg(long)]
        toml: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize a new config file
    Init {
        /// Output path
        #[arg(short, long, default_value = "kenall.toml")]
        output: String,
    },

    /// Validate configuration
    Validate {
        /// Config file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Show { config, toml, json } => {
            let cfg = ModelsConfig::load_from(config.as_deref())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            } else if toml {
                println!("{}", ::toml::to_string_pretty(&cfg)?);
            } else {
                println!("Kenall decoding configuration\n");
                println!("Decode:");
                println!(
                    "  Pinned version: {}",
                    cfg.decode.pinned_version.as_deref().unwrap_or("(inferred)")
                );
                println!("  Mode: {:?}", cfg.decode.mode);
                println!("\nOutput:");
                println!("  Format: {:?}", cfg.output.format);
            }
        }

        Commands::Init { output } => {
            let cfg = ModelsConfig::default();
            cfg.save(&output)
                .with_context(|| format!("writing {output}"))?;
            println!("Created config file: {}", output);
        }

        Commands::Validate { config } => {
            let cfg = ModelsConfig::load_from(config.as_deref())?;
            match cfg.validate() {
                Ok(()) => {
                    println!("Configuration is valid");
                    println!("   Mode: {:?}", cfg.decode.mode);
                    if let Some(version) = cfg.pinned_version()? {
                        let note = if version.is_known() { "" } else { " (not a known release)" };
                        println!("   Version: {}{}", version, note);
                    }
                }
                Err(e) => {
                    eprintln!("Configuration error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

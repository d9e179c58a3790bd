use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use climateqa_core::{env_parse_with_default, DEFAULT_PORT};
use climateqa_llm::{DEFAULT_FALLBACK_MODEL, DEFAULT_PRIMARY_MODEL};

mod commands;

#[derive(Parser)]
#[command(name = "climateqa")]
#[command(about = "Climate question-answering service over GISTEMP data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server.
    Serve {
        /// Listening port. Falls back to the PORT env var, then 5000.
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Load the GISTEMP CSV into the climate store, replacing its contents.
    Load {
        /// Path to the GLB.Ts+dSST.csv export.
        #[arg(default_value = "GLB.Ts+dSST.csv")]
        file: PathBuf,
    },
}

fn get_api_key() -> Result<String> {
    std::env::var("CLIMATEQA_API_KEY")
        .map_err(|_| anyhow::anyhow!("CLIMATEQA_API_KEY environment variable must be set"))
}

fn get_base_url() -> String {
    std::env::var("CLIMATEQA_API_URL")
        .unwrap_or_else(|_| "https://openrouter.ai/api".to_string())
}

fn get_database_url() -> Result<String> {
    std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable must be set"))
}

fn get_primary_model() -> String {
    std::env::var("CLIMATEQA_MODEL").unwrap_or_else(|_| DEFAULT_PRIMARY_MODEL.to_string())
}

fn get_fallback_model() -> String {
    std::env::var("CLIMATEQA_FALLBACK_MODEL")
        .unwrap_or_else(|_| DEFAULT_FALLBACK_MODEL.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            let port = port.unwrap_or_else(|| env_parse_with_default("PORT", DEFAULT_PORT));
            commands::serve::run(port, host).await?;
        },
        Commands::Load { file } => {
            commands::load::run(file).await?;
        },
    }

    Ok(())
}

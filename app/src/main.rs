#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use adfacts_config::{Config, LogConfig, OutputFormat};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;
mod output;

use command::{
    AnnotateInput, AnnotateStrategy, CommandStrategy, InfoStrategy, InitStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "adfacts")]
#[command(about = "Extract facts from classified-ad text read on stdin", long_about = None)]
struct Cli {
    /// Output format, overriding the config file (debug, json, lines)
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Ad title to carry with the body
    #[arg(short = 't', long)]
    title: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Init,
    /// Show effective configuration and patterns
    Info,
    /// Show version
    Version,
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default();
    let level = config
        .as_ref()
        .map_or_else(|_| LogConfig::default().level, |c| c.log.level.clone());
    init_tracing(&level)?;

    match cli.command {
        None => {
            AnnotateStrategy
                .execute(AnnotateInput {
                    config: config?,
                    format: cli.format,
                    title: cli.title,
                })
                .await
        }
        Some(Commands::Info) => InfoStrategy.execute(config?).await,
        Some(Commands::Init) => InitStrategy.execute(()).await,
        Some(Commands::Version) => VersionStrategy.execute(()).await,
    }
}

//! Annotate the ad text read from standard input.

use adfacts_config::{Config, OutputFormat};
use adfacts_extract::{Ad, ExtractionEngine};
use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::info;

use crate::output::render;

/// Input parameters for the annotate strategy.
#[derive(Debug, Clone)]
pub struct AnnotateInput {
    pub config: Config,
    /// Format override from the command line.
    pub format: Option<OutputFormat>,
    pub title: Option<String>,
}

/// Strategy for annotating one ad.
///
/// Reads all of stdin as UTF-8 ad body, extracts its facts and prints them
/// to stdout.
#[derive(Debug, Clone, Copy)]
pub struct AnnotateStrategy;

impl super::CommandStrategy for AnnotateStrategy {
    type Input = AnnotateInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut body = String::new();
        tokio::io::stdin()
            .read_to_string(&mut body)
            .await
            .context("Failed to read ad text from stdin")?;
        info!("Read {} bytes of ad text", body.len());

        let ad = Ad {
            title: input.title,
            ..Ad::from_body(body)
        };

        let engine = ExtractionEngine::with_config(input.config.extraction);
        let facts = engine.annotate(&ad);
        info!(
            "Extracted {} facts using {} resolution",
            facts.len(),
            engine.config().resolver.as_str()
        );

        let format = input.format.unwrap_or(input.config.output.format);
        let rendered = render(&facts, format)?;

        let mut stdout = tokio::io::stdout();
        stdout.write_all(rendered.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

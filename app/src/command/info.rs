use adfacts_config::Config;
use adfacts_extract::ExtractionEngine;

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Config file location and whether it exists
/// - Logging, output and extraction settings
/// - The pattern table the engine runs
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Config;

    async fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        println!("=== adfacts Configuration ===\n");

        let config_path = Config::config_path()?;
        let status = if config_path.exists() {
            "present"
        } else {
            "missing, using defaults"
        };
        println!("Config File: {} ({status})", config_path.display());
        println!();

        println!("Logging:");
        println!("  Level: {}", config.log.level);
        println!();

        println!("Output:");
        println!("  Format: {}", config.output.format);
        println!();

        let engine = ExtractionEngine::with_config(config.extraction);
        println!("Extraction:");
        println!("  Resolver: {}", engine.config().resolver.as_str());
        println!("  Patterns:");
        for pattern in engine.patterns() {
            println!("    {:<20} {}", pattern.name(), pattern.pattern());
        }

        Ok(())
    }
}

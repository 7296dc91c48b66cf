use adfacts_config::Config;

/// Strategy for initializing the configuration.
///
/// This strategy creates the default configuration file at `~/adfacts/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Configuration options:");
        println!("   - log.level: tracing filter used when RUST_LOG is unset");
        println!("   - output.format: debug, json or lines");
        println!("   - extraction.resolver: pairwise or sweep");
        Ok(())
    }
}

//! Configuration file for the `adfacts` command.

mod schema;

pub use schema::{Config, LogConfig, OutputConfig, OutputFormat};

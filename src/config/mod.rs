pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_paths, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_DRIVERS_FILE: &str = "drivers.txt";
pub const DEFAULT_INVOICE_FILE: &str = "invoice.txt";
pub const DEFAULT_CURRENCY: &str = "R";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "food-quick")]
#[command(about = "Take a food delivery order and write its invoice")]
pub struct CliConfig {
    /// Path to an optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the drivers and invoice files are resolved against
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Driver roster, one `name, location, load` record per line
    #[arg(long)]
    pub drivers_file: Option<String>,

    /// Invoice output file, overwritten on every run
    #[arg(long)]
    pub invoice_file: Option<String>,

    /// Currency prefix printed before every amount
    #[arg(long)]
    pub currency: Option<String>,

    /// Seed for reproducible order numbers
    #[arg(long)]
    pub order_seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Settings after merging command line, settings file and defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub data_dir: String,
    pub drivers_file: String,
    pub invoice_file: String,
    pub currency: String,
    pub order_seed: Option<u64>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            drivers_file: DEFAULT_DRIVERS_FILE.to_string(),
            invoice_file: DEFAULT_INVOICE_FILE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            order_seed: None,
        }
    }
}

impl AppSettings {
    /// Command-line values win over the settings file, which wins over defaults.
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let defaults = Self::default();
        let file = file.cloned().unwrap_or_default();

        Self {
            data_dir: cli
                .data_dir
                .clone()
                .or(file.files.data_dir)
                .unwrap_or(defaults.data_dir),
            drivers_file: cli
                .drivers_file
                .clone()
                .or(file.files.drivers)
                .unwrap_or(defaults.drivers_file),
            invoice_file: cli
                .invoice_file
                .clone()
                .or(file.files.invoice)
                .unwrap_or(defaults.invoice_file),
            currency: cli
                .currency
                .clone()
                .or(file.invoice.currency)
                .unwrap_or(defaults.currency),
            order_seed: cli.order_seed.or(file.order.seed),
        }
    }

    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading settings file: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };
        Ok(Self::resolve(cli, file.as_ref()))
    }
}

impl ConfigProvider for AppSettings {
    fn drivers_file(&self) -> &str {
        &self.drivers_file
    }

    fn invoice_file(&self) -> &str {
        &self.invoice_file
    }

    fn currency(&self) -> &str {
        &self.currency
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> Result<()> {
        validate_path("files.data_dir", &self.data_dir)?;
        validate_path("files.drivers", &self.drivers_file)?;
        validate_path("files.invoice", &self.invoice_file)?;
        validate_distinct_paths("files", &self.drivers_file, &self.invoice_file)?;
        validate_non_empty_string("invoice.currency", &self.currency)?;
        Ok(())
    }
}

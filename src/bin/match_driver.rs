use anyhow::Context;
use clap::Parser;
use food_quick::config::toml_config::TomlConfig;
use food_quick::utils::logger;
use food_quick::utils::validation::Validate;
use food_quick::{AppSettings, CliConfig, DriverMatcher, LocalStorage};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "match-driver")]
#[command(about = "Look up the least-loaded driver for a location without taking an order")]
struct Args {
    /// Restaurant location to match drivers against
    #[arg(short, long)]
    location: String,

    /// Path to TOML settings file
    #[arg(short, long)]
    config: Option<String>,

    /// Directory the drivers file is resolved against
    #[arg(long)]
    data_dir: Option<String>,

    /// Driver roster file
    #[arg(long)]
    drivers_file: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    location: &'a str,
    driver: Option<&'a food_quick::core::Driver>,
    drivers_read: usize,
    rejected: &'a [food_quick::core::matcher::RejectedLine],
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let file = match &args.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?,
        ),
        None => None,
    };
    let cli = CliConfig {
        data_dir: args.data_dir.clone(),
        drivers_file: args.drivers_file.clone(),
        ..CliConfig::default()
    };
    let settings = AppSettings::resolve(&cli, file.as_ref());
    settings.validate().context("Invalid settings")?;

    let storage = LocalStorage::new(settings.data_dir.clone());
    let matcher = DriverMatcher::new(&storage, &settings.drivers_file);
    let roster = matcher
        .load_roster()
        .with_context(|| format!("Failed to read '{}'", settings.drivers_file))?;

    let report = Report {
        location: &args.location,
        driver: roster.best_for(&args.location),
        drivers_read: roster.drivers().len(),
        rejected: roster.rejected(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match report.driver {
        Some(driver) => println!("{}", driver),
        None => println!("No driver available in {}", args.location),
    }
    for rejected in report.rejected {
        println!("Skipped line {}: {}", rejected.line, rejected.reason);
    }

    Ok(())
}

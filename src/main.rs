use anyhow::Context;
use clap::Parser;
use food_quick::utils::error::{ErrorSeverity, OrderError};
use food_quick::utils::{logger, validation::Validate};
use food_quick::{
    AppSettings, CliConfig, FlowOutcome, LineConsole, LocalStorage, OrderFlow,
    RandomOrderNumbers,
};

fn exit_code(e: &OrderError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting food-quick");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = AppSettings::load(&config).with_context(|| {
        format!(
            "Failed to load settings file '{}'",
            config.config.as_deref().unwrap_or_default()
        )
    })?;

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    let storage = LocalStorage::new(settings.data_dir.clone());
    let mut numbers = RandomOrderNumbers::from_seed(settings.order_seed);
    let mut console = LineConsole::stdio();
    let flow = OrderFlow::new(storage, settings);

    match flow.run(&mut console, &mut numbers) {
        Ok(FlowOutcome::Completed(summary)) => {
            tracing::info!(
                "Order {} completed (total {:.2}, invoice {:?})",
                summary.order_number,
                summary.total,
                summary.invoice_path
            );
        }
        Ok(outcome) => {
            tracing::info!("Order ended early: {:?}", outcome);
        }
        Err(e) => {
            tracing::error!(
                "Order failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            println!("Unexpected error: {}", e.user_friendly_message());
            eprintln!("{}", e.recovery_suggestion());

            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}

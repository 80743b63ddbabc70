use clap::Parser;
use sac::app::commands;
use sac::utils::logger;
use sac::{Cli, ScaffoldError, Settings};

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.debug, cli.verbose) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e.report());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.log_format == "json" {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(settings.debug, settings.verbose);
    }
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = commands::run_cli(&cli, &settings) {
        match e.downcast_ref::<ScaffoldError>() {
            Some(scaffold_error) => tracing::debug!(
                "❌ {} failed (Category: {:?}): {}",
                cli.command.path(),
                scaffold_error.category(),
                scaffold_error.user_friendly_message()
            ),
            None => tracing::debug!("❌ {} failed: {:#}", cli.command.path(), e),
        }

        eprintln!("Error: {:#}", e);
        if let Some(scaffold_error) = e.downcast_ref::<ScaffoldError>() {
            eprintln!("💡 {}", scaffold_error.recovery_suggestion());
        }
        eprintln!("Run 'sac {} --help' for usage.", cli.command.path());
        std::process::exit(1);
    }
}

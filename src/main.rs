use anyhow::Context;
use clap::Parser;

use bookmarks_service::cli::{Cli, Commands};
use bookmarks_service::config::StaticConfig;
use bookmarks_service::runtime::modes::{self, Mode};
use bookmarks_service::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = StaticConfig::load(&cli.config).context("Failed to load configuration")?;

    match modes::detect_mode(cli.command.as_ref()) {
        Mode::Server => {
            let _guard = init_logging(&config.logging).context("Failed to initialize logging")?;
            modes::run_server(config).await
        }
        Mode::Cli => {
            let result = match cli.command {
                Some(Commands::Superuser { password, stdin }) => {
                    modes::cli::run_superuser(&config, password, stdin).await
                }
                Some(Commands::Config { action }) => modes::cli::run_config_command(action),
                Some(Commands::Serve) | None => Ok(()),
            };

            if let Err(e) = result {
                std::process::exit(modes::cli::report_error(&e));
            }
            Ok(())
        }
    }
}

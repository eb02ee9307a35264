mod cli;
mod config;
mod github;
mod http;
mod logger;
mod markup;
mod poll;
mod server;
mod slack;
mod state;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use poll::Notifier;
use server::AppState;
use state::Backend;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.log_level.into())?;

    log::info!("Starting");

    // problems are reported through the log, never through the exit status
    if let Err(err) = execute(cli).await {
        log::error!("{:#}", err);
    }

    Ok(())
}

async fn execute(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())
        .await
        .context("Cannot load config file")?;

    let notifier = Notifier::from_config(&config).context("Cannot set up the notifier")?;
    let store = Backend::from_config(&config.state, notifier.github());

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            log::info!("Checking releases");
            let summary = notifier.run(&store).await;
            log::info!(
                "Done: {} notified, {} unchanged, {} failed",
                summary.notified.len(),
                summary.unchanged.len(),
                summary.failed.len()
            );
        }
        Command::Serve { address } => {
            let address = address.unwrap_or(config.server.address);
            server::serve(&address, AppState::new(notifier, store))
                .await
                .context("Cannot run the http server")?;
        }
    }

    Ok(())
}

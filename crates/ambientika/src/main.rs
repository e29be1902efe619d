mod cli;
mod commands;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ambientika_core::{Credentials, Hub, HubConfig, TransportConfig};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Completions need no cloud session
        Command::Completions { shell } => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ambientika", &mut std::io::stdout());
            Ok(())
        }

        // Everything else authenticates first
        cmd => {
            let config = build_hub_config(&cli.global)?;
            let hub = Arc::new(Hub::new(config));
            hub.login().await?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &hub, &cli.global).await
        }
    }
}

/// Build a `HubConfig` from CLI flags and environment variables,
/// prompting for the password when it was given nowhere else.
fn build_hub_config(global: &cli::GlobalOpts) -> Result<HubConfig, CliError> {
    let username = global
        .username
        .clone()
        .ok_or(CliError::NoCredentials)?;
    let password = match global.password.clone() {
        Some(password) => password,
        None => rpassword::prompt_password(format!("Password for {username}: "))?,
    };

    let host: url::Url = global.host.parse().map_err(|_| CliError::Validation {
        field: "host".into(),
        reason: format!("invalid URL: {}", global.host),
    })?;

    let transport = TransportConfig {
        timeout: std::time::Duration::from_secs(global.timeout),
        ..TransportConfig::default()
    };

    let mut config = HubConfig::new(Credentials::new(username, password)).with_host(host);
    config.transport = transport;
    Ok(config)
}

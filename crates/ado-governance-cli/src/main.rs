//! ado-gov - remove Component Governance policy references from the terminal

use std::path::PathBuf;

use ado_governance::{AdoClient, AdoError, ClientConfig};
use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod output;

/// ado-gov CLI application
#[derive(Parser)]
#[command(name = "ado-gov")]
#[command(about = "Azure DevOps Component Governance CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "ADO_GOV_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Remove a policy reference from a governed repository
    RemovePolicy {
        /// Policy to remove
        #[arg(long)]
        policy_id: String,

        /// Governed repository ID (not necessarily the native repository ID)
        #[arg(long)]
        repository_id: String,

        /// Print the request instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

fn config_path(cli_path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli_path {
        return Ok(path);
    }

    let default = ClientConfig::default_path()
        .ok_or_else(|| anyhow!("no configuration directory on this platform; pass --config"))?;
    if !default.exists() {
        return Err(anyhow!(
            "no configuration found at {}; pass --config or set ADO_GOV_CONFIG",
            default.display()
        ));
    }
    Ok(default)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let path = config_path(cli.config)?;
    debug!(path = %path.display(), "Loading configuration");
    let config = ClientConfig::load(&path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;

    match cli.command {
        Commands::RemovePolicy {
            policy_id,
            repository_id,
            dry_run,
        } => {
            if dry_run {
                let client = AdoClient::unauthenticated(&config)?;
                let url = client
                    .governance()
                    .policy_reference_url(&policy_id, &repository_id);
                debug!(%url, "Dry run, request not sent");
                output::print_request("DELETE", &url);
                output::print_warning("Dry run: no request sent");
                return Ok(());
            }

            let client = AdoClient::new(&config)?;
            match client
                .governance()
                .remove_policy(&policy_id, &repository_id)
                .await
            {
                Ok(()) => {
                    output::print_success(&format!(
                        "Removed policy {} from {}",
                        policy_id, repository_id
                    ));
                    Ok(())
                }
                Err(AdoError::Http { message, response }) => {
                    output::print_error(&format!("{} (HTTP {})", message, response.status));
                    output::print_body(&response.body);
                    std::process::exit(1);
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

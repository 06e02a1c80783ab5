//! reindex - reconcile indexed pages between Search Console and IndexNow
//!
//! CLI binary for discovering, inspecting, and submitting site URLs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use site_reindex::config::{Config, ConfigOverrides};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;

#[derive(Parser)]
#[command(name = "reindex")]
#[command(about = "Reconcile a site's indexed pages between Search Console and IndexNow")]
#[command(version)]
struct Cli {
    /// Path to the Search Console service-account key file
    #[arg(long, global = true)]
    key_file: Option<PathBuf>,

    /// IndexNow shared key
    #[arg(long, global = true)]
    indexnow_key: Option<String>,

    /// Path of the submission history file
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Read candidate URLs from a CSV file instead of the sitemap
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Show what would be submitted without contacting any provider
    #[arg(long, global = true)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit explicit URLs to the IndexNow providers
    Submit {
        /// Domain the URLs belong to
        #[arg(long)]
        host: String,

        /// URLs to submit
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose)?;

    let overrides = ConfigOverrides {
        key_file: args.key_file,
        indexnow_key: args.indexnow_key,
        state_path: args.state_file,
        csv: args.csv,
    };

    match args.command {
        None => {
            let config = Config::load(overrides)?;
            cli::run_reconcile(&config, args.dry_run).await?;
        }
        Some(Commands::Submit { host, urls }) => {
            let config = Config::load(overrides)?;
            cli::run_submit(&config, &host, &urls, args.dry_run).await?;
        }
        Some(Commands::Auth { action }) => match action {
            AuthAction::Test => cli::run_auth_test(overrides.key_file).await?,
            AuthAction::Setup => cli::run_auth_setup(),
        },
    }

    Ok(())
}

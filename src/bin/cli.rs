//! OctoFit CLI
//!
//! Terminal client for the OctoFit Tracker API:
//! - Show a resource view as a table or JSON
//! - Print the computed backend endpoints
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use octofit::{
    build_page, endpoint_url, logging, render_text, view, Config, HttpSource, Resource, ViewState,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "octofit-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the OctoFit Tracker API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, bypassing the codespace host template
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Show info-level logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and show one resource view
    View {
        /// Resource name (activities, leaderboard, teams, users, workouts)
        resource: Resource,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the endpoint URL of every resource
    Endpoints,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };
    if let Some(base_url) = cli.base_url {
        config.backend.base_url = Some(base_url);
    }
    if !cli.verbose {
        config.logging.level = "warn".to_string();
    }
    logging::init(&config.logging).context("Failed to initialize logging")?;

    match cli.command {
        Commands::View { resource, format } => {
            let source = HttpSource::new(&config.backend)?;
            let url = endpoint_url(&config.backend, resource);

            eprintln!("Loading {}...", resource.title());
            let view = view::load(resource, url, &source).await;

            match (view.state(), format) {
                (ViewState::Failed { message }, _) => {
                    eprintln!("{}: {}", resource.error_heading(), message);
                    std::process::exit(1);
                }
                (state, OutputFormat::Json) => {
                    println!("{}", serde_json::to_string_pretty(state.records())?);
                }
                (state, OutputFormat::Table) => {
                    print!("{}", render_text(resource, &build_page(resource, state)));
                }
            }
        }

        Commands::Endpoints => {
            for resource in Resource::ALL {
                println!("{:<12} {}", resource.segment(), endpoint_url(&config.backend, resource));
            }
        }

        Commands::Config { output } => {
            let config = octofit::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use apidir_core::DEFAULT_API_DIR;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Settings file location relative to the working directory, mirroring the
/// `/src/settings.json` URL the page fetches.
const DEFAULT_SETTINGS_FILE: &str = "./src/settings.json";

#[derive(Parser)]
#[command(name = "apidir")]
#[command(about = "API directory: browse, scan and invoke listed endpoints", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the catalog page, the invocation console and the catalog documents
    Serve {
        #[arg(short, long, default_value = "8080", env = "APIDIR_PORT")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1", env = "APIDIR_HOST")]
        host: String,
        /// Authored settings document
        #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE, env = "APIDIR_SETTINGS")]
        settings: PathBuf,
        /// Endpoint directory to scan for `/api/list`
        #[arg(short, long, env = "APIDIR_API_DIR")]
        api_dir: Option<PathBuf>,
        /// Origin that hosts the listed endpoints (defaults to this server)
        #[arg(short, long, env = "APIDIR_TARGET")]
        target: Option<String>,
        /// Endpoint source extensions to scan for
        #[arg(long = "ext", default_values_t = default_extensions())]
        extensions: Vec<String>,
    },
    /// Scan an endpoint directory and print the detected list
    Scan {
        #[arg(default_value = DEFAULT_API_DIR)]
        dir: PathBuf,
        #[arg(long = "ext", default_values_t = default_extensions())]
        extensions: Vec<String>,
    },
    /// Load, merge and print the catalog
    Catalog {
        #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE, env = "APIDIR_SETTINGS")]
        settings: PathBuf,
        #[arg(short, long, env = "APIDIR_API_DIR")]
        api_dir: Option<PathBuf>,
        /// Fetch both documents from a running server instead
        #[arg(short, long, conflicts_with_all = ["settings", "api_dir"])]
        remote: Option<String>,
    },
    /// Invoke one endpoint and print its response
    Invoke {
        /// Endpoint path, e.g. `/api/echo?msg`
        path: String,
        #[arg(short, long, default_value = "http://127.0.0.1:8080", env = "APIDIR_TARGET")]
        base: String,
        /// Parameter value as `name=value`; repeat for each parameter
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,
    },
}

fn default_extensions() -> Vec<String> {
    apidir_core::DEFAULT_ENDPOINT_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, settings, api_dir, target, extensions } => {
            commands::serve::run(commands::serve::ServeArgs {
                port,
                host,
                settings,
                api_dir,
                target,
                extensions,
            })
            .await?;
        },
        Commands::Scan { dir, extensions } => commands::scan::run(&dir, extensions)?,
        Commands::Catalog { settings, api_dir, remote } => {
            commands::catalog::run(settings, api_dir, remote).await?;
        },
        Commands::Invoke { path, base, params } => {
            commands::invoke::run(&path, &base, &params).await?;
        },
    }

    Ok(())
}

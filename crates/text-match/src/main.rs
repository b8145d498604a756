//! Text Match - Entry Point
//!
//! Uploads two PDFs to the comparison service and prints the matches.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use text_match::config::{Config, api};
use text_match::form::SUBMITTING_LABEL;
use text_match::models::{FileSlot, OutputFormat, SelectedFile};
use text_match::{App, ComparisonClient};

#[derive(Parser, Debug)]
#[command(name = "text-match")]
#[command(about = "Compare two PDFs for similar paragraphs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the comparison service
    #[arg(long, global = true, env = "TEXT_MATCH_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare two PDF files
    Compare {
        /// First PDF (the text being checked)
        file1: Option<PathBuf>,

        /// Second PDF (the comparison base)
        file2: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check that the comparison service is reachable
    Status,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries the rendered results
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.base_url {
        Some(url) => Config::new(url.as_str()),
        None => Config::from_env()?,
    };

    if let Some(secs) = cli.timeout {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }

    config.validate()?;
    Ok(config)
}

/// Runs one comparison. Failures the user can act on are reported as a
/// notice on stderr and a failing exit code.
async fn compare(
    client: &ComparisonClient,
    file1: Option<PathBuf>,
    file2: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let mut app = App::new();

    for (slot, path) in FileSlot::ALL.into_iter().zip([file1, file2]) {
        let Some(path) = path else { continue };
        match SelectedFile::open(&path).await {
            Ok(file) => app.select(slot, file),
            Err(e) => {
                tracing::debug!(error = %e, path = %path.display(), "Could not load file");
                eprintln!("{}", e.to_user_message());
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    // JSON consumers read stderr as diagnostics only
    if app.form().is_ready() && !format.is_json() {
        eprintln!("{SUBMITTING_LABEL}");
    }

    if let Err(e) = app.submit(client).await {
        match app.notice() {
            Some(notice) => eprintln!("{notice}"),
            None => eprintln!("{}", e.to_user_message()),
        }
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", app.render(format)?);
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = build_config(&cli)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.base_url,
        default_base_url = api::DEFAULT_BASE_URL,
        "Starting Text Match"
    );

    let client = ComparisonClient::new(config)?;

    match cli.command {
        Command::Compare { file1, file2, format } => compare(&client, file1, file2, format).await,
        Command::Status => {
            let status = client.status().await?;
            println!("{}: {}", client.base_url(), status.message);
            Ok(ExitCode::SUCCESS)
        }
    }
}

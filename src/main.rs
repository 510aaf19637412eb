//! Lintmux - dispatcher for external static-analysis tools
//!
//! A CLI tool that runs a security linter, style linter, code-quality
//! linter, and type-checker as subprocesses against a target file or
//! directory and aggregates their raw output into one report.
//!
//! Exit codes:
//!   0 - Success (including runs where individual tools failed)
//!   1 - Runtime error (missing target, bad arguments, config failure)

mod cli;
mod config;
mod error;
mod models;
mod report;
mod runner;

use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use models::AnalysisRequest;
use tracing::{debug, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Lintmux v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the analysis
    match run_analysis(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .lintmux.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".lintmux.toml");

    if path.exists() {
        eprintln!(".lintmux.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .lintmux.toml")?;

    println!("Created .lintmux.toml with default settings.");
    println!("Edit it to pre-enable tools and set a default report file.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete analysis workflow: validate, dispatch tools, print,
/// and optionally save the report.
async fn run_analysis(args: Args) -> Result<()> {
    // Load configuration and merge CLI flags over it
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Validated by Args::validate
    let target = args
        .filepath
        .clone()
        .context("A target filepath is required")?;

    let request = AnalysisRequest {
        target,
        language: args.language,
        selection: config.tool_selection(),
    };

    info!(
        "Analyzing {} (language: {})",
        request.target.display(),
        request.language
    );

    let bundle = runner::run(&request).await?;

    // Print results to console
    let rendered = report::render_bundle(&bundle);
    println!("\nAnalysis Results:");
    print!("{}", rendered);

    // Save the report if requested. Write failures are logged but the
    // console output above has already been produced.
    if let Some(ref report_file) = config.report.file {
        let path = std::path::Path::new(report_file);
        match report::save_report(path, &rendered) {
            Ok(()) => println!("\nReport saved to: {}", path.display()),
            Err(e) => warn!("{}", e),
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .lintmux.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}

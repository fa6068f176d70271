mod cli;
mod config;
mod dates;
mod error;
mod extract;
mod input;
mod report;
mod score;
mod types;

use crate::error::{Result, ScoreError};
use chrono::{DateTime, SubsecRound, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_now(pinned: Option<&str>) -> Result<DateTime<Utc>> {
    match pinned {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|e| ScoreError::InvalidTimestamp(format!("{raw}: {e}"))),
        None => Ok(Utc::now().trunc_subsecs(3)),
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let root = std::env::current_dir()?;
            let loaded = config::load_config(&root, cmd.config.as_deref())?;
            let now = resolve_now(cmd.now.as_deref())?;

            let text = input::read_source(&cmd.input)?;
            let pages = input::parse_pages(&text)?;
            let results = score::compute_batch(&pages, now, &loaded.weights());

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Items) => report::OutputFormat::Items,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => loaded
                    .output_format()
                    .unwrap_or(report::OutputFormat::Json),
            };
            let rendered = report::render(&results, output_format)?;
            println!("{rendered}");

            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "health-score",
    version,
    about = "Customer health scoring for workspace client records"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a batch of client pages and print update payloads
    Score(ScoreCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// JSON file with client pages, or `-` for stdin
    pub input: PathBuf,
    /// Output format; falls back to the configured format, then json
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Pin the clock used for day arithmetic (RFC 3339)
    #[arg(long)]
    pub now: Option<String>,
    /// Config file to use instead of ./health-score.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Items,
    Md,
}

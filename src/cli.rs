use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sangbad",
    version,
    about = "Bengali news content quality and ad-safety scorer"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read configuration from this file instead of the layered defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one article and print the report
    Score(ScoreCommand),
    /// Score one article and exit non-zero when it needs review or is not ad-safe
    Check(CheckCommand),
    /// Score every .txt and .md article under a directory
    Batch(BatchCommand),
    /// Print the effective ad-safety keyword table
    Keywords,
}

#[derive(Args, Clone, Debug)]
pub struct ArticleArgs {
    /// Article file; reads stdin when omitted or "-"
    pub path: Option<PathBuf>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub article: ArticleArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub article: ArticleArgs,
    /// Overall score below this needs review; defaults to the configured review threshold
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

#[derive(Args)]
pub struct BatchCommand {
    pub dir: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

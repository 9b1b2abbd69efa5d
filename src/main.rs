use clap::Parser;
use sangbad::article::{self, Overrides};
use sangbad::cli;
use sangbad::config;
use sangbad::report::{self, OutputFormat};
use sangbad::types::config::ScorerConfig;
use sangbad::types::metrics::ContentInput;
use sangbad::types::report::BatchReport;
use sangbad::{analyze, SangbadError};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn load_article(args: &cli::ArticleArgs) -> Result<(ContentInput, Option<String>), SangbadError> {
    let overrides = Overrides {
        title: args.title.as_deref(),
        image_url: args.image_url.as_deref(),
    };
    match args
        .path
        .as_deref()
        .filter(|path| path.as_os_str() != "-")
    {
        Some(path) => {
            let input = article::read_article(path, overrides)?;
            Ok((input, Some(path.display().to_string())))
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok((article::parse_article(&text, overrides)?, None))
        }
    }
}

fn score_directory(dir: &Path, config: &ScorerConfig) -> Result<BatchReport, SangbadError> {
    if !dir.is_dir() {
        return Err(SangbadError::PathNotFound(dir.display().to_string()));
    }

    let mut reports = Vec::new();
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| article::is_article_file(entry.path()))
    {
        let path = entry.path();
        let relative = path.strip_prefix(dir).unwrap_or(path).display().to_string();
        match article::read_article(path, Overrides::default()) {
            Ok(input) => reports.push(analyze(&input, config, Some(&relative))),
            Err(e) => tracing::warn!(path = %relative, error = %e, "skipping article"),
        }
    }
    Ok(BatchReport::new(reports))
}

fn run() -> Result<i32, SangbadError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let root = std::env::current_dir()?;
    let config = config::load_config(&root, cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let (input, source) = load_article(&cmd.article)?;
            let score_report = analyze(&input, &config, source.as_deref());
            let rendered = report::render(&score_report, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let (input, source) = load_article(&cmd.article)?;
            let config = match cmd.min_score {
                Some(min_score) => config.with_review_threshold(min_score),
                None => config,
            };
            let score_report = analyze(&input, &config, source.as_deref());
            let overall = score_report.overall;

            if !cli.quiet {
                println!(
                    "check: overall {} ({}), ad-safe {}",
                    overall.overall_score,
                    score_report.grade.label(),
                    if overall.is_ad_safe { "yes" } else { "no" }
                );
                for finding in &score_report.findings {
                    let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                    println!("[{}] {}: {}", level, finding.id, finding.title);
                    println!("  {}", finding.body);
                }
            }

            if !overall.is_ad_safe {
                Ok(exit_code::BLOCKING)
            } else if score_report.needs_review() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Batch(cmd) => {
            let batch = score_directory(&cmd.dir, &config)?;
            if batch.article_count == 0 {
                eprintln!("warning: no articles found in {}", cmd.dir.display());
            }
            let rendered = report::render_batch(&batch, output_format(&cmd.format))?;
            println!("{rendered}");

            if batch.has_blocking() {
                Ok(exit_code::BLOCKING)
            } else if batch.needs_review() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Keywords => {
            println!("{:<14} {:>6}  {:<20} term", "category", "weight", "group");
            for entry in config.keywords() {
                println!(
                    "{:<14} {:>6}  {:<20} {}",
                    entry.category.as_str(),
                    entry.weight,
                    entry.group.as_deref().unwrap_or("-"),
                    entry.term
                );
            }
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

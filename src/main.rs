mod input;
mod logging;
mod model;
mod nlp;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::input::InputError;
use crate::logging::{LOG_LEVELS, init_logging};
use crate::model::thresholds::{MetricsProfile, PronounMode};
use crate::nlp::{NlpConfig, NlpError, NlpToolkit};
use crate::pipeline::stage1_ingest::run_stage1;
use crate::pipeline::stage2_metrics::{ArticleMetricsComputer, run_stage2};
use crate::pipeline::stage3_report::{ReportPaths, Stage3Input, write_reports};
use crate::report::ReportError;

/// Readability and sentiment metrics for batches of articles.
#[derive(Parser, Debug)]
#[command(name = "kira-textmetrics", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the metric table for every article in the input table
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Input table (TSV, optionally .gz) with URL_ID, ARTICLE_TITLE, ARTICLE_TEXT
    #[arg(long, default_value = "Input.tsv")]
    input: PathBuf,

    /// Output directory for Output.tsv, summary.json and report.txt
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Personal pronoun matching strategy
    #[arg(long, value_enum, default_value_t = PronounMode::Substring)]
    pronoun_mode: PronounMode,

    /// Sentiment lexicon replacing the embedded one
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info", value_parser = LOG_LEVELS)]
    log_level: String,
}

#[derive(Debug, Clone)]
struct RunConfig {
    input_path: PathBuf,
    out_dir: PathBuf,
    profile: MetricsProfile,
    nlp: NlpConfig,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        Self {
            input_path: args.input,
            out_dir: args.out,
            profile: MetricsProfile::for_mode(args.pronoun_mode),
            nlp: NlpConfig {
                lexicon_path: args.lexicon,
            },
        }
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Nlp(#[from] NlpError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;
    init_logging(&args.log_level);

    if let Err(err) = run(&RunConfig::from(args)) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<ReportPaths, RunError> {
    tracing::info!(
        input = %config.input_path.display(),
        out = %config.out_dir.display(),
        pronoun_mode = config.profile.pronoun_mode.as_str(),
        "starting text analysis"
    );

    let toolkit = NlpToolkit::initialize(&config.nlp)?;

    let stage1 = run_stage1(&config.input_path)?;
    let computer = ArticleMetricsComputer::from_toolkit(&toolkit, config.profile.clone());
    let stage2 = run_stage2(&stage1.table.records, &computer)?;

    let input = Stage3Input {
        results: &stage2.results,
        skipped: &stage2.skipped,
        n_rows: stage1.table.records.len(),
        input_path: config.input_path.display().to_string(),
        profile: &config.profile,
        lexicon: toolkit.lexicon_source().to_string(),
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let paths = write_reports(&input, &config.out_dir)?;

    tracing::info!(
        output = %paths.table.display(),
        without_text = stage1.n_without_text,
        "text analysis complete"
    );
    Ok(paths)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;

// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use clap::{Args, Parser, Subcommand};
use movers_cli::{
    build_report, describe, rank, write_json_output, CliError, Dataset, ErrorEnvelope,
    ErrorPayload, ReportConfig,
};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Rank variables by how surprising their recent values are and describe
/// their latest change.
#[derive(Parser)]
#[command(name = "movers")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score every variable and list them from most to least surprising
    Rank(DatasetArgs),
    /// Ranking plus long and short summaries of the top variables
    Report(DatasetArgs),
    /// Every summary form and the trend context for one variable
    Describe(DescribeArgs),
}

#[derive(Args)]
struct DatasetArgs {
    /// JSON config naming the columns, time window and report sizes
    #[arg(short, long)]
    config: PathBuf,

    /// Long-format CSV with one row per variable and period
    dataset: PathBuf,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct DescribeArgs {
    #[command(flatten)]
    dataset: DatasetArgs,

    /// Variable to describe
    #[arg(long)]
    variable: String,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        emit_structured_error(&err);
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Rank(args) => {
            let (config, dataset) = load(&args)?;
            let ranking = rank(&dataset, &config)?;
            info!(variables = ranking.variables.len(), "ranking complete");
            write_json_output(&ranking, args.output.as_deref())
        }
        Command::Report(args) => {
            let (config, dataset) = load(&args)?;
            let report = build_report(&dataset, &config)?;
            info!(
                long_form = report.long_form.len(),
                short_form = report.short_form.len(),
                "report complete"
            );
            write_json_output(&report, args.output.as_deref())
        }
        Command::Describe(args) => {
            let (config, dataset) = load(&args.dataset)?;
            let description = describe(&dataset, &config, &args.variable)?;
            write_json_output(&description, args.dataset.output.as_deref())
        }
    }
}

fn load(args: &DatasetArgs) -> Result<(ReportConfig, Dataset), CliError> {
    let config = ReportConfig::load(&args.config)?;
    let dataset = Dataset::load(&args.dataset, &config)?;
    info!(
        dataset = %config.dataset_name,
        variables = dataset.len(),
        "loaded dataset"
    );
    Ok((config, dataset))
}

fn emit_structured_error(err: &CliError) {
    eprintln!("{}", structured_error_json(err));
}

fn structured_error_json(err: &CliError) -> String {
    let envelope = ErrorEnvelope {
        error: ErrorPayload::from(err),
    };

    match serde_json::to_string_pretty(&envelope) {
        Ok(json) => json,
        Err(_) => format!(
            "{{\"error\":{{\"code\":\"{}\",\"message\":\"{}\"}}}}",
            err.code(),
            err
        ),
    }
}

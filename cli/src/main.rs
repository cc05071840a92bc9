//! CLI entrypoint for research-report
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{CommandFactory, Parser};
use report_application::{
    NoProgress, PipelineProgress, RetryingGenerator, ReviewReportUseCase, RunResearchInput,
    RunResearchUseCase, TextGenerator, TokioDelay,
};
use report_domain::ReportStyle;
use report_infrastructure::{
    ConfigLoader, FileConfig, GeminiTextGenerator, HtmlContentFetcher, build_search_provider,
};
use report_presentation::{
    AppState, Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress,
};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_env_only()?
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    let _log_guard = init_tracing(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting research-report");

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Research {
            topic,
            num_results,
            style,
            output,
            quiet,
        } => run_research(&config, topic, num_results, style, output, quiet).await,
        Command::Review { file, output } => run_review(&config, file, output).await,
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let state = AppState {
                research: Arc::new(build_research(&config)?),
            };
            report_presentation::serve(&bind, state)
                .await
                .with_context(|| format!("HTTP server on {} failed", bind))
        }
    }
}

/// Console layer filtered by verbosity, plus an optional log file layer
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new("info"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}

// === Dependency Injection ===

fn build_generator(config: &FileConfig) -> Result<Arc<dyn TextGenerator>> {
    Ok(Arc::new(GeminiTextGenerator::from_config(&config.llm)?))
}

fn build_reviewer(
    config: &FileConfig,
    generator: Arc<dyn TextGenerator>,
) -> Result<ReviewReportUseCase> {
    let review = config.review.to_review_config()?;
    let retrying = RetryingGenerator::new(generator, Arc::new(TokioDelay), review.retry);
    Ok(ReviewReportUseCase::new(retrying, review))
}

fn build_research(config: &FileConfig) -> Result<RunResearchUseCase> {
    let generator = build_generator(config)?;
    let reviewer = build_reviewer(config, generator.clone())?;
    Ok(RunResearchUseCase::new(
        build_search_provider(&config.search)?,
        Arc::new(HtmlContentFetcher::from_config(&config.fetch)?),
        generator,
        Arc::new(reviewer),
    ))
}

async fn run_research(
    config: &FileConfig,
    topic: String,
    num_results: usize,
    style: ReportStyle,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let input = RunResearchInput::new(topic.clone(), num_results, style)?;
    let use_case = build_research(config)?;

    let progress: Box<dyn PipelineProgress> = if quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let report = use_case
        .execute_with_progress(input, Local::now().date_naive(), progress.as_ref())
        .await?;

    let rendered = match output {
        OutputFormat::Full => ConsoleFormatter::format_research(&topic, &report),
        OutputFormat::Report => ConsoleFormatter::format_report_only(&report.final_report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };
    println!("{}", rendered);

    Ok(())
}

async fn run_review(config: &FileConfig, file: Option<PathBuf>, output: OutputFormat) -> Result<()> {
    let draft = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read draft {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read draft from stdin")?;
            buf
        }
    };

    let reviewer = build_reviewer(config, build_generator(config)?)?;
    let result = reviewer.execute(&draft, Local::now().date_naive()).await;

    let rendered = match output {
        OutputFormat::Full => ConsoleFormatter::format_review(&result),
        OutputFormat::Report => ConsoleFormatter::format_report_only(&result.final_report),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };
    println!("{}", rendered);

    Ok(())
}

//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use report_domain::{DEFAULT_NUM_RESULTS, DomainError, ReportStyle, validate_num_results};
use std::path::PathBuf;

/// Output format for research and review results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sources, analysis, report, notes and stage timings
    Full,
    /// Only the final report
    Report,
    /// JSON output
    Json,
}

/// CLI arguments for research-report
#[derive(Parser, Debug)]
#[command(name = "research-report")]
#[command(author, version, about = "Research a topic and write a reviewed report")]
#[command(long_about = r#"
research-report searches the web for a topic and turns what it finds into a
reviewed business report.

The run has five stages:
1. Search:   ranked hits from Serper or SerpApi
2. Fetch:    readable text from every hit
3. Analysis: per-source summaries plus overview and keyword tables
4. Writing:  a draft report in the requested style
5. Review:   a polishing pass that never loses the draft

Configuration files are loaded from (in priority order):
1. --config <path>              Explicit config file
2. ./research-report.toml       Project-level config
3. ~/.config/research-report/config.toml   Global config

Example:
  research-report research "solid-state batteries" -n 8 --style detailed
  research-report review draft.md -o json
  research-report serve --bind 127.0.0.1:8000
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (environment still applies)
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full research pipeline for a topic
    Research {
        /// Topic to research
        topic: String,

        /// Number of search results to fetch (1-10)
        #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_RESULTS, value_parser = parse_num_results)]
        num_results: usize,

        /// Report style: concise, detailed or academic
        #[arg(long, default_value = "concise", value_parser = parse_style)]
        style: ReportStyle,

        /// Output format
        #[arg(short, long, value_enum, default_value = "full")]
        output: OutputFormat,

        /// Suppress progress indicators
        #[arg(short, long)]
        quiet: bool,
    },

    /// Review an existing draft report
    Review {
        /// Draft file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "full")]
        output: OutputFormat,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to bind (overrides `[server] bind`)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
}

fn parse_num_results(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    validate_num_results(n).map_err(|e| e.to_string())
}

fn parse_style(s: &str) -> Result<ReportStyle, String> {
    s.parse().map_err(|e: DomainError| e.to_string())
}

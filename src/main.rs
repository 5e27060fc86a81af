// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11ybot CLI - page accessibility checker

use a11ybot::analyzers;
use a11ybot::report::{generate_report, OutputFormat};
use a11ybot::scanner::{self, FetchConfig, Target, DEFAULT_TIMEOUT_SECS};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Fetch a web page and count accessibility issues in its markup
#[derive(Parser)]
#[command(name = "a11ybot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// URL (http/https) or local HTML file to check
    #[arg(required_unless_present = "list_rules")]
    target: Option<String>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: FormatArg,

    /// Output file (stdout if not specified)
    #[arg(long)]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, env = "A11YBOT_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// User-Agent header sent when fetching
    #[arg(long, env = "A11YBOT_USER_AGENT")]
    user_agent: Option<String>,

    /// Exit with status 1 when any issue is found
    #[arg(long)]
    strict: bool,

    /// List every rule and exit
    #[arg(long)]
    list_rules: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "a11ybot=debug" } else { "a11ybot=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_rules {
        for rule in analyzers::all_rules() {
            println!("{:<22} {}", rule.name(), rule.description());
        }
        return Ok(());
    }

    let input = cli.target.context("a target URL or file is required")?;
    let target = Target::parse(&input).with_context(|| format!("Invalid target {}", input))?;

    let mut config = FetchConfig {
        timeout: Duration::from_secs(cli.timeout),
        ..FetchConfig::default()
    };
    if let Some(user_agent) = cli.user_agent {
        config.user_agent = user_agent;
    }

    let scan = scanner::scan(&target, &config)
        .await
        .with_context(|| format!("Failed to check {}", target))?;
    let report = generate_report(&scan, cli.format.into())?;
    write_output(&report, cli.output.as_deref())?;

    if cli.strict && !scan.issues.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)
                .with_context(|| format!("Failed to write report to {}", p.display()))?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

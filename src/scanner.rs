// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page loading and scanning.
//!
//! Resolves a target to a URL or a local file, loads the markup, counts its
//! lines, parses it and runs the full rule set once.

use crate::analyzers;
use crate::dom::Document;
use crate::error::Result;
use crate::issues::IssueSet;
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP settings for fetching pages
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("a11ybot/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Where a page comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A page fetched over HTTP; `input` is the argument as given
    Url { input: String, url: Url },
    File(PathBuf),
}

impl Target {
    /// `http://` and `https://` inputs are URLs; anything else is a file path
    pub fn parse(input: &str) -> Result<Self> {
        let lower = input.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Target::Url {
                input: input.to_string(),
                url: Url::parse(input)?,
            })
        } else {
            Ok(Target::File(PathBuf::from(input)))
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Url { input, .. } => f.write_str(input),
            Target::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Outcome of scanning one page
#[derive(Debug, Clone)]
pub struct PageScan {
    /// Target identifier shown in reports
    pub target: String,
    /// Raw text lines in the loaded body
    pub lines_fetched: usize,
    pub issues: IssueSet,
}

/// Count text lines the way a line scanner does: a trailing newline does not
/// start a new line, and an empty body has none.
pub fn count_lines(body: &str) -> usize {
    body.lines().count()
}

/// Fetch a page body over HTTP.
///
/// Non-success statuses are logged and their body is still returned, so
/// error pages get checked like any other page.
pub async fn fetch(url: &Url, config: &FetchConfig) -> Result<String> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()?;

    info!("Fetching {}", url);
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!("{} responded with status {}", url, status);
    }

    let body = response.text().await?;
    info!("Fetched {} bytes from {}", body.len(), url);

    Ok(body)
}

/// Load the body of a target
pub async fn load(target: &Target, config: &FetchConfig) -> Result<String> {
    match target {
        Target::Url { url, .. } => fetch(url, config).await,
        Target::File(path) => {
            info!("Reading {}", path.display());
            let bytes = std::fs::read(path)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

/// Parse markup and run every rule over it
pub fn scan_content(target: &str, body: &str) -> PageScan {
    let lines_fetched = count_lines(body);
    let document = Document::parse_html(body);
    let issues = analyzers::analyze(&document);

    info!(
        "Checked {} ({} nodes), found {} issue(s)",
        target,
        document.node_count(),
        issues.total()
    );

    PageScan {
        target: target.to_string(),
        lines_fetched,
        issues,
    }
}

/// Load and scan a target
pub async fn scan(target: &Target, config: &FetchConfig) -> Result<PageScan> {
    let body = load(target, config).await?;
    Ok(scan_content(&target.to_string(), &body))
}

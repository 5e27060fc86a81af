// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for a page scan.
//!
//! Supports multiple output formats:
//! - Text: one line per issue with its count, then totals
//! - JSON: structured issues for programmatic consumption
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use crate::error::Result;
use crate::scanner::PageScan;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report for a scanned page
pub fn generate_report(scan: &PageScan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(generate_text_report(scan)),
        OutputFormat::Json => generate_json_report(scan),
        OutputFormat::Sarif => generate_sarif_report(scan),
    }
}

/// Generate the plain text report
fn generate_text_report(scan: &PageScan) -> String {
    let mut output = String::new();

    output.push_str(&format!("Accessibility report for URL: {}\n", scan.target));

    if scan.issues.is_empty() {
        output.push_str("No accessibility issues found.\n");
    } else {
        for (key, count) in scan.issues.iter() {
            output.push_str(&format!("- {} (x{})\n", key, count));
        }
    }

    output.push_str(&format!("Total issues: {}\n", scan.issues.total()));
    output.push_str(&format!("Total lines fetched: {}\n", scan.lines_fetched));

    output
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    tool: &'static str,
    version: &'static str,
    target: &'a str,
    generated_at: DateTime<Utc>,
    lines_fetched: usize,
    total_issues: usize,
    issues: Vec<JsonIssue>,
}

#[derive(Debug, Serialize)]
struct JsonIssue {
    rule: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    count: usize,
}

/// Generate JSON report
fn generate_json_report(scan: &PageScan) -> Result<String> {
    let report = JsonReport {
        tool: "a11ybot",
        version: env!("CARGO_PKG_VERSION"),
        target: &scan.target,
        generated_at: Utc::now(),
        lines_fetched: scan.lines_fetched,
        total_issues: scan.issues.total(),
        issues: scan
            .issues
            .iter()
            .map(|(key, count)| JsonIssue {
                rule: key.kind.id(),
                message: key.message(),
                location: key.location.clone(),
                count,
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
    properties: SarifProperties,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Debug, Serialize)]
struct SarifProperties {
    count: usize,
}

/// Generate SARIF report
fn generate_sarif_report(scan: &PageScan) -> Result<String> {
    let results: Vec<SarifResult> = scan
        .issues
        .iter()
        .map(|(key, count)| SarifResult {
            rule_id: key.kind.id().to_string(),
            level: "warning".to_string(),
            message: SarifMessage {
                text: key.message(),
            },
            locations: vec![SarifLocation {
                physical_location: SarifPhysicalLocation {
                    artifact_location: SarifArtifactLocation {
                        uri: scan.target.clone(),
                    },
                },
            }],
            properties: SarifProperties { count },
        })
        .collect();

    let report = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "a11ybot".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            },
            results,
        }],
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

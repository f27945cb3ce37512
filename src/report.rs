//! Output formatting - plaintext and JSON.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::analyzer::Finding;

/// Output format for findings, selectable via `[output] format` in
/// constify.toml.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Plain,
    Json,
}

/// Prints findings in the requested format.
pub fn print(format: ReportFormat, findings: &[Finding]) {
    match format {
        ReportFormat::Plain => print_plain(findings),
        ReportFormat::Json => print_json(findings),
    }
}

/// Prints findings in plain text format.
pub fn print_plain(findings: &[Finding]) {
    if findings.is_empty() {
        println!("No declarations to report.");
    } else {
        println!("FINDINGS ({}):", findings.len());
        for f in findings {
            println!("- {} [{}] {}", f.location, f.rule, f.message);
        }
    }
}

/// Prints findings in JSON format.
///
/// Falls back to a line-per-finding format if serialization fails.
pub fn print_json(findings: &[Finding]) {
    match serde_json::to_string_pretty(&json!({ "findings": findings })) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            // Fallback: output in a simpler format
            eprintln!("[WARN] JSON serialization failed: {}", e);
            for f in findings {
                println!("{} {} {}", f.location, f.rule, f.message);
            }
        }
    }
}

//! Run report
//!
//! Aggregates one verdict per (scenario, scheme) execution, renders the
//! console summary and optionally serializes the whole run as JSON.

use crate::harness::error::{HarnessError, HarnessResult};
use crate::harness::verdict::Verdict;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// Verdict for one (scenario, scheme) pair
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub scenario: String,
    pub scheme: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// All outcomes of one harness run
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    schemes: Vec<String>,
    results: Vec<ScenarioOutcome>,
}

impl RunReport {
    pub fn new(schemes: &[String]) -> Self {
        Self {
            schemes: schemes.to_vec(),
            results: Vec::new(),
        }
    }

    pub fn record(&mut self, scenario: &str, scheme: &str, verdict: Verdict) {
        self.results.push(ScenarioOutcome {
            scenario: scenario.to_string(),
            scheme: scheme.to_string(),
            verdict,
        });
    }

    pub fn results(&self) -> &[ScenarioOutcome] {
        &self.results
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.verdict.is_pass()).count()
    }

    pub fn skipped(&self) -> usize {
        self.results.iter().filter(|r| r.verdict.is_skip()).count()
    }

    pub fn failures(&self) -> Vec<&ScenarioOutcome> {
        self.results
            .iter()
            .filter(|r| r.verdict.is_fail())
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.verdict.is_fail())
    }

    /// Console summary: totals plus the failed pairs, if any
    pub fn print_summary(&self, use_color: bool) {
        let totals = format!(
            "{} passed, {} skipped, {} failed ({} scheme(s))",
            self.passed(),
            self.skipped(),
            self.failures().len(),
            self.schemes.len()
        );
        if use_color && self.has_failures() {
            println!("{}", totals.red().bold());
        } else if use_color {
            println!("{}", totals.green());
        } else {
            println!("{}", totals);
        }

        for outcome in self.failures() {
            if let Verdict::Fail { reason } = &outcome.verdict {
                println!(
                    "  FAILED {} [scheme '{}']: {}",
                    outcome.scenario, outcome.scheme, reason
                );
            }
        }
    }

    /// Serialize the full report as pretty JSON
    pub fn write_json(&self, path: &Path) -> HarnessResult<()> {
        let body =
            serde_json::to_string_pretty(self).map_err(|e| HarnessError::ReportWrite {
                path: path.to_path_buf(),
                cause: e.to_string(),
            })?;
        std::fs::write(path, body).map_err(|e| HarnessError::ReportWrite {
            path: path.to_path_buf(),
            cause: e.to_string(),
        })
    }
}

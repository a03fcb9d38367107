//! Conformance matrix runner
//!
//! Runs every catalog scenario against every selected scheme, sequentially
//! and in a stable order: schemes in resolved order, scenarios in catalog
//! order. Scheme occurrences are indexed so a scheme selected twice still
//! gets distinct working directories per instance.

use crate::fs::api::SharedFileSystemRegistry;
use crate::harness::context::TestContext;
use crate::harness::report::RunReport;
use crate::harness::scenarios::{self, Scenario};
use crate::harness::verdict::Verdict;
use colored::Colorize;

pub struct ConformanceRunner {
    registry: SharedFileSystemRegistry,
    use_color: bool,
}

impl ConformanceRunner {
    pub fn new(registry: SharedFileSystemRegistry) -> Self {
        Self {
            registry,
            use_color: false,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Execute the full matrix and collect every verdict
    pub async fn run(&self, schemes: &[String]) -> RunReport {
        let catalog = scenarios::catalog();
        let mut report = RunReport::new(schemes);

        for (index, scheme) in schemes.iter().enumerate() {
            log::info!(
                "Testing scheme '{}' ({} scenario(s))",
                scheme,
                catalog.len()
            );
            for scenario in &catalog {
                let verdict = self.run_one(scheme, index, scenario).await;
                self.print_line(scenario.name, scheme, &verdict);
                report.record(scenario.name, scheme, verdict);
            }
        }

        report
    }

    async fn run_one(&self, scheme: &str, scheme_index: usize, scenario: &Scenario) -> Verdict {
        // The instance name carries the scheme occurrence index so repeated
        // selections of one scheme stay isolated
        let instance_name = format!("{}/{}", scenario.name, scheme_index);
        match TestContext::new(scheme, &instance_name, &self.registry).await {
            Ok(ctx) => scenario.run(&ctx).await,
            Err(verdict) => verdict,
        }
    }

    fn print_line(&self, scenario: &str, scheme: &str, verdict: &Verdict) {
        let label = format!("{} [scheme '{}']", scenario, scheme);
        match verdict {
            Verdict::Pass => {
                if self.use_color {
                    println!("{} {}", "PASS".green(), label);
                } else {
                    println!("PASS {}", label);
                }
            }
            Verdict::Skip { reason } => {
                if self.use_color {
                    println!("{} {}: {}", "SKIP".yellow(), label, reason);
                } else {
                    println!("SKIP {}: {}", label, reason);
                }
            }
            Verdict::Fail { reason } => {
                if self.use_color {
                    println!("{} {}: {}", "FAIL".red().bold(), label, reason);
                } else {
                    println!("FAIL {}: {}", label, reason);
                }
            }
        }
    }
}

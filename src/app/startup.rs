//! Application startup
//!
//! Wires the phases together: logging, provider registration, module
//! loading, scheme resolution and the conformance run. Returns the process
//! exit code: non-zero only when at least one scenario failed (or the
//! harness itself could not do its job); skips never affect it.

use crate::app::cli::Args;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::fs::api::SharedFileSystemRegistry;
use crate::harness::api::{ConformanceRunner, SchemeSelection};
use crate::plugin;
use clap::Parser;
use std::io::IsTerminal;

pub async fn startup() -> i32 {
    let args = Args::parse();
    let use_color = (args.color || std::io::stdout().is_terminal()) && !args.no_color;

    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file.as_deref(),
        use_color,
    ) {
        eprintln!("fsconform: failed to initialise logging: {}", e);
        return 2;
    }

    log::info!("fsconform: filesystem conformance harness starting");
    log::debug!("Arguments: {:?}", args);

    // Phase 1: backend availability. Built-ins first, then each requested
    // module; a failed load only keeps its schemes out of "available".
    let registry = SharedFileSystemRegistry::new();
    let builtin_count = plugin::api::load_builtin_providers(&registry).await;
    log::debug!("Registered {} built-in backend provider(s)", builtin_count);

    for module in &args.modules {
        if !plugin::api::load(module, &registry).await {
            log::warn!(
                "Backend module '{}' not loaded; its schemes will not be available",
                module
            );
        }
    }

    // Phase 2: scheme resolution, only now that availability is known
    let mut selection = SchemeSelection::new();
    for scheme in &args.schemes {
        selection.register(scheme.clone());
    }
    let available = registry.registered_schemes().await;
    let schemes = selection.resolve(&available);
    log::info!(
        "Schemes under test: {:?} (available: {:?})",
        schemes,
        available
    );
    if schemes.is_empty() {
        log::warn!("No scheme to test; the run is empty");
    }

    // Phase 3: the conformance matrix
    let runner = ConformanceRunner::new(registry).with_color(use_color);
    let report = runner.run(&schemes).await;
    report.print_summary(use_color);

    if let Some(path) = &args.report {
        match report.write_json(path) {
            Ok(()) => log::info!("Report written to {}", path.display()),
            Err(e) => {
                log_error_with_context(&e, "Writing conformance report");
                return 2;
            }
        }
    }

    if report.has_failures() {
        1
    } else {
        0
    }
}

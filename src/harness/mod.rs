//! Conformance Harness Module
//!
//! Scheme selection, per-scenario isolation, the scenario catalog and the
//! matrix runner with its pass/skip/fail verdict logic.

// Internal modules - all access should go through api module
pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod report;
pub(crate) mod runner;
pub(crate) mod scenarios;
pub(crate) mod schemes;
pub(crate) mod verdict;
pub(crate) mod workdir;

// Public API module - the only public interface for the harness
pub mod api;

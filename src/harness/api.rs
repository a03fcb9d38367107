//! Public API for the conformance harness
//!
//! External modules should import from here rather than directly from
//! internal modules.

// Matrix execution
pub use crate::harness::runner::ConformanceRunner;
pub use crate::harness::scenarios::{catalog, Scenario};

// Scheme selection
pub use crate::harness::schemes::SchemeSelection;

// Verdicts and reporting
pub use crate::harness::report::{RunReport, ScenarioOutcome};
pub use crate::harness::verdict::{expect_code, unimplemented_or, Verdict};

// Per-scenario isolation
pub use crate::harness::context::TestContext;
pub use crate::harness::workdir::{create_root, root_for, run_seed};

// Error handling
pub use crate::harness::error::{HarnessError, HarnessResult};

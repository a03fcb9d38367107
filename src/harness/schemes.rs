//! Scheme selection
//!
//! Collects the schemes requested on the command line and reconciles them
//! with the schemes that actually became available once all module loads
//! finished. Resolution is pure; it must run after loading because
//! availability is not known earlier.

/// Pending scheme selection, write-once during flag processing
#[derive(Debug, Default, Clone)]
pub struct SchemeSelection {
    pending: Vec<String>,
}

impl SchemeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scheme to the pending selection
    ///
    /// Duplicates are tolerated and kept; the matrix then runs that scheme
    /// once per occurrence, each instance isolated by its index.
    pub fn register(&mut self, scheme: impl Into<String>) {
        self.pending.push(scheme.into());
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Final list of schemes to test
    ///
    /// Non-empty selection: the requested schemes that are available, in
    /// request order; unavailable ones are silently dropped (their module
    /// may simply not have loaded). Empty selection: everything available.
    pub fn resolve(&self, available: &[String]) -> Vec<String> {
        if self.pending.is_empty() {
            return available.to_vec();
        }
        self.pending
            .iter()
            .filter(|scheme| available.contains(scheme))
            .cloned()
            .collect()
    }
}

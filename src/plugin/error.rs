//! Backend Provider Error Types

/// Result type alias for provider operations
pub type PluginResult<T> = std::result::Result<T, PluginError>;

/// Error types for backend provider loading and registration
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum PluginError {
    /// No provider with the requested name exists in the provider table
    #[error("No backend provider named '{name}' is linked into this binary")]
    ProviderNotFound { name: String },

    /// Provider was built against an incompatible API version
    #[error("Backend provider '{name}' is incompatible with API version {system_api_version}")]
    VersionIncompatible { name: String, system_api_version: u32 },

    /// Provider failed while registering its schemes
    #[error("Failed to load backend provider '{name}': {cause}")]
    LoadError { name: String, cause: String },
}

impl crate::core::error_handling::ContextualError for PluginError {
    fn is_user_actionable(&self) -> bool {
        match self {
            // The module name came from the command line; the user can fix it
            PluginError::ProviderNotFound { .. } => true,
            PluginError::VersionIncompatible { .. } => false,
            PluginError::LoadError { .. } => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            PluginError::ProviderNotFound { name } => Some(format!(
                "No backend provider named '{}' is available; check the --module arguments",
                name
            )),
            _ => None,
        }
    }
}

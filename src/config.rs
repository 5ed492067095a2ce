//! Configuration types.

/// Engine configuration.
///
/// Locale only influences field defaults (the language triple); request
/// timeout and retry policy belong to the transport collaborator.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the profile API (no trailing slash).
    pub api_base_url: String,
    /// Active interface locale, used to seed the language-select defaults.
    pub default_locale: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            default_locale: "en".to_string(),
        }
    }
}

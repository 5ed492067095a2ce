//! Remote profile wire models.

use serde::{Deserialize, Serialize};

/// A profile as returned by the profile-read endpoint.
///
/// Beyond the completion flag, the payload is an open key/value map: remote
/// profiles may carry a superset or subset of the schema's field keys, and
/// prefill merges by plain key matching, ignoring everything the schema does
/// not know about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteProfile {
    /// When true the user has already onboarded and the wizard must not be
    /// shown — the caller redirects instead of constructing a session.
    #[serde(default)]
    pub onboarding_completed: bool,

    /// Everything else, keyed by field name.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Acknowledgement from the profile-write endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAck {
    /// Human-readable confirmation from the server.
    pub message: String,
}

//! Profile prefill loader — fetches the remote profile once at session
//! start and seeds the initial wizard state.

use uuid::Uuid;

use crate::config::EngineConfig;
use crate::engine::Redirect;
use crate::error::ProfileError;
use crate::schema::{self, ValueKind};
use crate::wizard::tags::TagField;
use crate::wizard::values::{FieldValue, ValueMap};
use crate::wizard::WizardSession;

use super::api::ProfileApi;
use super::model::RemoteProfile;

/// What the host should do after the prefill phase.
#[derive(Debug)]
pub enum PrefillOutcome {
    /// Show the wizard, starting from this session.
    Session(WizardSession),
    /// The profile is already onboarded: redirect, no wizard shown.
    AlreadyOnboarded(Redirect),
}

/// Fetch the user's profile and build the initial session.
///
/// A missing profile yields a fresh session with declared defaults. A load
/// failure is returned as-is — the wizard must not silently start with empty
/// prefill when a profile is known to exist.
pub async fn load(
    api: &dyn ProfileApi,
    user_id: Uuid,
    config: &EngineConfig,
) -> Result<PrefillOutcome, ProfileError> {
    let profile = api.fetch_profile(user_id).await?;

    let outcome = match profile {
        None => {
            tracing::info!(%user_id, "no remote profile; starting with defaults");
            PrefillOutcome::Session(WizardSession::new(&config.default_locale))
        }
        Some(profile) if profile.onboarding_completed => {
            tracing::info!(%user_id, "already onboarded; skipping wizard");
            PrefillOutcome::AlreadyOnboarded(Redirect::Dashboard)
        }
        Some(profile) => {
            let values = seed_values(&profile, &config.default_locale);
            tracing::info!(%user_id, "seeded session from remote profile");
            PrefillOutcome::Session(WizardSession::from_values(values))
        }
    };
    Ok(outcome)
}

/// Merge a remote profile into a fresh default value map.
///
/// For every schema field key present in the profile the remote value wins;
/// all other fields keep their declared defaults. Keys the schema does not
/// know are ignored, and type-mismatched values are skipped.
pub fn seed_values(profile: &RemoteProfile, locale: &str) -> ValueMap {
    let mut values = ValueMap::with_defaults(locale);

    for (key, kind) in schema::FIELDS {
        let Some(raw) = profile.fields.get(*key) else {
            continue;
        };
        match coerce(*kind, raw) {
            Some(value) => {
                // Keys and kinds come straight from the schema table, so
                // this cannot fail.
                let _ = values.set(key, value);
            }
            None => {
                tracing::warn!(key, "skipping prefill value with unexpected shape");
            }
        }
    }

    values
}

/// Coerce a raw JSON value into the declared field shape.
///
/// `null` and mismatched shapes yield `None` (keep the default). Tag arrays
/// are deduplicated on the way in so the widget invariant holds from the
/// first render.
fn coerce(kind: ValueKind, raw: &serde_json::Value) -> Option<FieldValue> {
    if raw.is_null() {
        return None;
    }
    match kind {
        ValueKind::Text => raw.as_str().map(|s| FieldValue::Text(s.to_string())),
        ValueKind::Flag => raw.as_bool().map(FieldValue::Flag),
        ValueKind::Tags => {
            let items = raw.as_array()?;
            let tags: Option<Vec<String>> = items
                .iter()
                .map(|v| v.as_str().map(String::from))
                .collect();
            tags.map(|t| FieldValue::Tags(TagField::from_tags(t).into_tags()))
        }
    }
}

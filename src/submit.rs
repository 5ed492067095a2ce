//! Submission coordinator — assembles the final payload and performs the
//! single atomic profile update.
//!
//! Defensive by contract: `jump_to` allows edits that desynchronize earlier
//! steps without `next()` ever noticing, so submission re-checks *every*
//! step before touching the collaborator.

use uuid::Uuid;

use crate::engine::Redirect;
use crate::error::SubmissionError;
use crate::profile::ProfileApi;
use crate::wizard::values::ValueMap;
use crate::wizard::WizardSession;

/// Result of a submission attempt that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The profile update was acknowledged; the host should navigate here.
    Completed(Redirect),
    /// A submission was already in flight; this call was a no-op.
    AlreadyInFlight,
}

/// Submit the session's values to the profile collaborator.
///
/// Preconditions: the session must be on the terminal step and every step
/// must be complete. The collaborator is invoked exactly once per attempt —
/// no implicit retries. On failure the session stays on the terminal step
/// with its values intact and the in-flight flag cleared, so the caller may
/// retry; the payload is re-assembled from current values on each attempt,
/// never cached.
pub async fn submit(
    session: &mut WizardSession,
    api: &dyn ProfileApi,
    user_id: Uuid,
) -> Result<SubmitOutcome, SubmissionError> {
    if !session.on_terminal_step() {
        return Err(SubmissionError::NotOnFinalStep);
    }

    // Full-session re-check; never call the collaborator past a hole.
    if let Some(step) = session.first_incomplete_step() {
        tracing::info!(step = step.id, "submission refused: step incomplete");
        return Err(SubmissionError::Incomplete {
            step_id: step.id.to_string(),
        });
    }

    if !session.begin_submission() {
        tracing::debug!("submission already in flight; ignoring");
        return Ok(SubmitOutcome::AlreadyInFlight);
    }

    let payload = assemble_payload(session.values());
    match api.update_profile(user_id, &payload).await {
        Ok(ack) => {
            session.complete_submission();
            tracing::info!(%user_id, message = %ack.message, "onboarding submitted");
            Ok(SubmitOutcome::Completed(Redirect::Dashboard))
        }
        Err(e) => {
            tracing::warn!(%user_id, error = %e, "onboarding submission failed");
            session.fail_submission(e.to_string());
            Err(e.into())
        }
    }
}

/// Assemble the outgoing payload from the current values.
///
/// Every schema key is present; tag fields are always serialized as arrays
/// (empty included), and the completion flag is set in the same body.
pub fn assemble_payload(values: &ValueMap) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    for (key, value) in values.iter_in_schema_order() {
        // FieldValue is serde-untagged, so this is the plain wire shape.
        let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
        body.insert(key.to_string(), json);
    }
    body.insert("onboarding_completed".to_string(), serde_json::Value::Bool(true));
    serde_json::Value::Object(body)
}

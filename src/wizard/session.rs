//! The wizard controller — a sync state machine owning one onboarding
//! attempt.
//!
//! The session owns the current step index, the full field-value map, and
//! per-step validity. Forward navigation is gated on step completeness;
//! going back never blocks. All I/O (prefill, submission) lives outside the
//! session, in `profile::prefill` and `submit`.

use std::collections::HashMap;

use crate::error::SessionError;
use crate::schema::{self, StepDescriptor};
use crate::wizard::validate::{ErrorMessages, validate};
use crate::wizard::values::{FieldValue, ValueMap};

/// Outcome of the final submission attempt, tracked on the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// No submission attempted (or a previous failure was cleared by edits).
    Idle,
    /// The update call is in flight; further submits are no-ops.
    InFlight,
    /// The profile update was acknowledged; the session is done.
    Succeeded,
    /// The last attempt failed; retryable, values preserved.
    Failed(String),
}

/// Result of a forward-navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the step at this index.
    Moved(usize),
    /// The current step is incomplete; field errors were (re)surfaced.
    Blocked,
    /// Already on the terminal step: the caller should run submission
    /// instead of advancing.
    Submit,
}

/// Mutable runtime state for one onboarding attempt.
///
/// Exclusively owned by one active onboarding screen instance; discarded on
/// successful submission or on navigation away.
#[derive(Debug, Clone)]
pub struct WizardSession {
    current: usize,
    /// Largest index ever occupied. `next()` only advances past complete
    /// steps, so every index up to here had its predecessors complete when
    /// it was first reached.
    highest_reached: usize,
    values: ValueMap,
    field_errors: HashMap<&'static str, String>,
    submission: SubmissionState,
    messages: ErrorMessages,
}

impl WizardSession {
    /// Fresh session with every field at its declared default; the language
    /// triple seeds from `locale`.
    pub fn new(locale: &str) -> Self {
        Self::from_values(ValueMap::with_defaults(locale))
    }

    /// Session over an already-seeded value map (prefill path).
    pub fn from_values(values: ValueMap) -> Self {
        Self {
            current: 0,
            highest_reached: 0,
            values,
            field_errors: HashMap::new(),
            submission: SubmissionState::Idle,
            messages: ErrorMessages::default(),
        }
    }

    /// Swap in localized validation messages.
    pub fn with_messages(mut self, messages: ErrorMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The step currently shown.
    pub fn current_step(&self) -> &'static StepDescriptor {
        // current is kept in [0, total_steps) by construction.
        &schema::STEPS[self.current]
    }

    /// Whether the current step is the terminal one.
    pub fn on_terminal_step(&self) -> bool {
        self.current == schema::terminal_index()
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    pub fn submission_state(&self) -> &SubmissionState {
        &self.submission
    }

    /// The surfaced error for a field, if any.
    pub fn field_error(&self, key: &str) -> Option<&str> {
        self.field_errors.get(key).map(String::as_str)
    }

    /// All currently surfaced field errors.
    pub fn field_errors(&self) -> &HashMap<&'static str, String> {
        &self.field_errors
    }

    /// Mutate one field value and re-validate the owning step only.
    ///
    /// Cheap and local: other steps are re-checked on navigation and again,
    /// in full, at submission time.
    pub fn set_value(
        &mut self,
        key: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), SessionError> {
        self.values.set(key, value.into())?;
        if let Some(step) = schema::STEPS.iter().find(|s| s.owns(key)) {
            self.refresh_step_errors(step);
        }
        Ok(())
    }

    /// Whether the step at `index` is complete under the current values.
    pub fn step_complete(&self, index: usize) -> bool {
        schema::step_at(index)
            .map(|step| validate(step, &self.values, &self.messages).is_complete)
            .unwrap_or(false)
    }

    /// Attempt to move forward.
    ///
    /// Allowed only when the current step is complete. On the terminal step
    /// a successful check yields [`Advance::Submit`] instead of moving. An
    /// incomplete step is a no-op that leaves its field errors surfaced.
    pub fn next(&mut self) -> Advance {
        let step = self.current_step();
        let validation = validate(step, &self.values, &self.messages);
        self.apply_step_errors(step, &validation.field_errors);

        if !validation.is_complete {
            tracing::debug!(step = step.id, "forward navigation blocked");
            return Advance::Blocked;
        }

        if self.on_terminal_step() {
            return Advance::Submit;
        }

        self.current += 1;
        self.highest_reached = self.highest_reached.max(self.current);
        Advance::Moved(self.current)
    }

    /// Move back one step. Always succeeds above step 0; never re-validates.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump directly to a previously reached step.
    ///
    /// Permitted only for indices at or below the highest index ever
    /// reached: revisiting a completed step is fine, skipping ahead past an
    /// incomplete one is not. Disallowed jumps are no-ops.
    pub fn jump_to(&mut self, step_id: &str) -> Option<usize> {
        let index = schema::index_of(step_id)?;
        if index > self.highest_reached {
            tracing::debug!(step = step_id, "jump past highest reached step refused");
            return None;
        }
        self.current = index;
        Some(index)
    }

    /// Re-validate every step; the index of the first incomplete one.
    ///
    /// `jump_to` allows edits that desynchronize earlier steps, so the
    /// submission path re-checks the whole session rather than trusting the
    /// per-step gates.
    pub fn first_incomplete_step(&self) -> Option<&'static StepDescriptor> {
        schema::STEPS
            .iter()
            .find(|step| !validate(step, &self.values, &self.messages).is_complete)
    }

    /// Begin a submission attempt. Returns false (and changes nothing) when
    /// one is already in flight.
    pub(crate) fn begin_submission(&mut self) -> bool {
        if self.submission == SubmissionState::InFlight {
            return false;
        }
        self.submission = SubmissionState::InFlight;
        true
    }

    /// Record a successful submission; the session is now terminal.
    pub(crate) fn complete_submission(&mut self) {
        self.submission = SubmissionState::Succeeded;
    }

    /// Record a failed submission. Clears the in-flight flag so the user can
    /// retry; the session stays on the terminal step with values intact.
    pub(crate) fn fail_submission(&mut self, reason: String) {
        self.submission = SubmissionState::Failed(reason);
    }

    fn refresh_step_errors(&mut self, step: &StepDescriptor) {
        let validation = validate(step, &self.values, &self.messages);
        self.apply_step_errors(step, &validation.field_errors);
    }

    /// Replace the surfaced errors for one step's keys, leaving other steps'
    /// errors untouched.
    fn apply_step_errors(
        &mut self,
        step: &StepDescriptor,
        errors: &HashMap<&'static str, String>,
    ) {
        for key in step.field_keys {
            match errors.get(key) {
                Some(message) => {
                    self.field_errors.insert(*key, message.clone());
                }
                None => {
                    self.field_errors.remove(key);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::keys;

    /// Fill every required field so all thirteen steps validate.
    fn fill_required(session: &mut WizardSession) {
        session.set_value(keys::DISPLAY_NAME, "Ada").unwrap();
        session.set_value(keys::USER_ROLE, "student").unwrap();
        session.set_value(keys::MAJOR, "Math").unwrap();
        session.set_value(keys::MAJOR_LEVEL, "bachelor").unwrap();
        session.set_value(keys::AGREE_TO_TERMS, true).unwrap();
    }

    /// Walk forward to the terminal step, asserting every hop succeeds.
    fn walk_to_terminal(session: &mut WizardSession) {
        while !session.on_terminal_step() {
            let before = session.current_index();
            assert_eq!(session.next(), Advance::Moved(before + 1));
        }
    }

    #[test]
    fn starts_at_step_zero() {
        let session = WizardSession::new("en");
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_step().id, "welcome");
        assert_eq!(*session.submission_state(), SubmissionState::Idle);
    }

    #[test]
    fn next_blocks_until_step_complete_and_surfaces_errors() {
        let mut session = WizardSession::new("en");

        assert_eq!(session.next(), Advance::Blocked);
        assert_eq!(session.current_index(), 0);
        assert!(session.field_error(keys::DISPLAY_NAME).is_some());

        session.set_value(keys::DISPLAY_NAME, "Ada").unwrap();
        // The edit re-validated the owning step and cleared the error.
        assert!(session.field_error(keys::DISPLAY_NAME).is_none());
        assert_eq!(session.next(), Advance::Moved(1));
        assert_eq!(session.current_step().id, "role");
    }

    #[test]
    fn next_gates_every_required_step_kind() {
        let mut session = WizardSession::new("en");

        // free-text
        assert_eq!(session.next(), Advance::Blocked);
        session.set_value(keys::DISPLAY_NAME, "Ada").unwrap();
        assert_eq!(session.next(), Advance::Moved(1));

        // single-choice
        assert_eq!(session.next(), Advance::Blocked);
        session.set_value(keys::USER_ROLE, "teacher").unwrap();
        assert_eq!(session.next(), Advance::Moved(2));

        // language-select: locale defaults make it complete immediately
        assert_eq!(session.next(), Advance::Moved(3));

        // free-text again
        assert_eq!(session.next(), Advance::Blocked);
        session.set_value(keys::MAJOR, "Physics").unwrap();
        assert_eq!(session.next(), Advance::Moved(4));

        // select
        assert_eq!(session.next(), Advance::Blocked);
        session.set_value(keys::MAJOR_LEVEL, "phd").unwrap();
        assert_eq!(session.next(), Advance::Moved(5));

        // the four tag-input steps and content_prefs are optional
        for expected in 6..=10 {
            assert_eq!(session.next(), Advance::Moved(expected));
        }

        // profile + socials optional
        assert_eq!(session.next(), Advance::Moved(11));
        assert_eq!(session.next(), Advance::Moved(12));

        // checkbox-group with required true
        assert!(session.on_terminal_step());
        assert_eq!(session.next(), Advance::Blocked);
        session.set_value(keys::AGREE_TO_TERMS, true).unwrap();
        assert_eq!(session.next(), Advance::Submit);
    }

    #[test]
    fn previous_always_succeeds_even_when_invalid() {
        let mut session = WizardSession::new("en");
        assert!(!session.previous());

        fill_required(&mut session);
        walk_to_terminal(&mut session);

        // Clear a required field, then walk back: never blocked.
        session.set_value(keys::DISPLAY_NAME, "").unwrap();
        while session.current_index() > 0 {
            assert!(session.previous());
        }
        assert!(!session.previous());
    }

    #[test]
    fn jump_to_only_reaches_previously_reached_steps() {
        let mut session = WizardSession::new("en");
        fill_required(&mut session);

        // Nothing reached yet: cannot jump forward.
        assert_eq!(session.jump_to("agreements"), None);
        assert_eq!(session.current_index(), 0);

        session.next(); // -> role
        session.next(); // -> languages

        assert_eq!(session.jump_to("welcome"), Some(0));
        // Highest reached is remembered across back-navigation.
        assert_eq!(session.jump_to("languages"), Some(2));
        assert_eq!(session.jump_to("major"), None);
        assert_eq!(session.jump_to("no_such_step"), None);
    }

    #[test]
    fn jump_gate_holds_even_after_breaking_an_earlier_step() {
        let mut session = WizardSession::new("en");
        fill_required(&mut session);
        walk_to_terminal(&mut session);

        session.jump_to("welcome").unwrap();
        session.set_value(keys::DISPLAY_NAME, "").unwrap();

        // The terminal step was reached before, so the jump itself is
        // allowed — the submission re-check is what catches the hole.
        assert_eq!(session.jump_to("agreements"), Some(12));
        assert_eq!(
            session.first_incomplete_step().map(|s| s.id),
            Some("welcome")
        );
    }

    #[test]
    fn first_incomplete_step_is_none_when_all_complete() {
        let mut session = WizardSession::new("en");
        fill_required(&mut session);
        assert_eq!(session.first_incomplete_step(), None);
    }

    #[test]
    fn set_value_revalidates_owning_step_only() {
        let mut session = WizardSession::new("en");
        // Surface errors on step 0.
        session.next();
        assert!(session.field_error(keys::DISPLAY_NAME).is_some());

        // Editing an unrelated field leaves step 0's error alone.
        session.set_value(keys::BIO, "hello").unwrap();
        assert!(session.field_error(keys::DISPLAY_NAME).is_some());

        // Editing the owning field clears it.
        session.set_value(keys::DISPLAY_NAME, "Ada").unwrap();
        assert!(session.field_error(keys::DISPLAY_NAME).is_none());
    }

    #[test]
    fn set_value_propagates_schema_errors() {
        let mut session = WizardSession::new("en");
        assert!(session.set_value("bogus_key", "x").is_err());
        assert!(session.set_value(keys::HOBBIES, "not-an-array").is_err());
    }

    #[test]
    fn submission_guard_is_one_shot_until_resolved() {
        let mut session = WizardSession::new("en");
        assert!(session.begin_submission());
        assert_eq!(*session.submission_state(), SubmissionState::InFlight);
        // Re-entrant begin is refused while in flight.
        assert!(!session.begin_submission());

        session.fail_submission("boom".to_string());
        assert_eq!(
            *session.submission_state(),
            SubmissionState::Failed("boom".to_string())
        );
        // Cleared flag allows a retry.
        assert!(session.begin_submission());
        session.complete_submission();
        assert_eq!(*session.submission_state(), SubmissionState::Succeeded);
    }
}

//! OnboardingEngine — wires prefill, the wizard session, and submission
//! into one flow the host UI drives.
//!
//! The host renders `session()` state, pushes edits through `set_value`,
//! and calls `advance()` for the forward button: on the terminal step that
//! triggers submission instead of navigation. Dropping the engine while a
//! fetch or submission is in flight drops the pending future with it, so a
//! late resolution can never touch a disposed session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::{ProfileError, SessionError, SubmissionError};
use crate::profile::{self, PrefillOutcome, ProfileApi};
use crate::submit::{self, SubmitOutcome};
use crate::wizard::session::Advance;
use crate::wizard::values::FieldValue;
use crate::wizard::WizardSession;

/// Destination token handed to the host UI; the engine never navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Redirect {
    Dashboard,
}

impl std::fmt::Display for Redirect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "dashboard"),
        }
    }
}

/// What the host should do after the start (prefill) phase.
pub enum StartOutcome {
    /// Show the wizard.
    Wizard(OnboardingEngine),
    /// The user already onboarded: redirect immediately, no wizard.
    Redirect(Redirect),
}

/// Result of one forward-button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the step at this index.
    Moved(usize),
    /// The current step is incomplete; errors are on the session.
    Blocked,
    /// Submission succeeded; navigate to the destination.
    Completed(Redirect),
    /// A submission was already in flight; nothing happened.
    AlreadyInFlight,
}

/// Drives one onboarding attempt end to end.
pub struct OnboardingEngine {
    api: Arc<dyn ProfileApi>,
    user_id: Uuid,
    session: WizardSession,
}

impl OnboardingEngine {
    /// Load the remote profile and build the engine, or short-circuit with a
    /// redirect when the user already onboarded.
    pub async fn start(
        api: Arc<dyn ProfileApi>,
        user_id: Uuid,
        config: &EngineConfig,
    ) -> Result<StartOutcome, ProfileError> {
        match profile::load(api.as_ref(), user_id, config).await? {
            PrefillOutcome::Session(session) => Ok(StartOutcome::Wizard(Self {
                api,
                user_id,
                session,
            })),
            PrefillOutcome::AlreadyOnboarded(redirect) => Ok(StartOutcome::Redirect(redirect)),
        }
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    /// Push one field edit into the session.
    pub fn set_value(
        &mut self,
        key: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), SessionError> {
        self.session.set_value(key, value)
    }

    /// Forward button: advance, or submit when on the terminal step.
    pub async fn advance(&mut self) -> Result<AdvanceOutcome, SubmissionError> {
        match self.session.next() {
            Advance::Moved(index) => Ok(AdvanceOutcome::Moved(index)),
            Advance::Blocked => Ok(AdvanceOutcome::Blocked),
            Advance::Submit => {
                let outcome =
                    submit::submit(&mut self.session, self.api.as_ref(), self.user_id).await?;
                Ok(match outcome {
                    SubmitOutcome::Completed(redirect) => AdvanceOutcome::Completed(redirect),
                    SubmitOutcome::AlreadyInFlight => AdvanceOutcome::AlreadyInFlight,
                })
            }
        }
    }

    /// Back button: never blocks.
    pub fn previous(&mut self) -> bool {
        self.session.previous()
    }

    /// Revisit a previously reached step directly.
    pub fn jump_to(&mut self, step_id: &str) -> Option<usize> {
        self.session.jump_to(step_id)
    }
}

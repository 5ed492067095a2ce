//! Wizard core — value map, validation engine, tag widget, and the session
//! state machine.

pub mod session;
pub mod tags;
pub mod validate;
pub mod values;

pub use session::{Advance, SubmissionState, WizardSession};
pub use tags::TagField;
pub use validate::{ErrorMessages, Rule, StepValidation, rule_for, validate};
pub use values::{FieldValue, ValueMap};

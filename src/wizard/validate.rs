//! The validation engine: a static rule table plus a pure `validate`.
//!
//! Validation *logic* is fixed; only the error *messages* vary by locale.
//! `validate` is a pure function of the current values — it is re-run on
//! every value mutation and on every navigation attempt.

use std::collections::HashMap;

use url::Url;

use crate::schema::{MAJOR_LEVELS, StepDescriptor, USER_ROLES, keys};
use crate::wizard::values::{FieldValue, ValueMap};

/// Validation rule applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text that must be non-empty after trimming.
    RequiredText,
    /// Text that must be one of a fixed set of choices.
    Choice(&'static [&'static str]),
    /// Text that must be a syntactically valid absolute URL, or empty.
    OptionalUrl,
    /// Boolean that must be strictly `true`.
    MustAccept,
    /// No constraint (optional text, tags, toggles).
    Optional,
}

/// The rule for a field key. Unknown keys get `Optional`.
pub fn rule_for(key: &str) -> Rule {
    match key {
        keys::DISPLAY_NAME | keys::MAJOR => Rule::RequiredText,
        keys::USER_ROLE => Rule::Choice(USER_ROLES),
        keys::MAJOR_LEVEL => Rule::Choice(MAJOR_LEVELS),
        // The language triple is seeded from the locale; it only needs to
        // stay non-empty.
        keys::WEBSITE_LANGUAGE | keys::EXPLANATION_LANGUAGE | keys::MATERIAL_LANGUAGE => {
            Rule::RequiredText
        }
        keys::PICTURE_URL
        | keys::BANNER_URL
        | keys::LINKEDIN_URL
        | keys::TWITTER_URL
        | keys::GITHUB_URL
        | keys::WEBSITE_URL => Rule::OptionalUrl,
        keys::AGREE_TO_TERMS => Rule::MustAccept,
        _ => Rule::Optional,
    }
}

/// Locale-specific error messages. Logic never varies with locale, only the
/// text shown next to a field.
#[derive(Debug, Clone)]
pub struct ErrorMessages {
    pub required: String,
    pub invalid_choice: String,
    pub invalid_url: String,
    pub must_accept: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            required: "This field is required".to_string(),
            invalid_choice: "Please pick one of the listed options".to_string(),
            invalid_url: "Please enter a valid URL".to_string(),
            must_accept: "You must accept the terms to continue".to_string(),
        }
    }
}

/// Result of validating one step against the current values.
#[derive(Debug, Clone)]
pub struct StepValidation {
    /// Error message per offending field key. Fields without errors are
    /// absent from the map.
    pub field_errors: HashMap<&'static str, String>,
    /// Whether every required field of the step is valid and present.
    pub is_complete: bool,
}

/// Validate one step. Pure: no side effects, no I/O.
pub fn validate(
    step: &StepDescriptor,
    values: &ValueMap,
    messages: &ErrorMessages,
) -> StepValidation {
    let mut field_errors = HashMap::new();

    for key in step.field_keys {
        if let Some(error) = check_field(key, values.get(key), messages) {
            field_errors.insert(*key, error);
        }
    }

    let is_complete = step.required_keys.iter().all(|key| {
        !field_errors.contains_key(key)
            && values.get(key).is_some_and(FieldValue::is_present)
    });

    StepValidation {
        field_errors,
        is_complete,
    }
}

/// Apply the rule for `key` to its current value.
fn check_field(key: &str, value: Option<&FieldValue>, messages: &ErrorMessages) -> Option<String> {
    match rule_for(key) {
        Rule::RequiredText => {
            let text = value.and_then(FieldValue::as_text).unwrap_or("");
            if text.trim().is_empty() {
                Some(messages.required.clone())
            } else {
                None
            }
        }
        Rule::Choice(options) => {
            let text = value.and_then(FieldValue::as_text).unwrap_or("");
            if text.trim().is_empty() {
                Some(messages.required.clone())
            } else if !options.contains(&text) {
                Some(messages.invalid_choice.clone())
            } else {
                None
            }
        }
        Rule::OptionalUrl => {
            let text = value.and_then(FieldValue::as_text).unwrap_or("");
            // Empty is fine: these fields are optional. Url::parse only
            // accepts absolute URLs, which is exactly the constraint.
            if text.trim().is_empty() || Url::parse(text.trim()).is_ok() {
                None
            } else {
                Some(messages.invalid_url.clone())
            }
        }
        Rule::MustAccept => {
            if value.and_then(FieldValue::as_flag) == Some(true) {
                None
            } else {
                Some(messages.must_accept.clone())
            }
        }
        Rule::Optional => None,
    }
}

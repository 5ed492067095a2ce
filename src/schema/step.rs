//! Step descriptors — one entry per wizard page.

use serde::{Deserialize, Serialize};

/// Editor category for a wizard page.
///
/// The host UI dispatches on this to pick the right field-editor component;
/// the engine itself never renders anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    /// A single free-text input.
    FreeText,
    /// Exactly one value from a small fixed set (e.g. student/teacher).
    SingleChoice,
    /// The website/explanation/material language triple.
    LanguageSelect,
    /// One value from a dropdown-style list.
    Select,
    /// A deduplicated collection of string tags.
    TagInput,
    /// Several heterogeneous inputs on one page (bio + assets).
    MultiField,
    /// One or more boolean toggles.
    CheckboxGroup,
    /// The linkedin/twitter/github/website URL group.
    SocialsGroup,
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::FreeText => "free-text",
            Self::SingleChoice => "single-choice",
            Self::LanguageSelect => "language-select",
            Self::Select => "select",
            Self::TagInput => "tag-input",
            Self::MultiField => "multi-field",
            Self::CheckboxGroup => "checkbox-group",
            Self::SocialsGroup => "socials-group",
        };
        write!(f, "{s}")
    }
}

/// One page of the wizard: a stable id, an editor kind, and the field keys
/// the page owns.
///
/// `required_keys` is always a subset of `field_keys`; the step is "complete"
/// only when every required key validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub id: &'static str,
    pub kind: StepKind,
    pub field_keys: &'static [&'static str],
    pub required_keys: &'static [&'static str],
}

impl StepDescriptor {
    /// Whether this step owns the given field key.
    pub fn owns(&self, key: &str) -> bool {
        self.field_keys.contains(&key)
    }

    /// Whether the given field key must be valid for the step to be complete.
    pub fn requires(&self, key: &str) -> bool {
        self.required_keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde() {
        let kinds = [
            StepKind::FreeText,
            StepKind::SingleChoice,
            StepKind::LanguageSelect,
            StepKind::Select,
            StepKind::TagInput,
            StepKind::MultiField,
            StepKind::CheckboxGroup,
            StepKind::SocialsGroup,
        ];
        for kind in kinds {
            let display = format!("{kind}");
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(format!("\"{display}\""), json);
        }
    }

    #[test]
    fn owns_and_requires() {
        let step = StepDescriptor {
            id: "example",
            kind: StepKind::MultiField,
            field_keys: &["a", "b"],
            required_keys: &["a"],
        };
        assert!(step.owns("a"));
        assert!(step.owns("b"));
        assert!(!step.owns("c"));
        assert!(step.requires("a"));
        assert!(!step.requires("b"));
    }
}

//! The static, ordered step registry.
//!
//! Pure data: no side effects, no I/O. Step order is fixed for the life of a
//! session and step ids are unique.

use super::fields::keys;
use super::step::{StepDescriptor, StepKind};

/// All wizard steps, in presentation order.
pub const STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        id: "welcome",
        kind: StepKind::FreeText,
        field_keys: &[keys::DISPLAY_NAME],
        required_keys: &[keys::DISPLAY_NAME],
    },
    StepDescriptor {
        id: "role",
        kind: StepKind::SingleChoice,
        field_keys: &[keys::USER_ROLE],
        required_keys: &[keys::USER_ROLE],
    },
    StepDescriptor {
        id: "languages",
        kind: StepKind::LanguageSelect,
        field_keys: &[
            keys::WEBSITE_LANGUAGE,
            keys::EXPLANATION_LANGUAGE,
            keys::MATERIAL_LANGUAGE,
        ],
        required_keys: &[
            keys::WEBSITE_LANGUAGE,
            keys::EXPLANATION_LANGUAGE,
            keys::MATERIAL_LANGUAGE,
        ],
    },
    StepDescriptor {
        id: "major",
        kind: StepKind::FreeText,
        field_keys: &[keys::MAJOR],
        required_keys: &[keys::MAJOR],
    },
    StepDescriptor {
        id: "major_level",
        kind: StepKind::Select,
        field_keys: &[keys::MAJOR_LEVEL],
        required_keys: &[keys::MAJOR_LEVEL],
    },
    StepDescriptor {
        id: "studied_subjects",
        kind: StepKind::TagInput,
        field_keys: &[keys::STUDIED_SUBJECTS],
        required_keys: &[],
    },
    StepDescriptor {
        id: "interested_majors",
        kind: StepKind::TagInput,
        field_keys: &[keys::INTERESTED_MAJORS],
        required_keys: &[],
    },
    StepDescriptor {
        id: "hobbies",
        kind: StepKind::TagInput,
        field_keys: &[keys::HOBBIES],
        required_keys: &[],
    },
    StepDescriptor {
        id: "news_topics",
        kind: StepKind::TagInput,
        field_keys: &[keys::NEWS_TOPICS],
        required_keys: &[],
    },
    StepDescriptor {
        id: "content_prefs",
        kind: StepKind::CheckboxGroup,
        field_keys: &[keys::NEWSLETTER, keys::DAILY_QUOTES],
        required_keys: &[],
    },
    StepDescriptor {
        id: "profile",
        kind: StepKind::MultiField,
        field_keys: &[keys::BIO, keys::PICTURE_URL, keys::BANNER_URL],
        required_keys: &[],
    },
    StepDescriptor {
        id: "socials",
        kind: StepKind::SocialsGroup,
        field_keys: &[
            keys::LINKEDIN_URL,
            keys::TWITTER_URL,
            keys::GITHUB_URL,
            keys::WEBSITE_URL,
        ],
        required_keys: &[],
    },
    StepDescriptor {
        id: "agreements",
        kind: StepKind::CheckboxGroup,
        field_keys: &[keys::AGREE_TO_TERMS, keys::AGREE_TO_PERSONALIZATION],
        required_keys: &[keys::AGREE_TO_TERMS],
    },
];

/// Number of steps in the wizard.
pub fn total_steps() -> usize {
    STEPS.len()
}

/// The step at `index`, or `None` when out of range.
pub fn step_at(index: usize) -> Option<&'static StepDescriptor> {
    STEPS.get(index)
}

/// The index of the step with the given id.
pub fn index_of(id: &str) -> Option<usize> {
    STEPS.iter().position(|s| s.id == id)
}

/// Index of the terminal step (whose forward action submits).
pub fn terminal_index() -> usize {
    STEPS.len() - 1
}

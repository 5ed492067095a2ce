//! Field key constants and per-field value kinds.
//!
//! Keys are shared verbatim between the step registry, the session value map,
//! and the profile wire format, so prefill merge and payload assembly work by
//! plain key matching.

/// Field keys collected by the wizard.
pub mod keys {
    pub const DISPLAY_NAME: &str = "display_name";
    pub const USER_ROLE: &str = "user_role";
    pub const WEBSITE_LANGUAGE: &str = "website_language";
    pub const EXPLANATION_LANGUAGE: &str = "explanation_language";
    pub const MATERIAL_LANGUAGE: &str = "material_language";
    pub const MAJOR: &str = "major";
    pub const MAJOR_LEVEL: &str = "major_level";
    pub const STUDIED_SUBJECTS: &str = "studied_subjects";
    pub const INTERESTED_MAJORS: &str = "interested_majors";
    pub const HOBBIES: &str = "hobbies";
    pub const NEWS_TOPICS: &str = "news_topics";
    pub const NEWSLETTER: &str = "newsletter";
    pub const DAILY_QUOTES: &str = "daily_quotes";
    pub const BIO: &str = "bio";
    pub const PICTURE_URL: &str = "picture_url";
    pub const BANNER_URL: &str = "banner_url";
    pub const LINKEDIN_URL: &str = "linkedin_url";
    pub const TWITTER_URL: &str = "twitter_url";
    pub const GITHUB_URL: &str = "github_url";
    pub const WEBSITE_URL: &str = "website_url";
    pub const AGREE_TO_TERMS: &str = "agree_to_terms";
    pub const AGREE_TO_PERSONALIZATION: &str = "agree_to_personalization";
}

/// The roles a user can pick on the `role` step.
pub const USER_ROLES: &[&str] = &["student", "teacher"];

/// The study levels selectable on the `major_level` step.
pub const MAJOR_LEVELS: &[&str] = &["bachelor", "master", "phd", "postdoc", "hobbyist"];

/// Shape of the value stored under a field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free text, a choice from a fixed set, or a URL — all strings.
    Text,
    /// A boolean toggle.
    Flag,
    /// A deduplicated array of string tags.
    Tags,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Text => "text",
            Self::Flag => "flag",
            Self::Tags => "tags",
        };
        write!(f, "{s}")
    }
}

/// Every field key the wizard collects, with its value kind.
///
/// Order matches the step registry; payload assembly iterates this table so
/// the outgoing body always contains every key.
pub const FIELDS: &[(&str, ValueKind)] = &[
    (keys::DISPLAY_NAME, ValueKind::Text),
    (keys::USER_ROLE, ValueKind::Text),
    (keys::WEBSITE_LANGUAGE, ValueKind::Text),
    (keys::EXPLANATION_LANGUAGE, ValueKind::Text),
    (keys::MATERIAL_LANGUAGE, ValueKind::Text),
    (keys::MAJOR, ValueKind::Text),
    (keys::MAJOR_LEVEL, ValueKind::Text),
    (keys::STUDIED_SUBJECTS, ValueKind::Tags),
    (keys::INTERESTED_MAJORS, ValueKind::Tags),
    (keys::HOBBIES, ValueKind::Tags),
    (keys::NEWS_TOPICS, ValueKind::Tags),
    (keys::NEWSLETTER, ValueKind::Flag),
    (keys::DAILY_QUOTES, ValueKind::Flag),
    (keys::BIO, ValueKind::Text),
    (keys::PICTURE_URL, ValueKind::Text),
    (keys::BANNER_URL, ValueKind::Text),
    (keys::LINKEDIN_URL, ValueKind::Text),
    (keys::TWITTER_URL, ValueKind::Text),
    (keys::GITHUB_URL, ValueKind::Text),
    (keys::WEBSITE_URL, ValueKind::Text),
    (keys::AGREE_TO_TERMS, ValueKind::Flag),
    (keys::AGREE_TO_PERSONALIZATION, ValueKind::Flag),
];

/// Look up the canonical `'static` key and value kind for a field.
///
/// Returns `None` for keys the schema does not know about.
pub fn field_kind(key: &str) -> Option<(&'static str, ValueKind)> {
    FIELDS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(k, kind)| (*k, *kind))
}

/// The language-triple keys seeded from the active interface locale.
pub const LOCALE_SEEDED_KEYS: &[&str] = &[
    keys::WEBSITE_LANGUAGE,
    keys::EXPLANATION_LANGUAGE,
    keys::MATERIAL_LANGUAGE,
];

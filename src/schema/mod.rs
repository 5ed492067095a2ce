//! Field schema and step registry — the static shape of the wizard.

pub mod fields;
pub mod registry;
pub mod step;

pub use fields::{FIELDS, LOCALE_SEEDED_KEYS, MAJOR_LEVELS, USER_ROLES, ValueKind, field_kind, keys};
pub use registry::{STEPS, index_of, step_at, terminal_index, total_steps};
pub use step::{StepDescriptor, StepKind};

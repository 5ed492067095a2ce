//! Lyceum onboarding — the wizard engine core.
//!
//! A sequential, resumable, multi-step data-collection flow: per-step
//! validation gates forward navigation, a remote profile seeds initial
//! state, and one atomic submission flips the completion flag and yields a
//! redirect token. Rendering, routing, and authentication belong to the
//! host; this crate owns only the state machine.

pub mod config;
pub mod engine;
pub mod error;
pub mod profile;
pub mod schema;
pub mod submit;
pub mod wizard;

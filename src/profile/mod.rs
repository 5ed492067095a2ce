//! Remote profile collaborator — wire models, API seam, and the prefill
//! loader that seeds a session from an existing profile.

pub mod api;
pub mod model;
pub mod prefill;

pub use api::{HttpProfileApi, ProfileApi};
pub use model::{RemoteProfile, UpdateAck};
pub use prefill::{PrefillOutcome, load, seed_values};

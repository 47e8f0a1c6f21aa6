//! Domain entity definitions.

mod hospital;
mod secret;

pub use hospital::{Hospital, HospitalId};
pub use secret::Secret;

//! `ms-core`: foundational types for the microsim hazard engine.
//!
//! This crate is a dependency of every other `ms-*` crate.  It has no `ms-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`ids`]        | `PersonId`, `VenueId`                                  |
//! | [`activity`]   | `ActivityKind` (home, work, schools, retail)           |
//! | [`status`]     | `DiseaseStatus`                                        |
//! | [`hazard`]     | `HazardConfig`: status and location multipliers       |
//! | [`time`]       | `Day`, `SimConfig`                                     |
//! | [`rng`]        | `SimRng` (one per simulation instance)                 |
//! | [`error`]      | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and config types.    |

pub mod activity;
pub mod error;
pub mod hazard;
pub mod ids;
pub mod rng;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use activity::ActivityKind;
pub use error::{CoreError, CoreResult};
pub use hazard::HazardConfig;
pub use ids::{PersonId, VenueId};
pub use rng::SimRng;
pub use status::DiseaseStatus;
pub use time::{Day, SimConfig};

//! `ms-activity`: venues, flows, and the danger/risk algorithm per kind.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`venue`]     | `VenueTable`: ids, names, per-step danger                   |
//! | [`flow`]      | `FlowMatrix` (sparse rows), `normalise` helper for loaders   |
//! | [`location`]  | `ActivityLocation`: one manager per `ActivityKind`          |
//! | [`error`]     | `ActivityError`, `ActivityResult<T>`                         |
//!
//! # Danger and risk (summary)
//!
//! For kind `k`, hazard table `h`, location multiplier `L(k)`:
//!
//! ```text
//! danger(v) = Σ_i  h(status_i) × duration_i[k] × flow_i(v) × L(k)
//! risk_i   += duration_i[k] × Σ_v  flow_i(v) × danger(v)
//! ```
//!
//! Danger is recomputed from scratch each step.  Every manager's danger must
//! be committed before any manager's risk pass runs; `ms-sim` enforces that
//! ordering.

pub mod error;
pub mod flow;
pub mod location;
pub mod venue;


pub use error::{ActivityError, ActivityResult};
pub use flow::{normalise, FlowMatrix};
pub use location::ActivityLocation;
pub use venue::VenueTable;

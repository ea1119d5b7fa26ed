//! `ms-behavior`: how individuals reallocate their day when their disease
//! status changes.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`policy`]  | `BehaviorPolicy`: reduction fraction, triggers, discretionary kinds |
//! | [`model`]   | `BehaviorModel` trait, `BehaviorOutcome`                        |
//! | [`reduce`]  | `ReduceDiscretionary`: the policy-driven default model         |
//! | [`noop`]    | `NoBehaviorChange`: consumes the flag, changes nothing         |
//! | [`engine`]  | `change_behavior_with_disease`, `BehaviorReport`                |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! The engine only visits individuals whose `status_changed` flag is set,
//! hands each one's durations to the model, and clears the flag.  Models
//! always work from `duration_initial`, so a second trigger without an
//! intervening recovery yields the same durations as the first.

pub mod engine;
pub mod error;
pub mod model;
pub mod noop;
pub mod policy;
pub mod reduce;

#[cfg(test)]
mod tests;

pub use engine::{change_behavior_with_disease, BehaviorReport};
pub use error::{BehaviorError, BehaviorResult};
pub use model::{BehaviorModel, BehaviorOutcome};
pub use noop::NoBehaviorChange;
pub use policy::BehaviorPolicy;
pub use reduce::ReduceDiscretionary;

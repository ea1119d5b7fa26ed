//! `ms-sim`: daily step orchestrator for the microsim hazard engine.
//!
//! # One step = one simulated day
//!
//! ```text
//! Idle
//!   ① RiskReset      : fresh zeroed risk accumulator; durations checked
//!   ② DangerUpdate   : every ActivityLocation recomputes venue danger
//!   ③ RiskAccumulate : every ActivityLocation adds its risk contribution
//!   ④ BehaviorChange : BehaviorModel runs for each status_changed individual
//! Idle
//! ```
//!
//! ② completes for every kind before ③ starts for any kind.  Danger and risk
//! are built in scratch buffers and only replace the visible snapshot once
//! the whole pass has succeeded, so a failed step leaves the previous day's
//! values in place.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                        |
//! |------------|---------------------------------------------------------------|
//! | `parallel` | `run_replicates` advances instances on Rayon's thread pool.   |
//! | `serde`    | Serialize/Deserialize for configuration types.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ms_behavior::ReduceDiscretionary;
//! use ms_core::SimConfig;
//! use ms_sim::{MicrosimBuilder, NoopObserver};
//!
//! let mut sim = MicrosimBuilder::new(config, individuals, ReduceDiscretionary::default())
//!     .hazard(hazard)
//!     .location(homes)
//!     .location(schools)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod microsim;
pub mod observer;
pub mod phase;
pub mod replicate;


pub use builder::MicrosimBuilder;
pub use error::{SimError, SimResult};
pub use microsim::Microsim;
pub use observer::{NoopObserver, SimObserver, StepSummary, SummaryLog};
pub use phase::StepPhase;
pub use replicate::{run_replicates, ReplicateOutcome};

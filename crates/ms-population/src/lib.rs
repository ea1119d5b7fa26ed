//! `ms-population`: Structure-of-Arrays storage for individuals.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`table`]       | `IndividualTable`, `ActivityColumns`                        |
//! | [`allocation`]  | `DurationsMut`: one person's durations across all kinds    |
//! | [`builder`]     | `IndividualTableBuilder` (validating construction)          |
//! | [`check`]       | Shared duration / flow-row validation                       |
//! | [`error`]       | `PopulationError`, `PopulationResult<T>`                    |
//!
//! # Ownership
//!
//! The table is owned by one simulation instance.  Venue danger never lives
//! here; the table only holds what each individual brings to a venue
//! (status, time allocation, flows) and the risk they take away.

pub mod allocation;
pub mod builder;
pub mod check;
pub mod error;
pub mod table;


pub use allocation::DurationsMut;
pub use builder::IndividualTableBuilder;
pub use check::{check_duration, check_flow_row, FLOW_SUM_TOLERANCE};
pub use error::{PopulationError, PopulationResult};
pub use table::{ActivityColumns, IndividualTable};

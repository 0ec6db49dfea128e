//! Domain types for the subway route planner.
//!
//! This module contains the validated network model supplied by the line
//! directory. All types enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod error;
mod line;
mod section;
mod station;

pub use error::DomainError;
pub use line::{Line, LineId, Surcharge};
pub use section::{Distance, Section};
pub use station::{Station, StationId};

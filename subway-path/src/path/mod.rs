//! Route search and fare engine.
//!
//! This module answers: "what is the shortest way from this station to that
//! one, and what does it cost me?"
//!
//! Search is validated up front (distinct stations, both in the network),
//! then runs Dijkstra over the routing graph. The route's distance and the
//! highest surcharge among the lines it rides feed the fare policy.

mod error;
mod finder;
mod route;


pub use error::PathError;
pub use finder::{PathFinder, find_path};
pub use route::{Path, RouteLeg, RoutePath};

//! Subway route planner.
//!
//! A library that answers: "what is the shortest way between these two
//! stations, and what fare do I owe for it?"

pub mod domain;
pub mod fare;
pub mod graph;
pub mod network;
pub mod path;

//! Fare computation.
//!
//! Combines a route's distance, its maximum line surcharge and the rider's
//! age into a final fare. The tariff itself is data: see [`FarePolicy`].

mod policy;

use std::fmt;

use serde::Serialize;

pub use policy::{AgeDiscount, DistanceBand, FareConfigError, FarePolicy};

/// Tariff constants behind [`FarePolicy::default`].
pub mod tariff {
    pub use super::policy::{
        BASE_FARE, CHILD_AGES, CHILD_DISCOUNT_PERCENT, DEDUCTION, FIRST_STEP, FIRST_THRESHOLD,
        MAX_TARIFF_AMOUNT, ROUNDING_UNIT, SECOND_STEP, SECOND_THRESHOLD, STEP_FARE, YOUTH_AGES, YOUTH_DISCOUNT_PERCENT,
    };
}

/// A fare, in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Fare(pub u64);

impl Fare {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

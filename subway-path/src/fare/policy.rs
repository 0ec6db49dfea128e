//! Tariff configuration.

use serde::{Deserialize, Serialize};

use super::Fare;
use crate::domain::Surcharge;

/// Flat fare up to the first distance threshold.
pub const BASE_FARE: u64 = 1250;

/// Distance above which the first increment band starts.
pub const FIRST_THRESHOLD: u64 = 10;
/// Distance covered by one increment in the first band.
pub const FIRST_STEP: u64 = 5;

/// Distance above which the second increment band starts.
pub const SECOND_THRESHOLD: u64 = 50;
/// Distance covered by one increment in the second band.
pub const SECOND_STEP: u64 = 8;

/// Fare added per increment, in both bands.
pub const STEP_FARE: u64 = 100;

/// Part of the fare exempt from age discounts.
pub const DEDUCTION: u64 = 350;

/// Child discount: ages 6 to 12, half off.
pub const CHILD_AGES: (u32, u32) = (6, 13);
pub const CHILD_DISCOUNT_PERCENT: u32 = 50;

/// Youth discount: ages 13 to 18, a fifth off.
pub const YOUTH_AGES: (u32, u32) = (13, 19);
pub const YOUTH_DISCOUNT_PERCENT: u32 = 20;

/// Final fares are rounded down to a multiple of this.
pub const ROUNDING_UNIT: u64 = 10;

/// Upper bound on any configured amount: base fare, step fare or deduction.
pub const MAX_TARIFF_AMOUNT: u64 = 1_000_000_000;

/// Error from validating a [`FarePolicy`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareConfigError {
    /// A band with a zero-length step would never end
    #[error("distance band above {threshold} has a zero step")]
    ZeroStep { threshold: u64 },

    /// Band thresholds must strictly increase
    #[error("distance band thresholds must strictly increase")]
    UnsortedBands,

    /// Age range is empty
    #[error("age range {min_age}..{max_age} is empty")]
    EmptyAgeRange { min_age: u32, max_age: u32 },

    /// Discount above 100%
    #[error("discount of {0}% exceeds 100%")]
    PercentOutOfRange(u32),

    /// Rounding to a unit of zero
    #[error("rounding unit must be positive")]
    ZeroRoundingUnit,

    /// An amount above [`MAX_TARIFF_AMOUNT`]
    #[error("{field} of {value} exceeds {max}", max = MAX_TARIFF_AMOUNT)]
    AmountTooLarge { field: &'static str, value: u64 },
}

/// A distance band: beyond `threshold`, each started `step` adds `step_fare`.
///
/// A band ends where the next band starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceBand {
    pub threshold: u64,
    pub step: u64,
    pub step_fare: u64,
}

impl DistanceBand {
    pub fn new(threshold: u64, step: u64, step_fare: u64) -> Self {
        Self {
            threshold,
            step,
            step_fare,
        }
    }
}

/// A discount for riders aged `min_age` (inclusive) to `max_age` (exclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeDiscount {
    pub name: String,
    pub min_age: u32,
    pub max_age: u32,
    pub percent: u32,
}

impl AgeDiscount {
    pub fn new(name: impl Into<String>, min_age: u32, max_age: u32, percent: u32) -> Self {
        Self {
            name: name.into(),
            min_age,
            max_age,
            percent,
        }
    }

    /// Returns true if the rule covers `age`.
    pub fn applies_to(&self, age: u32) -> bool {
        (self.min_age..self.max_age).contains(&age)
    }
}

/// Fare policy: distance bands, age discounts and rounding.
///
/// Fares are computed as:
/// 1. the base fare plus every distance band's increments,
/// 2. plus the route's surcharge,
/// 3. for a rider matching an age discount, less the deduction and then
///    less the discount percentage of what remains,
/// 4. rounded down to the rounding unit.
///
/// Arithmetic saturates at `u64::MAX`; a validated policy keeps every
/// configured amount at or below [`MAX_TARIFF_AMOUNT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarePolicy {
    /// Flat fare up to the first band threshold.
    pub base_fare: u64,

    /// Increment bands, ordered by threshold.
    pub distance_bands: Vec<DistanceBand>,

    /// Part of the fare exempt from age discounts.
    pub deduction: u64,

    /// Age discounts, evaluated top-down; the first match wins.
    pub age_discounts: Vec<AgeDiscount>,

    /// Final fares are rounded down to a multiple of this.
    pub rounding_unit: u64,
}

impl FarePolicy {
    /// Create a policy with the given parameters.
    pub fn new(
        base_fare: u64,
        distance_bands: Vec<DistanceBand>,
        deduction: u64,
        age_discounts: Vec<AgeDiscount>,
        rounding_unit: u64,
    ) -> Self {
        Self {
            base_fare,
            distance_bands,
            deduction,
            age_discounts,
            rounding_unit,
        }
    }

    /// Check the policy can be evaluated for every input.
    pub fn validate(&self) -> Result<(), FareConfigError> {
        if self.rounding_unit == 0 {
            return Err(FareConfigError::ZeroRoundingUnit);
        }

        let amounts = [("base fare", self.base_fare), ("deduction", self.deduction)]
            .into_iter()
            .chain(self.distance_bands.iter().map(|b| ("step fare", b.step_fare)));
        for (field, value) in amounts {
            if value > MAX_TARIFF_AMOUNT {
                return Err(FareConfigError::AmountTooLarge { field, value });
            }
        }

        for band in &self.distance_bands {
            if band.step == 0 {
                return Err(FareConfigError::ZeroStep {
                    threshold: band.threshold,
                });
            }
        }
        if self
            .distance_bands
            .windows(2)
            .any(|w| w[0].threshold >= w[1].threshold)
        {
            return Err(FareConfigError::UnsortedBands);
        }

        for rule in &self.age_discounts {
            if rule.min_age >= rule.max_age {
                return Err(FareConfigError::EmptyAgeRange {
                    min_age: rule.min_age,
                    max_age: rule.max_age,
                });
            }
            if rule.percent > 100 {
                return Err(FareConfigError::PercentOutOfRange(rule.percent));
            }
        }

        Ok(())
    }

    /// Distance-based fare, before surcharge and discount.
    ///
    /// Requires a validated policy: a zero step panics.
    pub fn distance_fare(&self, distance: u64) -> u64 {
        let mut fare = self.base_fare;

        for (i, band) in self.distance_bands.iter().enumerate() {
            if distance <= band.threshold {
                break;
            }
            let upper = match self.distance_bands.get(i + 1) {
                Some(next) => distance.min(next.threshold),
                None => distance,
            };
            let covered = upper.saturating_sub(band.threshold);
            let increments = covered.div_ceil(band.step);
            fare = fare.saturating_add(increments.saturating_mul(band.step_fare));
        }

        fare
    }

    /// The discount that applies to a rider of `age`, if any.
    pub fn discount_for(&self, age: u32) -> Option<&AgeDiscount> {
        self.age_discounts.iter().find(|rule| rule.applies_to(age))
    }

    /// Final fare for a route.
    ///
    /// A discounted rider pays `(total - deduction) * (100 - percent) / 100`;
    /// totals at or below the deduction come to zero.
    ///
    /// Requires a validated policy: a zero step or a zero rounding unit
    /// panics.
    pub fn fare(&self, distance: u64, surcharge: Surcharge, age: u32) -> Fare {
        let total = self
            .distance_fare(distance)
            .saturating_add(u64::from(surcharge.value()));

        let discounted = match self.discount_for(age) {
            Some(rule) => {
                let kept = u64::from(100u32.saturating_sub(rule.percent));
                total.saturating_sub(self.deduction).saturating_mul(kept) / 100
            }
            None => total,
        };

        Fare(discounted - discounted % self.rounding_unit)
    }
}

impl Default for FarePolicy {
    fn default() -> Self {
        Self {
            base_fare: BASE_FARE,
            distance_bands: vec![
                DistanceBand::new(FIRST_THRESHOLD, FIRST_STEP, STEP_FARE),
                DistanceBand::new(SECOND_THRESHOLD, SECOND_STEP, STEP_FARE),
            ],
            deduction: DEDUCTION,
            age_discounts: vec![
                AgeDiscount::new("child", CHILD_AGES.0, CHILD_AGES.1, CHILD_DISCOUNT_PERCENT),
                AgeDiscount::new("youth", YOUTH_AGES.0, YOUTH_AGES.1, YOUTH_DISCOUNT_PERCENT),
            ],
            rounding_unit: ROUNDING_UNIT,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Fares are always a multiple of the rounding unit
        #[test]
        fn fare_is_rounded(distance in 1u64..500, surcharge in 0u32..3000, age in 0u32..100) {
            let policy = FarePolicy::default();
            let fare = policy.fare(distance, Surcharge(surcharge), age);
            prop_assert_eq!(fare.value() % policy.rounding_unit, 0);
        }

        /// Longer routes never cost less
        #[test]
        fn distance_fare_is_monotone(a in 1u64..500, b in 1u64..500) {
            let policy = FarePolicy::default();
            let (short, long) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(policy.distance_fare(short) <= policy.distance_fare(long));
        }

        /// Discounted riders pay the deduction-exempt remainder, less their percentage
        #[test]
        fn discounted_fare_matches_formula(distance in 1u64..500, surcharge in 0u32..3000, age in 6u32..19) {
            let policy = FarePolicy::default();
            let percent = if age < 13 { 50 } else { 20 };
            let total = policy.distance_fare(distance) + u64::from(surcharge);
            let expected = total.saturating_sub(350) * (100 - percent) / 100 / 10 * 10;
            prop_assert_eq!(policy.fare(distance, Surcharge(surcharge), age), Fare(expected));
        }

        /// Adults never pay less for a longer route
        #[test]
        fn adult_fare_is_monotone(a in 1u64..500, b in 1u64..500, surcharge in 0u32..3000, age in 19u32..100) {
            let policy = FarePolicy::default();
            let (short, long) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                policy.fare(short, Surcharge(surcharge), age)
                    <= policy.fare(long, Surcharge(surcharge), age)
            );
        }

        /// A discount never raises the fare above the adult fare
        #[test]
        fn discount_never_increases_fare(distance in 1u64..500, surcharge in 0u32..3000, age in 0u32..100) {
            let policy = FarePolicy::default();
            let adult = policy.fare(distance, Surcharge(surcharge), 30);
            prop_assert!(policy.fare(distance, Surcharge(surcharge), age) <= adult);
        }
    }
}

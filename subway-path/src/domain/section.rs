//! Track sections between adjacent stations.

use std::fmt;

use super::{DomainError, Station};

/// Length of a section, in the network's distance unit.
///
/// A `Distance` is always strictly positive. This type guarantees that by
/// construction, so routing code can rely on non-negative edge weights.
///
/// # Examples
///
/// ```
/// use subway_path::domain::Distance;
///
/// assert_eq!(Distance::new(8).unwrap().value(), 8);
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Distance(u32);

impl Distance {
    /// Validate and wrap a raw distance.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::NonPositiveDistance);
        }
        Ok(Self(value))
    }

    /// Returns the raw distance.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stretch of track from an up-station to a down-station.
///
/// Sections are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    up: Station,
    down: Station,
    distance: Distance,
}

impl Section {
    /// Creates a section.
    ///
    /// Fails if both ends are the same station.
    pub fn new(up: Station, down: Station, distance: Distance) -> Result<Self, DomainError> {
        if up == down {
            return Err(DomainError::SelfLoop(up.id()));
        }
        Ok(Self { up, down, distance })
    }

    pub fn up_station(&self) -> &Station {
        &self.up
    }

    pub fn down_station(&self) -> &Station {
        &self.down
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(id: u64) -> Station {
        Station::new(StationId(id), format!("S{id}"))
    }

    #[test]
    fn distance_rejects_zero() {
        assert_eq!(Distance::new(0), Err(DomainError::NonPositiveDistance));
        assert_eq!(Distance::new(1).unwrap().value(), 1);
        assert_eq!(Distance::new(u32::MAX).unwrap().value(), u32::MAX);
    }

    #[test]
    fn section_accessors() {
        let section = Section::new(station(1), station(2), Distance::new(8).unwrap()).unwrap();
        assert_eq!(section.up_station().id(), StationId(1));
        assert_eq!(section.down_station().id(), StationId(2));
        assert_eq!(section.distance().value(), 8);
    }

    #[test]
    fn section_rejects_self_loop() {
        let err = Section::new(station(1), station(1), Distance::new(3).unwrap()).unwrap_err();
        assert_eq!(err, DomainError::SelfLoop(StationId(1)));
    }
}

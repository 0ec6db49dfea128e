//! Station identity types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Identifier of a station, unique across the whole network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A station in the network.
///
/// Stations are compared by identity: two values with the same [`StationId`]
/// are the same station even if their names differ. The name is carried for
/// display only.
///
/// # Examples
///
/// ```
/// use subway_path::domain::{Station, StationId};
///
/// let a = Station::new(StationId(1), "Gangnam");
/// let b = Station::new(StationId(1), "Gangnam Stn.");
/// assert_eq!(a, b);
/// ```
#[derive(Clone)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    /// Creates a station.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the station's identifier.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Returns the station's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({} {})", self.id.0, self.name)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_id() {
        let a = Station::new(StationId(7), "Sindang");
        let b = Station::new(StationId(7), "Sindang (2)");
        let c = Station::new(StationId(8), "Sindang");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::new(StationId(1), "Magok"));
        assert!(set.contains(&Station::new(StationId(1), "other name")));
        assert!(!set.contains(&Station::new(StationId(2), "Magok")));
    }

    #[test]
    fn display_and_debug() {
        let s = Station::new(StationId(3), "Jongno 3-ga");
        assert_eq!(format!("{}", s), "Jongno 3-ga");
        assert_eq!(format!("{:?}", s), "Station(3 Jongno 3-ga)");
        assert_eq!(format!("{}", s.id()), "#3");
    }
}

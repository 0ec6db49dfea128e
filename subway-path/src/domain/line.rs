//! Transit lines.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Section, Station, StationId};

/// Identifier of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Extra fare charged to any rider whose route uses a line.
///
/// A rider crossing several lines pays only the highest surcharge among them.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Surcharge(pub u32);

impl Surcharge {
    /// No extra fare.
    pub const NONE: Surcharge = Surcharge(0);

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Surcharge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A line: an ordered chain of sections plus a surcharge.
///
/// The line does not check that its sections chain up; callers supply
/// already-validated topology.
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    surcharge: Surcharge,
    sections: Vec<Section>,
}

impl Line {
    /// Creates a line with no sections.
    pub fn new(id: LineId, name: impl Into<String>, surcharge: Surcharge) -> Self {
        Self {
            id,
            name: name.into(),
            surcharge,
            sections: Vec::new(),
        }
    }

    /// Appends a section, returning the line for chaining.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Appends a section.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surcharge(&self) -> Surcharge {
        self.surcharge
    }

    /// Sections in registration order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the line's stations in travel order.
    ///
    /// Starts at the up-terminus and follows the section chain. Stations the
    /// walk cannot reach (a broken or branching chain) are appended in order
    /// of first appearance, so every station touched by a section is listed
    /// exactly once.
    pub fn stations(&self) -> Vec<&Station> {
        let Some(first) = self.sections.first() else {
            return Vec::new();
        };

        let downs: HashSet<StationId> = self
            .sections
            .iter()
            .map(|s| s.down_station().id())
            .collect();
        let mut next_by_up: HashMap<StationId, &Section> = HashMap::new();
        for section in &self.sections {
            next_by_up.entry(section.up_station().id()).or_insert(section);
        }

        // A circular line has no terminus; start where registration started.
        let start = self
            .sections
            .iter()
            .map(Section::up_station)
            .find(|s| !downs.contains(&s.id()))
            .unwrap_or(first.up_station());

        let mut seen = HashSet::new();
        let mut ordered = Vec::with_capacity(self.sections.len() + 1);
        let mut current = start;
        while seen.insert(current.id()) {
            ordered.push(current);
            match next_by_up.get(&current.id()) {
                Some(section) => current = section.down_station(),
                None => break,
            }
        }

        for section in &self.sections {
            for station in [section.up_station(), section.down_station()] {
                if seen.insert(station.id()) {
                    ordered.push(station);
                }
            }
        }

        ordered
    }
}

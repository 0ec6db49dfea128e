//! Network files.
//!
//! A network file is a JSON document listing stations, lines with their
//! sections and surcharges, and optionally a tariff overriding the default
//! fare policy:
//!
//! ```json
//! {
//!   "stations": [{ "id": 1, "name": "Gangnam" }, { "id": 2, "name": "Yeongdeungpo-gu Office" }],
//!   "lines": [
//!     { "id": 2, "name": "Line 2", "surcharge": 0,
//!       "sections": [{ "up": 1, "down": 2, "distance": 8 }] }
//!   ],
//!   "tariff": { "base_fare": 1250 }
//! }
//! ```
//!
//! Records are converted into validated domain values on load.

use std::collections::HashMap;
use std::fs;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Distance, DomainError, Line, LineId, Section, Station, StationId, Surcharge};
use crate::fare::{FareConfigError, FarePolicy};
use crate::graph::Graph;
use crate::path::Path;

/// Error loading a network file.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Reading the file failed
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON for a network
    #[error("failed to parse network file: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stations share an id
    #[error("station {0} is listed twice")]
    DuplicateStation(StationId),

    /// A section refers to a station that is not listed
    #[error("line {line} refers to unknown station {station}")]
    UnknownStation { line: LineId, station: StationId },

    /// A section failed domain validation
    #[error("invalid section on line {line}: {source}")]
    InvalidSection { line: LineId, source: DomainError },

    /// The tariff cannot be evaluated
    #[error("invalid tariff: {0}")]
    Tariff(#[from] FareConfigError),
}

/// A station as it appears in network files and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: StationId,
    pub name: String,
}

/// A section as it appears in network files.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionRecord {
    pub up: StationId,
    pub down: StationId,
    pub distance: u32,
}

/// A line as it appears in network files.
#[derive(Debug, Clone, Deserialize)]
pub struct LineRecord {
    pub id: LineId,
    pub name: String,
    #[serde(default)]
    pub surcharge: Surcharge,
    pub sections: Vec<SectionRecord>,
}

/// Top-level network document.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkFile {
    pub stations: Vec<StationRecord>,
    pub lines: Vec<LineRecord>,
    #[serde(default)]
    pub tariff: Option<FarePolicy>,
}

/// A loaded network: stations, lines and the tariff to price routes with.
#[derive(Debug, Clone)]
pub struct Network {
    stations: HashMap<StationId, Station>,
    lines: Vec<Line>,
    policy: FarePolicy,
}

impl Network {
    /// Parse a network from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        let file: NetworkFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    /// Read and parse a network file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading network file");
        let json = fs::read_to_string(path)?;
        let network = Self::from_json(&json)?;
        info!(
            stations = network.stations.len(),
            lines = network.lines.len(),
            "Loaded network"
        );
        Ok(network)
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn policy(&self) -> &FarePolicy {
        &self.policy
    }

    /// Build the routing graph for this network.
    pub fn graph(&self) -> Graph {
        Graph::build(&self.lines)
    }
}

impl TryFrom<NetworkFile> for Network {
    type Error = NetworkError;

    fn try_from(file: NetworkFile) -> Result<Self, Self::Error> {
        let mut stations = HashMap::with_capacity(file.stations.len());
        for record in file.stations {
            let station = Station::new(record.id, record.name);
            if stations.insert(record.id, station).is_some() {
                return Err(NetworkError::DuplicateStation(record.id));
            }
        }

        let lookup = |line: LineId, id: StationId| {
            stations
                .get(&id)
                .cloned()
                .ok_or(NetworkError::UnknownStation { line, station: id })
        };

        let mut lines = Vec::with_capacity(file.lines.len());
        for record in file.lines {
            let mut line = Line::new(record.id, record.name, record.surcharge);
            for section in record.sections {
                let up = lookup(record.id, section.up)?;
                let down = lookup(record.id, section.down)?;
                let section = Distance::new(section.distance)
                    .and_then(|distance| Section::new(up, down, distance))
                    .map_err(|source| NetworkError::InvalidSection {
                        line: record.id,
                        source,
                    })?;
                line.add_section(section);
            }
            lines.push(line);
        }

        let policy = file.tariff.unwrap_or_default();
        policy.validate()?;

        Ok(Self {
            stations,
            lines,
            policy,
        })
    }
}

/// A priced route, as printed by the command-line driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResponse {
    pub stations: Vec<StationRecord>,
    pub distance: u64,
    pub surcharge: Surcharge,
    pub fare: u64,
}

impl From<&Path> for RouteResponse {
    fn from(path: &Path) -> Self {
        Self {
            stations: path
                .stations()
                .iter()
                .map(|s| StationRecord {
                    id: s.id(),
                    name: s.name().to_string(),
                })
                .collect(),
            distance: path.distance(),
            surcharge: path.max_surcharge(),
            fare: path.fare().value(),
        }
    }
}

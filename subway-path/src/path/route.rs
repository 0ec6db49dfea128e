//! Route types.
//!
//! A `RoutePath` is the result of shortest-path search: the stations visited
//! in order, the sections ridden between them, and the totals derived from
//! those sections. A `Path` pairs a route with the fare owed for it.

use crate::domain::{Distance, LineId, Station, Surcharge};
use crate::fare::Fare;
use crate::graph::{EdgeIndex, Graph, VertexIndex};

/// One section ridden as part of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLeg {
    /// Station the leg starts at
    pub from: Station,
    /// Station the leg ends at
    pub to: Station,
    /// Length of the section
    pub distance: Distance,
    /// Line owning the section
    pub line: LineId,
    /// Name of the owning line
    pub line_name: String,
    /// Surcharge of the owning line
    pub surcharge: Surcharge,
}

/// Shortest route between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    stations: Vec<Station>,
    legs: Vec<RouteLeg>,
    distance: u64,
    max_surcharge: Surcharge,
}

impl RoutePath {
    /// Assemble a route from the vertices and edges found by search.
    ///
    /// `vertices` runs from source to target and has exactly one more entry
    /// than `edges`.
    ///
    /// # Panics
    ///
    /// Panics if `edges` is empty. Search only runs between distinct
    /// stations, so a found route always rides at least one section.
    pub(crate) fn new(graph: &Graph, vertices: &[VertexIndex], edges: &[EdgeIndex]) -> Self {
        debug_assert_eq!(vertices.len(), edges.len() + 1);

        let legs: Vec<RouteLeg> = vertices
            .windows(2)
            .zip(edges)
            .map(|(pair, &edge_index)| {
                let edge = graph.edge(edge_index);
                let line = graph.line(edge.line);
                RouteLeg {
                    from: graph.station(pair[0]).clone(),
                    to: graph.station(pair[1]).clone(),
                    distance: edge.distance,
                    line: line.id,
                    line_name: line.name.clone(),
                    surcharge: line.surcharge,
                }
            })
            .collect();

        let Some(max_surcharge) = legs.iter().map(|leg| leg.surcharge).max() else {
            unreachable!("a route between distinct stations rides at least one section");
        };
        let distance = legs.iter().map(|leg| u64::from(leg.distance.value())).sum();

        Self {
            stations: vertices.iter().map(|&v| graph.station(v).clone()).collect(),
            legs,
            distance,
            max_surcharge,
        }
    }

    /// Stations from source to target, inclusive.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Sections ridden, in order.
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    /// Total distance: the sum of every ridden section.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// The highest surcharge among the lines ridden.
    pub fn max_surcharge(&self) -> Surcharge {
        self.max_surcharge
    }

    /// Returns the origin station.
    pub fn source(&self) -> &Station {
        &self.stations[0]
    }

    /// Returns the destination station.
    pub fn target(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// Distinct lines ridden, in the order first used.
    pub fn lines(&self) -> Vec<LineId> {
        let mut lines: Vec<LineId> = Vec::new();
        for leg in &self.legs {
            if !lines.contains(&leg.line) {
                lines.push(leg.line);
            }
        }
        lines
    }
}

/// A route together with the fare owed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub route: RoutePath,
    pub fare: Fare,
}

impl Path {
    pub fn stations(&self) -> &[Station] {
        self.route.stations()
    }

    pub fn distance(&self) -> u64 {
        self.route.distance()
    }

    pub fn max_surcharge(&self) -> Surcharge {
        self.route.max_surcharge()
    }

    pub fn fare(&self) -> Fare {
        self.fare
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, Section, StationId};

    fn station(id: u64) -> Station {
        Station::new(StationId(id), format!("S{id}"))
    }

    fn section(up: u64, down: u64, distance: u32) -> Section {
        Section::new(station(up), station(down), Distance::new(distance).unwrap()).unwrap()
    }

    fn graph() -> Graph {
        Graph::build(&[
            Line::new(LineId(1), "Line 1", Surcharge::NONE)
                .with_section(section(1, 2, 8))
                .with_section(section(2, 3, 13)),
            Line::new(LineId(2), "Line 2", Surcharge(900)).with_section(section(3, 4, 5)),
        ])
    }

    fn vertices(graph: &Graph, ids: &[u64]) -> Vec<VertexIndex> {
        ids.iter()
            .map(|&id| graph.vertex(&station(id)).unwrap())
            .collect()
    }

    #[test]
    fn totals_sum_distance_and_take_max_surcharge() {
        let graph = graph();
        let route = RoutePath::new(
            &graph,
            &vertices(&graph, &[1, 2, 3, 4]),
            &[EdgeIndex(0), EdgeIndex(1), EdgeIndex(2)],
        );

        assert_eq!(route.distance(), 26);
        assert_eq!(route.max_surcharge(), Surcharge(900));
        assert_eq!(route.legs().len(), 3);
        assert_eq!(route.source().id(), StationId(1));
        assert_eq!(route.target().id(), StationId(4));
        assert_eq!(route.lines(), vec![LineId(1), LineId(2)]);
    }

    #[test]
    fn legs_follow_travel_direction() {
        let graph = graph();
        // Ride section 2 -> 3 backwards
        let route = RoutePath::new(&graph, &vertices(&graph, &[3, 2]), &[EdgeIndex(1)]);

        let leg = &route.legs()[0];
        assert_eq!(leg.from.id(), StationId(3));
        assert_eq!(leg.to.id(), StationId(2));
        assert_eq!(leg.line_name, "Line 1");
        assert_eq!(route.max_surcharge(), Surcharge::NONE);
    }

    #[test]
    #[should_panic(expected = "at least one section")]
    fn empty_route_is_an_invariant_violation() {
        let graph = graph();
        RoutePath::new(&graph, &vertices(&graph, &[1]), &[]);
    }
}

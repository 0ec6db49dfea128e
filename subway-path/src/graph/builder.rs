//! Graph construction from lines.

use tracing::debug;

use super::multigraph::{
    Adjacent, Edge, EdgeIndex, Graph, LineIndex, LineInfo, Traversal, VertexIndex,
};
use crate::domain::{Line, Station};

impl Graph {
    /// Build a bidirectional graph from a set of lines.
    ///
    /// Shorthand for `GraphBuilder::new().add_lines(lines).build()`.
    pub fn build(lines: &[Line]) -> Graph {
        GraphBuilder::new().add_lines(lines).build()
    }
}

/// Builder for a routing [`Graph`].
///
/// Provides a fluent API for adding lines. Stations are deduplicated by
/// identity; every section becomes its own edge, so two stations may end up
/// joined by several parallel edges.
///
/// # Example
///
/// ```
/// use subway_path::domain::{Distance, Line, LineId, Section, Station, StationId, Surcharge};
/// use subway_path::graph::GraphBuilder;
///
/// let a = Station::new(StationId(1), "A");
/// let b = Station::new(StationId(2), "B");
/// let line = Line::new(LineId(1), "Line 1", Surcharge::NONE)
///     .with_section(Section::new(a.clone(), b, Distance::new(8).unwrap()).unwrap());
///
/// let graph = GraphBuilder::new().add_line(&line).build();
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert!(graph.contains(&a));
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    inner: Graph,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the direction sections may be ridden in.
    pub fn traversal(mut self, traversal: Traversal) -> Self {
        self.inner.traversal = traversal;
        self
    }

    /// Add a line's stations and sections.
    pub fn add_line(mut self, line: &Line) -> Self {
        let line_index = LineIndex(self.inner.lines.len());
        self.inner.lines.push(LineInfo {
            id: line.id(),
            name: line.name().to_string(),
            surcharge: line.surcharge(),
        });

        for station in line.stations() {
            self.add_vertex(station);
        }

        for section in line.sections() {
            let up = self.add_vertex(section.up_station());
            let down = self.add_vertex(section.down_station());
            self.inner.edges.push(Edge {
                up,
                down,
                distance: section.distance(),
                line: line_index,
            });
        }

        self
    }

    /// Add several lines, in order.
    pub fn add_lines<'a>(self, lines: impl IntoIterator<Item = &'a Line>) -> Self {
        lines.into_iter().fold(self, GraphBuilder::add_line)
    }

    /// Build the graph.
    pub fn build(mut self) -> Graph {
        let mut adjacency = vec![Vec::new(); self.inner.stations.len()];
        for (i, edge) in self.inner.edges.iter().enumerate() {
            let index = EdgeIndex(i);
            adjacency[edge.up.0].push(Adjacent {
                edge: index,
                to: edge.down,
            });
            if self.inner.traversal == Traversal::Bidirectional {
                adjacency[edge.down.0].push(Adjacent {
                    edge: index,
                    to: edge.up,
                });
            }
        }
        self.inner.adjacency = adjacency;

        debug!(
            stations = self.inner.stations.len(),
            sections = self.inner.edges.len(),
            lines = self.inner.lines.len(),
            traversal = ?self.inner.traversal,
            "Built routing graph"
        );

        self.inner
    }

    /// Add a station, returning its vertex. Re-adding is a no-op.
    fn add_vertex(&mut self, station: &Station) -> VertexIndex {
        if let Some(&vertex) = self.inner.vertex_of.get(&station.id()) {
            return vertex;
        }
        let vertex = VertexIndex(self.inner.stations.len());
        self.inner.stations.push(station.clone());
        self.inner.vertex_of.insert(station.id(), vertex);
        vertex
    }
}

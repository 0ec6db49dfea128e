//! Index-based weighted multigraph.

use std::collections::HashMap;

use crate::domain::{Distance, LineId, Station, StationId, Surcharge};

/// Index of a vertex (station) in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexIndex(pub usize);

/// Index of an edge (section) in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIndex(pub usize);

/// Index of a line in a [`Graph`], in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineIndex(pub usize);

/// Which directions a section may be ridden in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Sections are ridden both ways.
    #[default]
    Bidirectional,
    /// Sections are ridden from up-station to down-station only.
    Directed,
}

/// The parts of a line the router needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo {
    pub id: LineId,
    pub name: String,
    pub surcharge: Surcharge,
}

/// A section as a graph edge, from up-station to down-station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub up: VertexIndex,
    pub down: VertexIndex,
    pub distance: Distance,
    pub line: LineIndex,
}

/// One entry of a vertex's adjacency list: the edge and where it leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    pub edge: EdgeIndex,
    pub to: VertexIndex,
}

/// Routing graph built from a set of lines.
///
/// Vertices are stations, edges are sections tagged with their owning
/// line. Parallel edges are kept as-is. A `Graph` is read-only once built
/// and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(super) stations: Vec<Station>,
    pub(super) vertex_of: HashMap<StationId, VertexIndex>,
    pub(super) lines: Vec<LineInfo>,
    pub(super) edges: Vec<Edge>,
    pub(super) adjacency: Vec<Vec<Adjacent>>,
    pub(super) traversal: Traversal,
}

impl Graph {
    /// Returns the number of stations.
    pub fn vertex_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns the number of sections.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of lines the graph was built from.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Check if a station is a vertex of this graph.
    pub fn contains(&self, station: &Station) -> bool {
        self.vertex_of.contains_key(&station.id())
    }

    /// Look up the vertex for a station.
    pub fn vertex(&self, station: &Station) -> Option<VertexIndex> {
        self.vertex_of.get(&station.id()).copied()
    }

    /// The station at a vertex.
    ///
    /// # Panics
    ///
    /// Panics if the index did not come from this graph.
    pub fn station(&self, vertex: VertexIndex) -> &Station {
        &self.stations[vertex.0]
    }

    /// The edge at an index.
    ///
    /// # Panics
    ///
    /// Panics if the index did not come from this graph.
    pub fn edge(&self, edge: EdgeIndex) -> &Edge {
        &self.edges[edge.0]
    }

    /// The line at an index.
    ///
    /// # Panics
    ///
    /// Panics if the index did not come from this graph.
    pub fn line(&self, line: LineIndex) -> &LineInfo {
        &self.lines[line.0]
    }

    /// Edges leaving a vertex, in insertion order.
    pub fn adjacent(&self, vertex: VertexIndex) -> &[Adjacent] {
        self.adjacency
            .get(vertex.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All stations, in the order they were first added.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, &Edge)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeIndex(i), e))
    }
}

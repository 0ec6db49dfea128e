//! Routing graph.
//!
//! Converts a collection of lines into a single weighted multigraph whose
//! vertices are stations and whose edges are sections. Vertices, edges and
//! lines live in flat indexed containers; each edge refers to its owning
//! line by index, so the graph never holds references back into the
//! caller's domain objects.

mod builder;
mod multigraph;

pub use builder::GraphBuilder;
pub use multigraph::{
    Adjacent, Edge, EdgeIndex, Graph, LineIndex, LineInfo, Traversal, VertexIndex,
};

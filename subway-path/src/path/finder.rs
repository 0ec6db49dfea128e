//! Shortest-path search and fare lookup.
//!
//! Runs Dijkstra's algorithm between two stations of a built [`Graph`],
//! then prices the route with a [`FarePolicy`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::error::PathError;
use super::route::{Path, RoutePath};
use crate::domain::{Line, Station};
use crate::fare::FarePolicy;
use crate::graph::{EdgeIndex, Graph, VertexIndex};

/// Priority queue entry: a vertex and the cost it was reached at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    cost: u64,
    vertex: VertexIndex,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; lower vertex index first on equal cost
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Vertices and edges of a shortest path, source to target.
#[derive(Debug)]
struct Found {
    vertices: Vec<VertexIndex>,
    edges: Vec<EdgeIndex>,
}

/// Dijkstra from `source`, stopping once `target` is settled.
///
/// Only a strictly cheaper cost replaces a known one, and adjacency lists
/// are walked in insertion order, so among parallel edges of equal weight
/// the first-registered one is kept. The result is the same on every run.
fn shortest_path(graph: &Graph, source: VertexIndex, target: VertexIndex) -> Option<Found> {
    let n = graph.vertex_count();
    let mut best: Vec<Option<u64>> = vec![None; n];
    let mut previous: Vec<Option<(VertexIndex, EdgeIndex)>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut queue = BinaryHeap::new();

    best[source.0] = Some(0);
    queue.push(QueueEntry {
        cost: 0,
        vertex: source,
    });

    let mut settled_count = 0;
    while let Some(QueueEntry { cost, vertex }) = queue.pop() {
        if settled[vertex.0] {
            continue;
        }
        settled[vertex.0] = true;
        settled_count += 1;

        if vertex == target {
            break;
        }

        for adjacent in graph.adjacent(vertex) {
            if settled[adjacent.to.0] {
                continue;
            }
            let next = cost + u64::from(graph.edge(adjacent.edge).distance.value());
            if best[adjacent.to.0].is_none_or(|known| next < known) {
                trace!(
                    from = %graph.station(vertex),
                    to = %graph.station(adjacent.to),
                    cost = next,
                    "Relaxed edge"
                );
                best[adjacent.to.0] = Some(next);
                previous[adjacent.to.0] = Some((vertex, adjacent.edge));
                queue.push(QueueEntry {
                    cost: next,
                    vertex: adjacent.to,
                });
            }
        }
    }

    debug!(
        settled = settled_count,
        reached = settled[target.0],
        "Dijkstra search complete"
    );

    if !settled[target.0] {
        return None;
    }

    let mut vertices = vec![target];
    let mut edges = Vec::new();
    let mut current = target;
    while let Some((prev, edge)) = previous[current.0] {
        edges.push(edge);
        vertices.push(prev);
        current = prev;
    }
    vertices.reverse();
    edges.reverse();

    Some(Found { vertices, edges })
}

/// Route finder over a built graph.
///
/// Holds only shared references, so any number of finders may search the
/// same graph concurrently.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    graph: &'a Graph,
    policy: &'a FarePolicy,
}

impl<'a> PathFinder<'a> {
    /// Create a new finder.
    ///
    /// The policy must have passed [`FarePolicy::validate`]; debug builds
    /// check this here.
    pub fn new(graph: &'a Graph, policy: &'a FarePolicy) -> Self {
        debug_assert!(
            policy.validate().is_ok(),
            "fare policy failed validation: {:?}",
            policy.validate()
        );
        Self { graph, policy }
    }

    /// Find the shortest route between two stations.
    ///
    /// Checks run in a fixed order: identical stations, then unknown
    /// stations (source before target), then connectivity.
    pub fn find_route(&self, source: &Station, target: &Station) -> Result<RoutePath, PathError> {
        if source == target {
            return Err(PathError::SameStation(source.clone()));
        }

        let from = self
            .graph
            .vertex(source)
            .ok_or_else(|| PathError::StationNotFound(source.clone()))?;
        let to = self
            .graph
            .vertex(target)
            .ok_or_else(|| PathError::StationNotFound(target.clone()))?;

        let found = shortest_path(self.graph, from, to).ok_or_else(|| PathError::Disconnected {
            from: source.clone(),
            to: target.clone(),
        })?;

        let route = RoutePath::new(self.graph, &found.vertices, &found.edges);
        debug!(
            source = %source,
            target = %target,
            distance = route.distance(),
            stations = route.stations().len(),
            max_surcharge = route.max_surcharge().value(),
            "Found shortest route"
        );
        Ok(route)
    }

    /// Find the shortest route and the fare a rider of `age` owes for it.
    pub fn find_shortest_path(
        &self,
        source: &Station,
        target: &Station,
        age: u32,
    ) -> Result<Path, PathError> {
        let route = self.find_route(source, target)?;
        let fare = self
            .policy
            .fare(route.distance(), route.max_surcharge(), age);
        Ok(Path { route, fare })
    }
}

/// Build a graph from `lines` and search it once.
///
/// For hosts that rebuild the network on every request.
pub fn find_path(
    lines: &[Line],
    source: &Station,
    target: &Station,
    age: u32,
    policy: &FarePolicy,
) -> Result<Path, PathError> {
    let graph = Graph::build(lines);
    PathFinder::new(&graph, policy).find_shortest_path(source, target, age)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_lowest_cost_first() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry {
            cost: 9,
            vertex: VertexIndex(0),
        });
        queue.push(QueueEntry {
            cost: 3,
            vertex: VertexIndex(2),
        });
        queue.push(QueueEntry {
            cost: 3,
            vertex: VertexIndex(1),
        });

        let order: Vec<_> = std::iter::from_fn(|| queue.pop())
            .map(|e| (e.cost, e.vertex.0))
            .collect();
        assert_eq!(order, vec![(3, 1), (3, 2), (9, 0)]);
    }

    #[test]
    fn graph_and_finder_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Graph>();
        assert_send_sync::<FarePolicy>();
        assert_send_sync::<PathFinder<'static>>();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "fare policy failed validation")]
    fn finder_rejects_unvalidated_policy() {
        let graph = Graph::build(&[]);
        let mut policy = FarePolicy::default();
        policy.rounding_unit = 0;
        let _ = PathFinder::new(&graph, &policy);
    }
}

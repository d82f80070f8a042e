//
//  index.rs
//  Graphfold
//
//  Created by hak (tharun)
//

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::types::GraphEdge;

/// Outbound/inbound edge lookups over an immutable edge sequence.
///
/// Implementations must return edges in their original input order.
pub trait EdgeLookup<'g> {
    type Edge: GraphEdge + 'g;

    /// Edges whose `source` is `node_id`.
    fn outbound(&self, node_id: &str) -> Vec<&'g Self::Edge>;

    /// Edges whose `target` is `node_id`.
    fn inbound(&self, node_id: &str) -> Vec<&'g Self::Edge>;
}

/// Which [`EdgeLookup`] the resolver builds for a call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStrategy {
    /// Adjacency index built once per call.
    #[default]
    Indexed,
    /// Linear re-scan of the edge list on every lookup.
    Scan,
}

// ─── Linear Scan ───────────────────────────────────────────────

/// Reference lookup: filters the whole edge slice on every query.
#[derive(Debug, Clone)]
pub struct EdgeScan<'g, E> {
    edges: &'g [E],
}

impl<'g, E: GraphEdge> EdgeScan<'g, E> {
    pub fn new(edges: &'g [E]) -> Self {
        Self { edges }
    }
}

impl<'g, E: GraphEdge + 'g> EdgeLookup<'g> for EdgeScan<'g, E> {
    type Edge = E;

    fn outbound(&self, node_id: &str) -> Vec<&'g E> {
        self.edges.iter().filter(|e| e.source() == node_id).collect()
    }

    fn inbound(&self, node_id: &str) -> Vec<&'g E> {
        self.edges.iter().filter(|e| e.target() == node_id).collect()
    }
}

// ─── Adjacency Index ───────────────────────────────────────────

/// Adjacency index over a petgraph `DiGraph`.
///
/// Vertices exist only for ids that appear as an edge endpoint, dangling ones
/// included. Each graph edge carries its position in the input slice.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<'g, E> {
    edges: &'g [E],
    graph: DiGraph<&'g str, usize>,
    vertex_index: HashMap<&'g str, NodeIndex>,
}

impl<'g, E: GraphEdge> AdjacencyIndex<'g, E> {
    pub fn build(edges: &'g [E]) -> Self {
        let mut graph = DiGraph::with_capacity(edges.len(), edges.len());
        let mut vertex_index: HashMap<&'g str, NodeIndex> = HashMap::new();

        for (position, edge) in edges.iter().enumerate() {
            let from = *vertex_index
                .entry(edge.source())
                .or_insert_with(|| graph.add_node(edge.source()));
            let to = *vertex_index
                .entry(edge.target())
                .or_insert_with(|| graph.add_node(edge.target()));
            graph.add_edge(from, to, position);
        }

        debug!(
            vertices = graph.node_count(),
            edges = graph.edge_count(),
            "built adjacency index"
        );

        Self {
            edges,
            graph,
            vertex_index,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    fn collect(&self, node_id: &str, direction: Direction) -> Vec<&'g E> {
        let Some(&idx) = self.vertex_index.get(node_id) else {
            return Vec::new();
        };

        // petgraph walks adjacency newest-first
        let mut positions: Vec<usize> = self
            .graph
            .edges_directed(idx, direction)
            .map(|e| *e.weight())
            .collect();
        positions.sort_unstable();

        positions
            .into_iter()
            .filter_map(|p| self.edges.get(p))
            .collect()
    }
}

impl<'g, E: GraphEdge + 'g> EdgeLookup<'g> for AdjacencyIndex<'g, E> {
    type Edge = E;

    fn outbound(&self, node_id: &str) -> Vec<&'g E> {
        self.collect(node_id, Direction::Outgoing)
    }

    fn inbound(&self, node_id: &str) -> Vec<&'g E> {
        self.collect(node_id, Direction::Incoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Edge;

    fn ids<E: GraphEdge>(edges: Vec<&E>) -> Vec<&str> {
        edges.into_iter().map(|e| e.id()).collect()
    }

    fn sample() -> Vec<Edge> {
        vec![
            Edge::new("e1", "a", "b"),
            Edge::new("e2", "a", "c"),
            Edge::new("e3", "b", "c"),
            Edge::new("e4", "a", "b"),
            Edge::new("e5", "c", "c"),
            Edge::new("e6", "c", "ghost"),
        ]
    }

    #[test]
    fn test_scan_preserves_input_order() {
        let edges = sample();
        let scan = EdgeScan::new(&edges);
        assert_eq!(ids(scan.outbound("a")), vec!["e1", "e2", "e4"]);
        assert_eq!(ids(scan.inbound("c")), vec!["e2", "e3", "e5"]);
    }

    #[test]
    fn test_index_matches_scan() {
        let edges = sample();
        let scan = EdgeScan::new(&edges);
        let index = AdjacencyIndex::build(&edges);

        for id in ["a", "b", "c", "ghost", "missing"] {
            assert_eq!(ids(index.outbound(id)), ids(scan.outbound(id)), "outbound {id}");
            assert_eq!(ids(index.inbound(id)), ids(scan.inbound(id)), "inbound {id}");
        }
    }

    #[test]
    fn test_index_self_loop_in_both_directions() {
        let edges = sample();
        let index = AdjacencyIndex::build(&edges);
        assert!(ids(index.outbound("c")).contains(&"e5"));
        assert!(ids(index.inbound("c")).contains(&"e5"));
    }

    #[test]
    fn test_index_creates_vertices_for_dangling_endpoints() {
        let edges = sample();
        let index = AdjacencyIndex::build(&edges);
        assert_eq!(index.vertex_count(), 4);
        assert_eq!(ids(index.inbound("ghost")), vec!["e6"]);
    }

    #[test]
    fn test_unknown_id_has_no_edges() {
        let edges: Vec<Edge> = Vec::new();
        let index = AdjacencyIndex::build(&edges);
        assert!(index.outbound("a").is_empty());
        assert!(index.inbound("a").is_empty());
    }

    #[test]
    fn test_strategy_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: LookupStrategy,
        }
        let w: Wrapper = toml::from_str("strategy = \"scan\"").unwrap();
        assert_eq!(w.strategy, LookupStrategy::Scan);
        assert_eq!(LookupStrategy::default(), LookupStrategy::Indexed);
    }
}

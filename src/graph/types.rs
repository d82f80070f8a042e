//
//  types.rs
//  Graphfold
//
//  Created by hak (tharun)
//

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Anything with a stable identifier that can sit in the node sequence.
pub trait GraphNode {
    fn id(&self) -> &str;
}

/// A directed connection between two node identifiers.
///
/// Endpoints are plain ids and may refer to nodes that are not in the graph.
pub trait GraphEdge {
    fn id(&self) -> &str;
    fn source(&self) -> &str;
    fn target(&self) -> &str;
}

/// A graph node with an opaque payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// Everything besides `id` (labels, sizes, colours...). Not read by the resolver.
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: Map::new(),
        }
    }

    /// Attach a payload field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

impl GraphNode for Node {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A directed graph edge with an opaque payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            data: Map::new(),
        }
    }
}

impl GraphEdge for Edge {
    fn id(&self) -> &str {
        &self.id
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn target(&self) -> &str {
        &self.target
    }
}

/// On-disk shape of a graph: ordered nodes and ordered edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats::of(&self.nodes, &self.edges)
    }
}

/// Shape summary of a graph, including the anomalies the resolver tolerates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    /// Edges with at least one endpoint missing from the node sequence.
    pub dangling_edges: usize,
    pub self_loops: usize,
    /// Node entries whose id was already used by an earlier node.
    pub duplicate_node_ids: usize,
}

impl GraphStats {
    pub fn of<N: GraphNode, E: GraphEdge>(nodes: &[N], edges: &[E]) -> Self {
        let mut ids: HashSet<&str> = HashSet::with_capacity(nodes.len());
        let mut duplicate_node_ids = 0;
        for node in nodes {
            if !ids.insert(node.id()) {
                duplicate_node_ids += 1;
            }
        }

        let dangling_edges = edges
            .iter()
            .filter(|e| !ids.contains(e.source()) || !ids.contains(e.target()))
            .count();
        let self_loops = edges.iter().filter(|e| e.source() == e.target()).count();

        Self {
            total_nodes: nodes.len(),
            total_edges: edges.len(),
            dangling_edges,
            self_loops,
            duplicate_node_ids,
        }
    }
}

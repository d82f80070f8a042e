//! Graph module — the data model and the collapse/visibility engine.
//!
//! Provides the node/edge types, edge lookups (linear scan or adjacency
//! index), and the resolver that folds collapsed subtrees out of view.

pub mod index;
pub mod resolver;
pub mod types;

pub use index::{AdjacencyIndex, EdgeLookup, EdgeScan, LookupStrategy};
pub use resolver::{
    compute_visibility, resolve_hidden_subtree, HiddenSet, VisibilityResolver, VisibilityResult,
};
pub use types::{Edge, GraphDocument, GraphEdge, GraphNode, GraphStats, Node};

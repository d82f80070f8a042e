//! # Graphfold
//!
//! Collapse-aware visibility for interactive node-link graphs.
//!
//! When a user collapses a node, its outbound edges disappear and so does every
//! descendant that has no other live way in. Graphfold computes that hidden set
//! and hands back the visible subgraph, in input order.
//!
//! ## Key Features
//!
//! - **Shared children stay visible**: a node keeps showing while any inbound edge
//!   from a non-collapsed source remains
//! - **Total**: dangling edges, unknown ids and duplicates are no-ops, never errors
//! - **Pure**: no state between calls; the input graph is only borrowed
//! - **Bring your own types**: resolve over anything implementing [`GraphNode`] / [`GraphEdge`]
//!
//! ## Quick Start
//!
//! ```rust
//! use graphfold::{compute_visibility, Edge, Node};
//!
//! let nodes = vec![Node::new("a"), Node::new("b"), Node::new("c")];
//! let edges = vec![Edge::new("ac", "a", "c"), Edge::new("bc", "b", "c")];
//!
//! // c is still reachable from b
//! let result = compute_visibility(&["a"], &nodes, &edges);
//! assert_eq!(result.visible_nodes.len(), 3);
//! assert_eq!(result.visible_edges.len(), 1);
//!
//! // with both parents collapsed, c goes too
//! let result = compute_visibility(&["a", "b"], &nodes, &edges);
//! assert_eq!(result.visible_nodes.len(), 2);
//! assert!(result.visible_edges.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod storage;

// Re-exports for convenience
pub use config::GraphfoldConfig;
pub use error::{GraphfoldError, Result};
pub use graph::{
    compute_visibility, resolve_hidden_subtree, AdjacencyIndex, Edge, EdgeLookup, EdgeScan,
    GraphDocument, GraphEdge, GraphNode, GraphStats, HiddenSet, LookupStrategy, Node,
    VisibilityResolver, VisibilityResult,
};

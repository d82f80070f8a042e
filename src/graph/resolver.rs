//
//  resolver.rs
//  Graphfold
//
//  Created by hak (tharun)
//

use std::collections::HashSet;
use tracing::{debug, trace};

use super::index::{AdjacencyIndex, EdgeLookup, EdgeScan, LookupStrategy};
use super::types::{Edge, GraphDocument, GraphEdge, GraphNode, Node};

/// Node and edge ids hidden by one or more collapsed roots.
///
/// Ids are borrowed from the graph being resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenSet<'g> {
    pub nodes: HashSet<&'g str>,
    pub edges: HashSet<&'g str>,
}

impl<'g> HiddenSet<'g> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edges.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Union another set into this one.
    pub fn merge(&mut self, other: HiddenSet<'g>) {
        self.nodes.extend(other.nodes);
        self.edges.extend(other.edges);
    }

    /// Whether every id in `self` is also in `other`.
    pub fn is_subset(&self, other: &HiddenSet<'_>) -> bool {
        self.nodes.iter().all(|id| other.nodes.contains(*id))
            && self.edges.iter().all(|id| other.edges.contains(*id))
    }

    pub fn sorted_nodes(&self) -> Vec<&'g str> {
        let mut ids: Vec<&'g str> = self.nodes.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn sorted_edges(&self) -> Vec<&'g str> {
        let mut ids: Vec<&'g str> = self.edges.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Outcome of a visibility resolution.
///
/// `visible_nodes` and `visible_edges` borrow the input elements in input order.
#[derive(Debug, Clone)]
pub struct VisibilityResult<'g, N, E> {
    pub hidden: HiddenSet<'g>,
    pub visible_nodes: Vec<&'g N>,
    pub visible_edges: Vec<&'g E>,
}

impl<'g, N, E> VisibilityResult<'g, N, E> {
    pub fn hidden_node_count(&self) -> usize {
        self.hidden.nodes.len()
    }

    pub fn hidden_edge_count(&self) -> usize {
        self.hidden.edges.len()
    }
}

impl VisibilityResult<'_, Node, Edge> {
    /// Clone the visible subgraph into an owned document.
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            nodes: self.visible_nodes.iter().map(|n| (*n).clone()).collect(),
            edges: self.visible_edges.iter().map(|e| (*e).clone()).collect(),
        }
    }
}

/// Resolves collapsed roots into a visible subgraph with a chosen edge lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityResolver {
    strategy: LookupStrategy,
}

impl VisibilityResolver {
    pub fn new(strategy: LookupStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> LookupStrategy {
        self.strategy
    }

    /// Fold `collapsed_ids` in order and return the visible subgraph.
    ///
    /// Unknown and repeated ids are no-ops. Never fails.
    pub fn compute<'g, N, E, S>(
        &self,
        collapsed_ids: &[S],
        nodes: &'g [N],
        edges: &'g [E],
    ) -> VisibilityResult<'g, N, E>
    where
        N: GraphNode,
        E: GraphEdge,
        S: AsRef<str>,
    {
        match self.strategy {
            LookupStrategy::Indexed => {
                let index = AdjacencyIndex::build(edges);
                resolve_with(collapsed_ids, nodes, edges, &index)
            }
            LookupStrategy::Scan => {
                let scan = EdgeScan::new(edges);
                resolve_with(collapsed_ids, nodes, edges, &scan)
            }
        }
    }
}

/// Compute the visible subgraph for a set of collapsed node ids.
///
/// Builds an adjacency index once for the call. See [`VisibilityResolver`] to
/// pick the lookup explicitly.
pub fn compute_visibility<'g, N, E, S>(
    collapsed_ids: &[S],
    nodes: &'g [N],
    edges: &'g [E],
) -> VisibilityResult<'g, N, E>
where
    N: GraphNode,
    E: GraphEdge,
    S: AsRef<str>,
{
    VisibilityResolver::default().compute(collapsed_ids, nodes, edges)
}

/// Hide the outbound subtree of `node_id`.
///
/// Every outbound edge of a folded node is hidden. A target is hidden when it
/// has no inbound edge from another source, or when every such edge is
/// already in `already`. Edges hidden by this same root do not count. Hidden
/// targets are folded in turn; a dangling target is folded without being
/// recorded as a hidden node.
///
/// Returns what this root hides; the result may overlap `already`. A root that
/// is not in `nodes` hides nothing.
pub fn resolve_hidden_subtree<'g, N, L>(
    node_id: &str,
    nodes: &'g [N],
    lookup: &L,
    already: &HiddenSet<'g>,
) -> HiddenSet<'g>
where
    N: GraphNode,
    L: EdgeLookup<'g>,
{
    let known: HashSet<&'g str> = nodes.iter().map(|n| n.id()).collect();
    fold_subtree(node_id, &known, lookup, already)
}

fn resolve_with<'g, N, E, S, L>(
    collapsed_ids: &[S],
    nodes: &'g [N],
    edges: &'g [E],
    lookup: &L,
) -> VisibilityResult<'g, N, E>
where
    N: GraphNode,
    E: GraphEdge,
    S: AsRef<str>,
    L: EdgeLookup<'g, Edge = E>,
{
    let known: HashSet<&'g str> = nodes.iter().map(|n| n.id()).collect();
    let mut hidden = HiddenSet::new();
    let mut folded: HashSet<&str> = HashSet::new();

    for collapsed_id in collapsed_ids {
        let collapsed_id = collapsed_id.as_ref();
        // a repeat would re-test targets against its own earlier edges
        if !folded.insert(collapsed_id) {
            trace!(root = collapsed_id, "repeated collapsed id, skipping");
            continue;
        }
        let found = fold_subtree(collapsed_id, &known, lookup, &hidden);
        hidden.merge(found);
    }

    let visible_nodes: Vec<&'g N> = nodes
        .iter()
        .filter(|n| !hidden.contains_node(n.id()))
        .collect();
    let visible_edges: Vec<&'g E> = edges
        .iter()
        .filter(|e| !hidden.contains_edge(e.id()))
        .collect();

    debug!(
        collapsed = collapsed_ids.len(),
        hidden_nodes = hidden.nodes.len(),
        hidden_edges = hidden.edges.len(),
        visible_nodes = visible_nodes.len(),
        visible_edges = visible_edges.len(),
        "resolved visibility"
    );

    VisibilityResult {
        hidden,
        visible_nodes,
        visible_edges,
    }
}

/// Worklist walk from `root`. `expanded` guards against cycles and self-loops.
fn fold_subtree<'g, L: EdgeLookup<'g>>(
    root: &str,
    known: &HashSet<&'g str>,
    lookup: &L,
    already: &HiddenSet<'g>,
) -> HiddenSet<'g> {
    let mut found = HiddenSet::new();

    let Some(&root) = known.get(root) else {
        trace!(root, "collapsed id not in graph, skipping");
        return found;
    };

    let mut expanded: HashSet<&'g str> = HashSet::from([root]);
    let mut pending: Vec<&'g str> = vec![root];

    while let Some(current) = pending.pop() {
        let outbound = lookup.outbound(current);
        found.edges.extend(outbound.iter().map(|e| e.id()));

        let mut seen_targets: HashSet<&'g str> = HashSet::new();
        for edge in &outbound {
            let target = edge.target();
            if !seen_targets.insert(target) {
                continue;
            }
            if already.contains_node(target) || found.contains_node(target) {
                continue;
            }

            let other_inbound_live = lookup
                .inbound(target)
                .into_iter()
                .filter(|e| e.source() != current)
                .any(|e| !already.contains_edge(e.id()));
            if other_inbound_live {
                continue;
            }

            if known.contains(target) {
                trace!(parent = current, node = target, "hiding node");
                found.nodes.insert(target);
            } else {
                trace!(parent = current, node = target, "folding through dangling id");
            }
            if expanded.insert(target) {
                pending.push(target);
            }
        }
    }

    found
}

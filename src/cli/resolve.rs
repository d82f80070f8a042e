//
//  resolve.rs
//  Graphfold
//
//  Created by hak (tharun)
//

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::config::GraphfoldConfig;
use crate::graph::{Edge, GraphDocument, Node, VisibilityResult};
use crate::storage::load_graph;

/// Hidden ids, sorted for stable output.
#[derive(Debug, Serialize)]
struct HiddenIds<'a> {
    nodes: Vec<&'a str>,
    edges: Vec<&'a str>,
}

/// Collapse `collapse` in `graph` and print the result to stdout.
pub fn resolve(
    config: &GraphfoldConfig,
    graph: &Path,
    collapse: &[String],
    hidden: bool,
) -> Result<()> {
    let doc = load_graph(graph)
        .with_context(|| format!("Failed to load graph {}", graph.display()))?;
    let output = render_resolution(config, &doc, collapse, hidden)?;
    println!("{}", output);
    Ok(())
}

/// Print graph statistics to stdout.
pub fn stats(graph: &Path) -> Result<()> {
    let doc = load_graph(graph)
        .with_context(|| format!("Failed to load graph {}", graph.display()))?;
    print!("{}", render_stats(&doc));
    Ok(())
}

pub(crate) fn render_resolution(
    config: &GraphfoldConfig,
    doc: &GraphDocument,
    collapse: &[String],
    hidden: bool,
) -> Result<String> {
    let result = config.resolver().compute(collapse, &doc.nodes, &doc.edges);
    info!(
        collapsed = collapse.len(),
        hidden_nodes = result.hidden_node_count(),
        hidden_edges = result.hidden_edge_count(),
        "resolved"
    );

    if hidden || config.output.include_hidden {
        to_json(config, &hidden_ids(&result))
    } else {
        to_json(config, &result.to_document())
    }
}

pub(crate) fn render_stats(doc: &GraphDocument) -> String {
    let stats = doc.stats();
    let mut out = String::new();
    out.push_str("Graph Stats\n");
    out.push_str("───────────\n");
    out.push_str(&format!("Nodes:              {}\n", stats.total_nodes));
    out.push_str(&format!("Edges:              {}\n", stats.total_edges));
    out.push_str(&format!("Dangling edges:     {}\n", stats.dangling_edges));
    out.push_str(&format!("Self loops:         {}\n", stats.self_loops));
    out.push_str(&format!("Duplicate node ids: {}\n", stats.duplicate_node_ids));
    out
}

fn hidden_ids<'a>(result: &VisibilityResult<'a, Node, Edge>) -> HiddenIds<'a> {
    HiddenIds {
        nodes: result.hidden.sorted_nodes(),
        edges: result.hidden.sorted_edges(),
    }
}

fn to_json<T: Serialize>(config: &GraphfoldConfig, value: &T) -> Result<String> {
    let json = if config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> GraphDocument {
        GraphDocument::new(
            vec![Node::new("a"), Node::new("b"), Node::new("c"), Node::new("x")],
            vec![
                Edge::new("ab", "a", "b"),
                Edge::new("bc", "b", "c"),
                Edge::new("xc", "x", "c"),
            ],
        )
    }

    fn compact() -> GraphfoldConfig {
        let mut config = GraphfoldConfig::default();
        config.output.pretty = false;
        config
    }

    #[test]
    fn test_render_visible_document() {
        let out = render_resolution(&compact(), &chain(), &["a".to_string()], false).unwrap();
        let doc: GraphDocument = serde_json::from_str(&out).unwrap();
        let ids: Vec<&str> = doc.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "x"]);
        assert_eq!(doc.edges.len(), 1);
        assert_eq!(doc.edges[0].id, "xc");
    }

    #[test]
    fn test_render_hidden_ids_sorted() {
        let out = render_resolution(&compact(), &chain(), &["a".to_string()], true).unwrap();
        assert_eq!(out, r#"{"nodes":["b"],"edges":["ab","bc"]}"#);
    }

    #[test]
    fn test_include_hidden_from_config() {
        let mut config = compact();
        config.output.include_hidden = true;
        let out = render_resolution(&config, &chain(), &[], false).unwrap();
        assert_eq!(out, r#"{"nodes":[],"edges":[]}"#);
    }

    #[test]
    fn test_render_stats() {
        let out = render_stats(&chain());
        assert!(out.contains("Nodes:              4"));
        assert!(out.contains("Edges:              3"));
        assert!(out.contains("Dangling edges:     0"));
    }
}

//! Batch execution: many collapse scenarios against one graph
//!
//! Scenarios are independent, so they resolve in parallel over the same
//! immutable graph document.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::Path;
use tracing::info;

use crate::config::GraphfoldConfig;
use crate::graph::GraphDocument;
use crate::storage::{load_graph, load_scenarios, Scenarios};

/// Per-scenario visible counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSummary {
    pub name: String,
    pub visible_nodes: usize,
    pub visible_edges: usize,
}

/// Resolve every scenario in `scenarios` against `graph` and print a summary line each.
pub fn execute(config: &GraphfoldConfig, graph: &Path, scenarios: &Path) -> Result<()> {
    let doc = load_graph(graph)
        .with_context(|| format!("Failed to load graph {}", graph.display()))?;
    let scenarios = load_scenarios(scenarios)
        .with_context(|| format!("Failed to load scenarios {}", scenarios.display()))?;

    info!(count = scenarios.len(), "running scenarios");

    let total_nodes = doc.nodes.len();
    let total_edges = doc.edges.len();
    for summary in summarize(config, &doc, &scenarios) {
        println!(
            "{}: {}/{} nodes {}/{} edges",
            summary.name, summary.visible_nodes, total_nodes, summary.visible_edges, total_edges
        );
    }

    Ok(())
}

/// Summaries in scenario-name order.
pub fn summarize(
    config: &GraphfoldConfig,
    doc: &GraphDocument,
    scenarios: &Scenarios,
) -> Vec<ScenarioSummary> {
    let resolver = config.resolver();

    // par_iter over a BTreeMap keeps key order on collect
    scenarios
        .par_iter()
        .map(|(name, collapsed)| {
            let result = resolver.compute(collapsed, &doc.nodes, &doc.edges);
            ScenarioSummary {
                name: name.clone(),
                visible_nodes: result.visible_nodes.len(),
                visible_edges: result.visible_edges.len(),
            }
        })
        .collect()
}

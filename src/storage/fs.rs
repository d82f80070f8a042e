//! File system operations for Graphfold documents.

use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{GraphfoldError, Result};
use crate::graph::GraphDocument;

/// Named collapse sets, keyed by scenario name.
pub type Scenarios = BTreeMap<String, Vec<String>>;

/// Serialization format of a document on disk, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(GraphfoldError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Read a graph document (`{ nodes, edges }`) from disk.
pub fn load_graph(path: &Path) -> Result<GraphDocument> {
    let doc: GraphDocument = read_document(path)?;
    let stats = doc.stats();
    debug!(
        path = %path.display(),
        nodes = stats.total_nodes,
        edges = stats.total_edges,
        dangling = stats.dangling_edges,
        "loaded graph document"
    );
    Ok(doc)
}

/// Read a scenario file: a map of scenario name to collapsed node ids.
pub fn load_scenarios(path: &Path) -> Result<Scenarios> {
    let scenarios: Scenarios = read_document(path)?;
    debug!(path = %path.display(), count = scenarios.len(), "loaded scenarios");
    Ok(scenarios)
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DocumentFormat::from_path(path)?;

    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(&content)?),
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(&content)?),
    }
}

//
//  config.rs
//  Graphfold
//
//  Created by hak (tharun)
//

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::graph::{LookupStrategy, VisibilityResolver};

/// Top-level Graphfold configuration (`graphfold.toml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphfoldConfig {
    #[serde(default)]
    pub resolve: ResolveConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Resolver settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Edge lookup used during resolution: "indexed" or "scan".
    #[serde(default)]
    pub strategy: LookupStrategy,
}

/// Output settings for the command-line tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Print hidden id lists instead of the visible document.
    #[serde(default)]
    pub include_hidden: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            include_hidden: false,
        }
    }
}

impl GraphfoldConfig {
    /// Load config from a TOML file, falling back to defaults when it is missing.
    ///
    /// A file that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn resolver(&self) -> VisibilityResolver {
        VisibilityResolver::new(self.resolve.strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphfoldError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = GraphfoldConfig::load(&dir.path().join("graphfold.toml")).unwrap();
        assert_eq!(config, GraphfoldConfig::default());
        assert_eq!(config.resolve.strategy, LookupStrategy::Indexed);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphfold.toml");
        fs::write(&path, "[resolve]\nstrategy = \"scan\"\n").unwrap();

        let config = GraphfoldConfig::load(&path).unwrap();
        assert_eq!(config.resolve.strategy, LookupStrategy::Scan);
        assert_eq!(config.resolver().strategy(), LookupStrategy::Scan);
        assert!(config.output.pretty);
        assert!(!config.output.include_hidden);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphfold.toml");
        fs::write(&path, "[resolve]\nstrategy = \"sideways\"\n").unwrap();

        let err = GraphfoldConfig::load(&path).unwrap_err();
        assert!(matches!(err, GraphfoldError::Config(_)));
    }
}

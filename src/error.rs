//
//  error.rs
//  Graphfold
//
//  Created by hak (tharun)
//

use std::path::PathBuf;

/// Errors raised at the edges of the crate: reading documents and config.
///
/// Resolution itself never fails; malformed ids inside a well-formed graph are
/// handled by omission.
#[derive(Debug, thiserror::Error)]
pub enum GraphfoldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, GraphfoldError>;

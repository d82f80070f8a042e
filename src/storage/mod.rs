//! Storage module for Graphfold.
//!
//! Reads graph documents and collapse scenarios from JSON or YAML files.

mod fs;

pub use fs::{load_graph, load_scenarios, DocumentFormat, Scenarios};

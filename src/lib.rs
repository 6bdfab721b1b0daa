//! Kinpath
//!
//! Shortest parent-child lineage from one designated individual to everyone
//! else in a family graph.
//!
//! # Architecture
//!
//! - `graph`: family graph store. Directed parent → child edges, symmetric
//!   adjacency for traversal, construction from family records.
//! - `algo`: projects the store into the dense view used by
//!   `kinpath-algorithms` (BFS, shortest-path trees).
//! - `lineage`: name-level results. Distance and predecessor maps, canonical
//!   path reconstruction, direct-relative marking.
//! - `config`: YAML configuration (source individual, unknown-parent marker).
//!
//! ## Example Usage
//!
//! ```rust
//! use kinpath::graph::FamilyGraph;
//! use kinpath::lineage::{annotate, Lineage};
//!
//! let mut graph = FamilyGraph::new();
//! graph.add_edge("John", "Alice").unwrap();
//! graph.add_edge("John", "Bob").unwrap();
//! graph.add_edge("Alice", "Carol").unwrap();
//!
//! let lineage = Lineage::compute(&graph, "Bob").unwrap();
//! assert_eq!(lineage.distance("Carol").unwrap(), Some(3));
//!
//! let path = lineage.path_to("Carol").unwrap().unwrap();
//! let marks = annotate([&path]);
//! assert!(marks.is_direct("John"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod lineage;

// Re-export main types for convenience
pub use graph::{
    FamilyGraph, FamilyRecord, GraphError, GraphResult, Individual, IndividualId, ParentChildEdge,
};

pub use lineage::{
    annotate, compute_distances, reconstruct_path, AnnotatedPath, DirectMarks, DistanceMap,
    Lineage, LineageEntry, PredecessorMap,
};

pub use config::{ConfigError, ConfigResult, LineageConfig};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

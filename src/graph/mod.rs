//! Family graph store
//!
//! This module implements the parent-child data model with:
//! - Individuals identified by name, interned to dense ids
//! - Directed parent → child edges, deduplicated
//! - Symmetric adjacency for traversal across parents and children
//! - Construction from family records

pub mod edge;
pub mod record;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::ParentChildEdge;
pub use record::FamilyRecord;
pub use store::{FamilyGraph, GraphError, GraphResult};
pub use types::{Individual, IndividualId};

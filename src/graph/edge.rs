//! Parent-child relation between two registered individuals

use super::types::IndividualId;
use serde::{Deserialize, Serialize};

/// A directed parent → child edge.
///
/// Edges are stored directed so downstream rendering can tell parents from
/// children; traversal treats them as undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParentChildEdge {
    /// Edge goes FROM the parent
    pub parent: IndividualId,

    /// Edge goes TO the child
    pub child: IndividualId,
}

impl ParentChildEdge {
    pub fn new(parent: IndividualId, child: IndividualId) -> Self {
        ParentChildEdge { parent, child }
    }

    /// Check whether the edge touches an individual
    pub fn connects(&self, id: IndividualId) -> bool {
        self.parent == id || self.child == id
    }

    /// Get the endpoint across from `id`, if `id` is an endpoint
    pub fn other(&self, id: IndividualId) -> Option<IndividualId> {
        if self.parent == id {
            Some(self.child)
        } else if self.child == id {
            Some(self.parent)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_endpoints() {
        let edge = ParentChildEdge::new(IndividualId::new(1), IndividualId::new(2));

        assert!(edge.connects(IndividualId::new(1)));
        assert!(edge.connects(IndividualId::new(2)));
        assert!(!edge.connects(IndividualId::new(3)));

        assert_eq!(edge.other(IndividualId::new(1)), Some(IndividualId::new(2)));
        assert_eq!(edge.other(IndividualId::new(2)), Some(IndividualId::new(1)));
        assert_eq!(edge.other(IndividualId::new(3)), None);
    }
}

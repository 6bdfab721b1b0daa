//! In-memory family graph storage
//!
//! Individuals are registered once and receive a dense [`IndividualId`].
//! Parent → child edges are stored directed, and every edge also feeds a
//! symmetric adjacency set used for traversal. All sets keep insertion order
//! so traversal order (and therefore tie-breaking) is reproducible.

use super::edge::ParentChildEdge;
use super::record::FamilyRecord;
use super::types::{Individual, IndividualId};
use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Individual '{0}' not found")]
    UnknownIndividual(Individual),

    #[error("Malformed edge '{parent}' -> '{child}': {reason}")]
    MalformedEdge {
        parent: String,
        child: String,
        reason: &'static str,
    },

    #[error("Invalid individual: identity {0:?} is blank")]
    InvalidIndividual(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory family graph
///
/// - individuals: IndividualId -> Individual (arena, index = id)
/// - index: Individual -> IndividualId
/// - edges: deduplicated parent -> child edges in insertion order
/// - children / parents: directed adjacency for rendering
/// - adjacency: undirected adjacency for traversal
#[derive(Debug, Default, Clone)]
pub struct FamilyGraph {
    individuals: Vec<Individual>,
    index: FxHashMap<Individual, IndividualId>,
    edges: IndexSet<ParentChildEdge>,
    children: Vec<IndexSet<IndividualId>>,
    parents: Vec<IndexSet<IndividualId>>,
    adjacency: Vec<IndexSet<IndividualId>>,
}

impl FamilyGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from family records.
    ///
    /// Every record's name is registered even when it has no relations. A
    /// parent equal to `unknown_marker` is treated as absent.
    pub fn from_records<'a, I>(records: I, unknown_marker: &str) -> GraphResult<Self>
    where
        I: IntoIterator<Item = &'a FamilyRecord>,
    {
        let mut graph = Self::new();
        for record in records {
            graph.add_individual(record.name.as_str())?;
            for parent in record.known_parents(unknown_marker) {
                graph.add_edge(parent, record.name.as_str())?;
            }
            for child in &record.children {
                graph.add_edge(record.name.as_str(), child.as_str())?;
            }
        }
        debug!(
            individuals = graph.individual_count(),
            edges = graph.edge_count(),
            "built family graph from records"
        );
        Ok(graph)
    }

    /// Register an individual without any relations.
    ///
    /// Idempotent: re-registering returns the existing id.
    pub fn add_individual(&mut self, name: impl Into<Individual>) -> GraphResult<IndividualId> {
        let name = name.into();
        if name.is_blank() {
            warn!(name = %name, "rejected blank individual");
            return Err(GraphError::InvalidIndividual(name.as_str().to_string()));
        }
        Ok(self.intern(name))
    }

    /// Insert a parent → child relation, registering both endpoints.
    ///
    /// Inserting the same relation twice is a no-op. Blank identities and
    /// self-parenting are rejected before anything is registered.
    pub fn add_edge(
        &mut self,
        parent: impl Into<Individual>,
        child: impl Into<Individual>,
    ) -> GraphResult<ParentChildEdge> {
        let parent = parent.into();
        let child = child.into();

        let reason = if parent.is_blank() {
            Some("parent identity is blank")
        } else if child.is_blank() {
            Some("child identity is blank")
        } else if parent == child {
            Some("individual cannot be their own parent")
        } else {
            None
        };
        if let Some(reason) = reason {
            warn!(parent = %parent, child = %child, reason, "rejected edge");
            return Err(GraphError::MalformedEdge {
                parent: parent.as_str().to_string(),
                child: child.as_str().to_string(),
                reason,
            });
        }

        let parent_id = self.intern(parent);
        let child_id = self.intern(child);
        let edge = ParentChildEdge::new(parent_id, child_id);

        if !self.edges.insert(edge) {
            debug!(parent = parent_id.as_u64(), child = child_id.as_u64(), "duplicate edge ignored");
            return Ok(edge);
        }

        self.children[parent_id.index()].insert(child_id);
        self.parents[child_id.index()].insert(parent_id);
        self.adjacency[parent_id.index()].insert(child_id);
        self.adjacency[child_id.index()].insert(parent_id);

        Ok(edge)
    }

    fn intern(&mut self, name: Individual) -> IndividualId {
        if let Some(&id) = self.index.get(&name) {
            return id;
        }
        let id = IndividualId::new(self.individuals.len() as u64);
        self.index.insert(name.clone(), id);
        self.individuals.push(name);
        self.children.push(IndexSet::new());
        self.parents.push(IndexSet::new());
        self.adjacency.push(IndexSet::new());
        id
    }

    /// Look up an individual's id
    pub fn id_of(&self, name: &str) -> Option<IndividualId> {
        self.index.get(name).copied()
    }

    /// Look up an individual's id, failing for unregistered names
    pub fn require(&self, name: &str) -> GraphResult<IndividualId> {
        self.id_of(name)
            .ok_or_else(|| GraphError::UnknownIndividual(Individual::new(name)))
    }

    /// Name of an id issued by this graph
    pub(crate) fn name_at(&self, id: IndividualId) -> &Individual {
        &self.individuals[id.index()]
    }

    pub fn individual(&self, id: IndividualId) -> Option<&Individual> {
        self.individuals.get(id.index())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Traversal neighbors (parents and children), in insertion order.
    ///
    /// Individuals without edges, including unregistered ones, yield nothing.
    pub fn neighbors(&self, name: &str) -> Vec<&Individual> {
        self.resolve(name, &self.adjacency)
    }

    /// Children of an individual, in insertion order
    pub fn children(&self, name: &str) -> Vec<&Individual> {
        self.resolve(name, &self.children)
    }

    /// Parents of an individual, in insertion order
    pub fn parents(&self, name: &str) -> Vec<&Individual> {
        self.resolve(name, &self.parents)
    }

    fn resolve(&self, name: &str, sets: &[IndexSet<IndividualId>]) -> Vec<&Individual> {
        match self.id_of(name) {
            Some(id) => sets[id.index()]
                .iter()
                .map(|n| &self.individuals[n.index()])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Traversal neighbors by id, in insertion order
    pub fn neighbor_ids(&self, id: IndividualId) -> impl Iterator<Item = IndividualId> + '_ {
        self.adjacency
            .get(id.index())
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// All individuals in registration order
    pub fn individuals(&self) -> impl Iterator<Item = (IndividualId, &Individual)> {
        self.individuals
            .iter()
            .enumerate()
            .map(|(idx, name)| (IndividualId::new(idx as u64), name))
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &ParentChildEdge> {
        self.edges.iter()
    }

    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: Vec<&Individual>) -> Vec<&str> {
        list.into_iter().map(Individual::as_str).collect()
    }

    #[test]
    fn test_add_edge_registers_both_endpoints() {
        let mut graph = FamilyGraph::new();
        let edge = graph.add_edge("John", "Bob").unwrap();

        assert_eq!(graph.individual_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(edge.parent, graph.id_of("John").unwrap());
        assert_eq!(edge.child, graph.id_of("Bob").unwrap());
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![&edge]);
    }

    #[test]
    fn test_neighbors_are_symmetric() {
        let mut graph = FamilyGraph::new();
        graph.add_edge("John", "Alice").unwrap();
        graph.add_edge("John", "Bob").unwrap();
        graph.add_edge("Alice", "Carol").unwrap();

        assert_eq!(names(graph.neighbors("John")), vec!["Alice", "Bob"]);
        assert_eq!(names(graph.neighbors("Alice")), vec!["John", "Carol"]);
        assert_eq!(names(graph.neighbors("Bob")), vec!["John"]);

        assert_eq!(names(graph.children("John")), vec!["Alice", "Bob"]);
        assert!(graph.parents("John").is_empty());
        assert_eq!(names(graph.parents("Carol")), vec!["Alice"]);
    }

    #[test]
    fn test_duplicate_edge_is_idempotent() {
        let mut graph = FamilyGraph::new();
        let first = graph.add_edge("Bob", "Eve").unwrap();
        let second = graph.add_edge("Bob", "Eve").unwrap();

        assert_eq!(first, second);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(names(graph.neighbors("Bob")), vec!["Eve"]);
        assert_eq!(names(graph.neighbors("Eve")), vec!["Bob"]);
    }

    #[test]
    fn test_reverse_edge_keeps_single_neighbor() {
        // Cyclic data: both directions recorded
        let mut graph = FamilyGraph::new();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "A").unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(names(graph.neighbors("A")), vec!["B"]);
    }

    #[test]
    fn test_neighbors_of_unknown_or_isolated() {
        let mut graph = FamilyGraph::new();
        graph.add_individual("Loner").unwrap();

        assert!(graph.neighbors("Loner").is_empty());
        assert!(graph.neighbors("Nobody").is_empty());
        assert!(graph.contains("Loner"));
        assert!(!graph.contains("Nobody"));
    }

    #[test]
    fn test_malformed_edges_rejected() {
        let mut graph = FamilyGraph::new();

        let err = graph.add_edge("", "Bob").unwrap_err();
        assert!(matches!(err, GraphError::MalformedEdge { .. }));

        let err = graph.add_edge("Bob", "   ").unwrap_err();
        assert!(matches!(err, GraphError::MalformedEdge { .. }));

        let err = graph.add_edge("Bob", "Bob").unwrap_err();
        assert!(matches!(err, GraphError::MalformedEdge { .. }));

        // Nothing was registered by the rejected inserts
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_individual() {
        let mut graph = FamilyGraph::new();
        let a = graph.add_individual("Ann").unwrap();
        let b = graph.add_individual("Ann").unwrap();
        assert_eq!(a, b);
        assert_eq!(graph.individual(a).map(Individual::as_str), Some("Ann"));

        assert_eq!(
            graph.add_individual(""),
            Err(GraphError::InvalidIndividual(String::new()))
        );
    }

    #[test]
    fn test_require_unknown() {
        let graph = FamilyGraph::new();
        assert_eq!(
            graph.require("Ghost"),
            Err(GraphError::UnknownIndividual(Individual::new("Ghost")))
        );
    }

    #[test]
    fn test_from_records() {
        let records = vec![
            FamilyRecord::new("Bob").with_father("Charlie").with_mother("Eve"),
            FamilyRecord::new("Eve").with_father("Unknown").with_children(["Bob"]),
            FamilyRecord::new("Solo"),
        ];
        let graph = FamilyGraph::from_records(&records, "Unknown").unwrap();

        assert_eq!(graph.individual_count(), 4);
        // Eve -> Bob is recorded from both cards but stored once
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.contains("Unknown"));
        assert!(graph.contains("Solo"));
        assert_eq!(names(graph.parents("Bob")), vec!["Charlie", "Eve"]);
    }

    #[test]
    fn test_from_records_rejects_blank_child() {
        let records = vec![FamilyRecord::new("Bob").with_children([""])];
        let err = FamilyGraph::from_records(&records, "Unknown").unwrap_err();
        assert!(matches!(err, GraphError::MalformedEdge { .. }));
    }
}

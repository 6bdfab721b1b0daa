//! Shortest lineage from a single source individual
//!
//! [`Lineage::compute`] runs one breadth-first search from the source across
//! parent and child relations. The result answers, for every individual, how
//! many parent-child steps separate them from the source and which single
//! shortest path is canonical. Ties are broken by BFS layer order and then by
//! edge insertion order, so the same graph always yields the same paths.

pub mod annotate;

use crate::algo::{build_view, shortest_path_tree, ShortestPathTree};
use crate::graph::{FamilyGraph, GraphError, GraphResult, Individual, IndividualId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use annotate::{annotate, DirectMarks, LineageEntry};

/// Individual -> hop count from the source. Unreached individuals are absent.
pub type DistanceMap = IndexMap<Individual, usize>;

/// Individual -> predecessor on the canonical path (`None` for the source).
pub type PredecessorMap = IndexMap<Individual, Option<Individual>>;

/// Ordered sequence of individuals from the source to a target, inclusive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotatedPath(Vec<Individual>);

impl AnnotatedPath {
    pub fn new(individuals: Vec<Individual>) -> Self {
        AnnotatedPath(individuals)
    }

    pub fn source(&self) -> Option<&Individual> {
        self.0.first()
    }

    pub fn target(&self) -> Option<&Individual> {
        self.0.last()
    }

    /// Number of parent-child steps along the path
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.0.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|i| i == name)
    }
}

impl<'a> IntoIterator for &'a AnnotatedPath {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Run BFS from `source` and return its distance and predecessor maps.
///
/// Both maps list individuals in discovery order, source first.
pub fn compute_distances(
    graph: &FamilyGraph,
    source: &str,
) -> GraphResult<(DistanceMap, PredecessorMap)> {
    let lineage = Lineage::compute(graph, source)?;
    Ok((lineage.distances(), lineage.predecessors()))
}

/// Follow predecessor links from `target` back to `source`.
///
/// Returns `None` when the target is unreachable, i.e. absent from the map and
/// not the source itself, or when the chain does not lead back to `source`.
pub fn reconstruct_path(
    predecessors: &PredecessorMap,
    source: &str,
    target: &str,
) -> Option<AnnotatedPath> {
    if target == source {
        return Some(AnnotatedPath::new(vec![Individual::new(source)]));
    }

    let mut path = Vec::new();
    let mut curr = predecessors.get_key_value(target)?.0;
    let mut rooted = false;
    // A well-formed map needs at most one step per entry
    for _ in 0..=predecessors.len() {
        path.push(curr.clone());
        match predecessors.get(curr.as_str())? {
            Some(prev) => curr = prev,
            None => {
                rooted = true;
                break;
            }
        }
    }

    path.reverse();
    if !rooted || path.first().map(Individual::as_str) != Some(source) {
        debug!(source, target, "predecessor chain does not reach the source");
        return None;
    }
    Some(AnnotatedPath::new(path))
}

/// Distances and canonical paths from one source, bound to its graph
#[derive(Debug, Clone)]
pub struct Lineage<'g> {
    graph: &'g FamilyGraph,
    source: IndividualId,
    tree: ShortestPathTree,
}

impl<'g> Lineage<'g> {
    /// Compute the shortest-path tree rooted at `source`.
    ///
    /// Fails with [`GraphError::UnknownIndividual`] if `source` was never added.
    pub fn compute(graph: &'g FamilyGraph, source: &str) -> GraphResult<Self> {
        let source_id = graph.require(source)?;
        let view = build_view(graph);
        let tree = shortest_path_tree(&view, source_id.as_u64())
            .ok_or_else(|| GraphError::UnknownIndividual(Individual::new(source)))?;

        info!(
            source,
            reached = tree.reached(),
            individuals = graph.individual_count(),
            "computed lineage distances"
        );

        Ok(Lineage {
            graph,
            source: source_id,
            tree,
        })
    }

    pub fn graph(&self) -> &'g FamilyGraph {
        self.graph
    }

    pub fn source(&self) -> &'g Individual {
        self.graph_name(self.source)
    }

    fn graph_name(&self, id: IndividualId) -> &'g Individual {
        self.graph.name_at(id)
    }

    /// Number of individuals reached, including the source
    pub fn reached(&self) -> usize {
        self.tree.reached()
    }

    /// Hop count from the source; `Ok(None)` when `target` is unreachable
    pub fn distance(&self, target: &str) -> GraphResult<Option<usize>> {
        let id = self.graph.require(target)?;
        Ok(self.tree.distance[id.index()])
    }

    /// Predecessor on the canonical path; `Ok(None)` for the source and unreachable targets
    pub fn predecessor(&self, target: &str) -> GraphResult<Option<&'g Individual>> {
        let id = self.graph.require(target)?;
        Ok(self.tree.predecessor[id.index()].map(|p| self.graph_name(IndividualId::new(p as u64))))
    }

    /// Canonical shortest path from the source to `target`.
    ///
    /// `Ok(None)` means no path exists; unknown names are an error.
    pub fn path_to(&self, target: &str) -> GraphResult<Option<AnnotatedPath>> {
        let id = self.graph.require(target)?;
        Ok(self.path_to_id(id))
    }

    fn path_to_id(&self, id: IndividualId) -> Option<AnnotatedPath> {
        self.tree.path_to(id.index()).map(|indices| {
            AnnotatedPath::new(
                indices
                    .into_iter()
                    .map(|idx| self.graph_name(IndividualId::new(idx as u64)).clone())
                    .collect(),
            )
        })
    }

    /// Canonical path of every reachable individual, in discovery order
    pub fn canonical_paths(&self) -> Vec<AnnotatedPath> {
        self.tree
            .order
            .iter()
            .filter_map(|&idx| self.path_to_id(IndividualId::new(idx as u64)))
            .collect()
    }

    pub fn distances(&self) -> DistanceMap {
        self.tree
            .order
            .iter()
            .filter_map(|&idx| {
                let d = self.tree.distance[idx]?;
                Some((self.graph_name(IndividualId::new(idx as u64)).clone(), d))
            })
            .collect()
    }

    pub fn predecessors(&self) -> PredecessorMap {
        self.tree
            .order
            .iter()
            .map(|&idx| {
                let name = self.graph_name(IndividualId::new(idx as u64)).clone();
                let prev = self.tree.predecessor[idx]
                    .map(|p| self.graph_name(IndividualId::new(p as u64)).clone());
                (name, prev)
            })
            .collect()
    }

    /// Whether the relation between `a` and `b` lies on a canonical path.
    ///
    /// True when either one is the other's predecessor. Unknown names are never direct.
    pub fn is_direct_relation(&self, a: &str, b: &str) -> bool {
        match (self.graph.id_of(a), self.graph.id_of(b)) {
            (Some(a), Some(b)) => {
                self.tree.predecessor[a.index()] == Some(b.index())
                    || self.tree.predecessor[b.index()] == Some(a.index())
            }
            _ => false,
        }
    }

    /// One row per individual, in registration order, for the rendering collaborator
    pub fn report(&self, marks: &DirectMarks) -> Vec<LineageEntry> {
        self.graph
            .individuals()
            .map(|(id, name)| LineageEntry {
                name: name.clone(),
                distance: self.tree.distance[id.index()],
                direct: marks.is_direct(name.as_str()),
            })
            .collect()
    }
}

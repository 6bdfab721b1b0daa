//! Direct-relative marking
//!
//! Marks every individual on one or more canonical paths. The marks are
//! handed to the rendering collaborator, which prefixes flagged names with `*`.

use super::AnnotatedPath;
use crate::graph::{FamilyGraph, Individual};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Set of individuals flagged as direct relatives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectMarks {
    members: IndexSet<Individual>,
}

impl DirectMarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag every individual on `path`
    pub fn mark(&mut self, path: &AnnotatedPath) {
        self.members.extend(path.iter().cloned());
    }

    pub fn is_direct(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Flagged individuals in first-marked order
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.members.iter()
    }

    /// Flag value for every individual in the graph, in registration order
    pub fn flags(&self, graph: &FamilyGraph) -> IndexMap<Individual, bool> {
        graph
            .individuals()
            .map(|(_, name)| (name.clone(), self.is_direct(name.as_str())))
            .collect()
    }
}

/// Union of the individuals on all given paths
pub fn annotate<'a, I>(paths: I) -> DirectMarks
where
    I: IntoIterator<Item = &'a AnnotatedPath>,
{
    let mut marks = DirectMarks::new();
    for path in paths {
        marks.mark(path);
    }
    marks
}

/// Per-individual row consumed by the rendering collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageEntry {
    pub name: Individual,
    /// `None` when the individual is not connected to the source
    pub distance: Option<usize>,
    pub direct: bool,
}

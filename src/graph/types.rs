//! Core type definitions for the family graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for an individual, assigned in registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct IndividualId(pub u64);

impl IndividualId {
    pub fn new(id: u64) -> Self {
        IndividualId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndividualId({})", self.0)
    }
}

impl From<u64> for IndividualId {
    fn from(id: u64) -> Self {
        IndividualId(id)
    }
}

/// An individual's identity (e.g., "Bob"), carried through unchanged as the display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Individual(String);

impl Individual {
    pub fn new(name: impl Into<String>) -> Self {
        Individual(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty or whitespace-only identities cannot name a person
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Individual {
    fn from(s: String) -> Self {
        Individual(s)
    }
}

impl From<&str> for Individual {
    fn from(s: &str) -> Self {
        Individual(s.to_string())
    }
}

impl From<&String> for Individual {
    fn from(s: &String) -> Self {
        Individual(s.clone())
    }
}

impl From<&Individual> for Individual {
    fn from(i: &Individual) -> Self {
        i.clone()
    }
}

impl Borrow<str> for Individual {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Individual {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Individual {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Individual {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

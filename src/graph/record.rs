//! Family record ("card") as supplied by the input collaborator
//!
//! One record describes one person together with their known parents and
//! children. Field names follow the genealogical card layout (`Name`,
//! `Father`, `Mother`, `Children`) so records deserialize from the same shape
//! the collaborator produces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Father", default, skip_serializing_if = "Option::is_none")]
    pub father: Option<String>,

    #[serde(rename = "Mother", default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<String>,

    #[serde(rename = "Children", default)]
    pub children: Vec<String>,
}

impl FamilyRecord {
    pub fn new(name: impl Into<String>) -> Self {
        FamilyRecord {
            name: name.into(),
            father: None,
            mother: None,
            children: Vec::new(),
        }
    }

    pub fn with_father(mut self, father: impl Into<String>) -> Self {
        self.father = Some(father.into());
        self
    }

    pub fn with_mother(mut self, mother: impl Into<String>) -> Self {
        self.mother = Some(mother.into());
        self
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Known parents, father first, skipping absent ones and the unknown marker
    pub fn known_parents<'a>(&'a self, unknown_marker: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        [self.father.as_deref(), self.mother.as_deref()]
            .into_iter()
            .flatten()
            .filter(move |p| *p != unknown_marker)
    }
}

use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::{AppError, Result};

/// A titled code sample with its explanation. Fields are kept exactly as
/// they were loaded; nothing here is escaped or trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub title: String,
    pub code: String,
    pub explanation: String,
}

/// A named bucket of snippets for one programming language.
/// The name is the group's identity within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageGroup {
    pub name: String,
    #[serde(default)]
    pub snippets: Vec<Snippet>,
}

/// Wire shape of the catalog resource: `{ "languages": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub languages: Vec<LanguageGroup>,
}

/// The full, immutable set of language groups. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    groups: Vec<LanguageGroup>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate language names.
    pub fn new(groups: Vec<LanguageGroup>) -> Result<Self> {
        for (i, group) in groups.iter().enumerate() {
            if groups[..i].iter().any(|g| g.name == group.name) {
                return Err(AppError::MalformedCatalog(format!(
                    "duplicate language '{}'",
                    group.name
                )));
            }
        }
        Ok(Self { groups })
    }

    /// Parse the JSON catalog document.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(text)?;
        Self::new(doc.languages)
    }

    pub fn groups(&self) -> &[LanguageGroup] {
        &self.groups
    }

    pub fn names(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.name.clone()).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&LanguageGroup> {
        self.groups.get(index)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

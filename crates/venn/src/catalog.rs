//! Named combinations of regions.
//!
//! An entry applies when every region it names is present in the diagram.
//! Presence is all that is checked: the regions do not have to overlap
//! geometrically.

use std::collections::HashSet;

use indexmap::IndexSet;

use venn_core::identifier::Id;

use crate::error::VennError;

/// The entries shipped with the tool, in display order.
const BUILTIN_ENTRIES: [(&str, &[&str]); 20] = [
    ("Strategy", &["intent"]),
    ("Cohesion", &["intent", "leadership"]),
    ("Leadership", &["leadership"]),
    ("Dexterity", &["intent", "leadership", "agile"]),
    ("Rigor", &["intent", "agile"]),
    ("Sequencing", &["intent", "robust"]),
    ("Pragmatism", &["intent", "robust", "agile"]),
    (
        "Strategic Readiness",
        &["intent", "leadership", "agile", "robust"],
    ),
    ("Commitment", &["leadership", "agile"]),
    ("Delivery Readiness", &["leadership", "agile", "robust"]),
    ("Activation", &["robust"]),
    ("Execution Mechanics", &["robust", "agile"]),
    ("Data-Driven Decision", &["agile"]),
    ("Fortitude", &["agile", "cultural", "robust"]),
    ("Engagement", &["agile", "cultural"]),
    ("Purpose", &["cultural"]),
    ("Dedication", &["cultural", "change"]),
    (
        "Organizational Realization",
        &["cultural", "change", "agile"],
    ),
    ("Focus", &["agile", "change"]),
    ("Sustainability", &["change"]),
];

/// A label and the regions whose presence makes it applicable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    name: String,
    required_ids: IndexSet<Id>,
}

impl CatalogEntry {
    /// Creates an entry. Repeated ids are kept once, in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Configuration`] if no id is given.
    pub fn new(
        name: impl Into<String>,
        required_ids: impl IntoIterator<Item = Id>,
    ) -> Result<Self, VennError> {
        let name = name.into();
        let required_ids: IndexSet<Id> = required_ids.into_iter().collect();
        if required_ids.is_empty() {
            return Err(VennError::Configuration(format!(
                "catalog entry `{name}` names no regions"
            )));
        }
        Ok(Self { name, required_ids })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required ids in the order the entry lists them.
    pub fn required_ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.required_ids.iter().copied()
    }

    pub fn is_applicable(&self, active_ids: &HashSet<Id>) -> bool {
        self.required_ids.iter().all(|id| active_ids.contains(id))
    }
}

/// Ordered table of [`CatalogEntry`] values.
#[derive(Debug, Clone)]
pub struct IntersectionCatalog {
    entries: Vec<CatalogEntry>,
}

impl IntersectionCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entries whose regions are all present, in catalog order.
    pub fn applicable_entries(&self, active_ids: &HashSet<Id>) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.is_applicable(active_ids))
            .collect()
    }

    /// Names of the applicable entries, in catalog order.
    ///
    /// ```
    /// # use std::collections::HashSet;
    /// # use venn::catalog::IntersectionCatalog;
    /// # use venn_core::identifier::Id;
    /// let catalog = IntersectionCatalog::default();
    /// let active: HashSet<Id> = [Id::new("intent"), Id::new("leadership")].into();
    ///
    /// assert_eq!(
    ///     catalog.applicable_labels(&active),
    ///     ["Strategy", "Cohesion", "Leadership"]
    /// );
    /// ```
    pub fn applicable_labels(&self, active_ids: &HashSet<Id>) -> Vec<&str> {
        self.applicable_entries(active_ids)
            .into_iter()
            .map(CatalogEntry::name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for IntersectionCatalog {
    fn default() -> Self {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|(name, ids)| CatalogEntry {
                name: (*name).to_string(),
                required_ids: ids.iter().map(|id| Id::new(id)).collect(),
            })
            .collect();
        Self { entries }
    }
}

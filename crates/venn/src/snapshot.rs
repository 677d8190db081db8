//! Immutable view of a session, as consumed by the exporters.

use std::collections::BTreeSet;

use log::debug;

use venn_core::{ellipse::Ellipse, geometry::Size, identifier::Id};

use crate::{
    catalog::IntersectionCatalog,
    interaction::{InteractionController, Selection},
    rating::Rating,
    regions::{RegionCounter, RegionKey},
};

/// An applicable catalog entry, detached from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicableEntry {
    name: String,
    required_ids: Vec<Id>,
}

impl ApplicableEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_ids(&self) -> &[Id] {
        &self.required_ids
    }
}

/// Everything an export needs, captured at one instant.
#[derive(Debug, Clone)]
pub struct DiagramSnapshot {
    canvas: Size,
    ellipses: Vec<Ellipse>,
    ratings: Vec<(Id, Option<Rating>)>,
    selection: Selection,
    regions: BTreeSet<RegionKey>,
    applicable: Vec<ApplicableEntry>,
}

impl DiagramSnapshot {
    /// Captures the controller's state, counting regions with `counter`.
    pub fn capture(
        controller: &InteractionController,
        counter: &RegionCounter,
        catalog: &IntersectionCatalog,
    ) -> Self {
        let model = controller.model();
        let ellipses: Vec<Ellipse> = model.iter().cloned().collect();
        let ratings = ellipses
            .iter()
            .map(|e| (e.id(), controller.ratings().get(e.id())))
            .collect();

        let regions = counter.regions(&ellipses);
        let applicable = catalog
            .applicable_entries(&model.active_ids())
            .into_iter()
            .map(|entry| ApplicableEntry {
                name: entry.name().to_string(),
                required_ids: entry.required_ids().collect(),
            })
            .collect::<Vec<_>>();

        debug!(
            ellipses = ellipses.len(),
            regions = regions.len(),
            applicable = applicable.len();
            "Snapshot captured"
        );

        Self {
            canvas: counter.canvas(),
            ellipses,
            ratings,
            selection: controller.selection(),
            regions,
            applicable,
        }
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn ellipses(&self) -> &[Ellipse] {
        &self.ellipses
    }

    /// Ratings in ellipse order; `None` means unset.
    pub fn ratings(&self) -> &[(Id, Option<Rating>)] {
        &self.ratings
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<&Ellipse> {
        let id = self.selection.id()?;
        self.ellipses.iter().find(|e| e.id() == id)
    }

    pub fn regions(&self) -> &BTreeSet<RegionKey> {
        &self.regions
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn applicable(&self) -> &[ApplicableEntry] {
        &self.applicable
    }

    /// Single-line label of the region `id`, or the id itself when the
    /// region is unknown or unlabeled.
    pub fn label_for(&self, id: Id) -> String {
        self.ellipses
            .iter()
            .find(|e| e.id() == id)
            .map(Ellipse::flat_label)
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| id.to_string())
    }
}

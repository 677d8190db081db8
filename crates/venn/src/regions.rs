//! Sampled counting of distinct overlap regions.
//!
//! The canvas is sampled on a regular grid that includes both edges. Each
//! sample point yields the set of ellipses containing it; every non-empty set
//! is a region, identified by its [`RegionKey`]. The count is the number of
//! distinct keys.
//!
//! Sampling is approximate: slivers thinner than the grid step can be missed.
//! Results are deterministic for a given input.
//!
//! # Example
//!
//! ```
//! # use venn::regions::count_distinct_regions;
//! # use venn_core::{ellipse::Ellipse, geometry::Point};
//! let left = Ellipse::new("left", Point::new(300.0, 300.0), 120.0, 100.0);
//! let right = Ellipse::new("right", Point::new(450.0, 300.0), 120.0, 100.0);
//!
//! // left only, right only, and both
//! assert_eq!(count_distinct_regions([&left, &right], None), 3);
//! ```

use std::{
    collections::{BTreeSet, HashSet},
    fmt,
};

use log::{debug, warn};

use venn_core::{
    ellipse::Ellipse,
    geometry::{Point, Size},
    identifier::Id,
};

/// Grid spacing used when none, or an unusable one, is given.
pub const DEFAULT_STEP: f32 = 2.0;

/// Canvas sampled by [`count_distinct_regions`].
pub const DEFAULT_CANVAS: Size = Size::new(800.0, 600.0);

/// Canonical, sorted and de-duplicated set of ids sharing a sample point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionKey(Vec<Id>);

impl RegionKey {
    pub fn new(ids: impl IntoIterator<Item = Id>) -> Self {
        let mut ids: Vec<Id> = ids.into_iter().collect();
        ids.sort();
        ids.dedup();
        Self(ids)
    }

    pub fn ids(&self) -> &[Id] {
        &self.0
    }

    pub fn contains(&self, id: Id) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, id) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

/// Number of samples along an extent, both ends included.
fn sample_count(extent: f32, step: f32) -> usize {
    if extent.is_finite() && extent >= 0.0 {
        (extent / step).floor() as usize + 1
    } else {
        0
    }
}

/// Grid sampler over a fixed canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionCounter {
    canvas: Size,
    step: f32,
}

impl RegionCounter {
    /// Creates a counter. A non-finite or non-positive `step` falls back to
    /// [`DEFAULT_STEP`].
    pub fn new(canvas: Size, step: f32) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            warn!(step; "Unusable sampling step, using the default");
            DEFAULT_STEP
        };
        Self { canvas, step }
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Every distinct region present on the sampled grid, sorted.
    pub fn regions<'a>(&self, ellipses: impl IntoIterator<Item = &'a Ellipse>) -> BTreeSet<RegionKey> {
        let ellipses: Vec<&Ellipse> = ellipses
            .into_iter()
            .filter(|e| !e.is_degenerate())
            .collect();
        if ellipses.is_empty() {
            return BTreeSet::new();
        }

        let columns = sample_count(self.canvas.width(), self.step);
        let rows = sample_count(self.canvas.height(), self.step);

        // Membership sets as indices into `ellipses`, in ellipse order
        let mut seen: HashSet<Vec<usize>> = HashSet::new();
        let mut members: Vec<usize> = Vec::with_capacity(ellipses.len());

        for column in 0..columns {
            let x = column as f32 * self.step;
            for row in 0..rows {
                let point = Point::new(x, row as f32 * self.step);

                members.clear();
                members.extend(
                    ellipses
                        .iter()
                        .enumerate()
                        .filter(|(_, ellipse)| ellipse.contains(point))
                        .map(|(index, _)| index),
                );

                if !members.is_empty() && !seen.contains(members.as_slice()) {
                    seen.insert(members.clone());
                }
            }
        }

        let regions: BTreeSet<RegionKey> = seen
            .into_iter()
            .map(|indices| RegionKey::new(indices.into_iter().map(|i| ellipses[i].id())))
            .collect();

        debug!(
            samples = columns * rows,
            ellipses = ellipses.len(),
            regions = regions.len();
            "Regions sampled"
        );
        regions
    }

    /// Number of distinct non-empty regions.
    pub fn count<'a>(&self, ellipses: impl IntoIterator<Item = &'a Ellipse>) -> usize {
        self.regions(ellipses).len()
    }
}

impl Default for RegionCounter {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS, DEFAULT_STEP)
    }
}

/// Counts distinct regions on the default 800 by 600 canvas.
///
/// `step` defaults to [`DEFAULT_STEP`].
pub fn count_distinct_regions<'a>(
    ellipses: impl IntoIterator<Item = &'a Ellipse>,
    step: Option<f32>,
) -> usize {
    RegionCounter::new(DEFAULT_CANVAS, step.unwrap_or(DEFAULT_STEP)).count(ellipses)
}

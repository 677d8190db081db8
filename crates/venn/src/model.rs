//! The session's fixed set of ellipses and their mutation rules.
//!
//! Geometry is authoritative. After every position or radius change the
//! qualitative fields of the touched ellipse are read back from its geometry
//! through the [`CoordinateMapper`]. Selector edits go the other way: the
//! selected value is turned into geometry first and then stored as chosen.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, trace};

use venn_core::{
    ellipse::Ellipse,
    geometry::Point,
    identifier::Id,
    scale::{RelativeValue, Stage, StageEdge},
};

use crate::{error::VennError, mapping::CoordinateMapper};

/// Ordered collection of the session's ellipses.
///
/// Iteration follows insertion order, which is the configuration order.
#[derive(Debug, Clone)]
pub struct EllipseModel {
    ellipses: IndexMap<Id, Ellipse>,
    mapper: CoordinateMapper,
}

impl EllipseModel {
    /// Creates the model, refreshing every ellipse's qualitative fields.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Configuration`] if two ellipses share an id.
    pub fn new(ellipses: Vec<Ellipse>, mapper: CoordinateMapper) -> Result<Self, VennError> {
        let mut map = IndexMap::with_capacity(ellipses.len());
        for mut ellipse in ellipses {
            let id = ellipse.id();
            if map.contains_key(&id) {
                return Err(VennError::Configuration(format!(
                    "region `{id}` is defined more than once"
                )));
            }
            // Deserialized records bypass the radius floor
            ellipse.set_radii(ellipse.radius_x(), ellipse.radius_y());
            refresh_derived(&mapper, &mut ellipse);
            map.insert(id, ellipse);
        }

        debug!(regions = map.len(); "Ellipse model created");
        Ok(Self {
            ellipses: map,
            mapper,
        })
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn get(&self, id: Id) -> Option<&Ellipse> {
        self.ellipses.get(&id)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.ellipses.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ellipse> {
        self.ellipses.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.ellipses.keys().copied()
    }

    /// Ids of every present region, for catalog queries.
    pub fn active_ids(&self) -> HashSet<Id> {
        self.ellipses.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ellipses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ellipses.is_empty()
    }

    fn get_mut(&mut self, id: Id) -> Result<&mut Ellipse, VennError> {
        self.ellipses.get_mut(&id).ok_or(VennError::UnknownRegion(id))
    }

    /// Moves the center of `id`. No clamping to the canvas is applied.
    pub fn set_position(&mut self, id: Id, center: Point) -> Result<(), VennError> {
        let ellipse = self
            .ellipses
            .get_mut(&id)
            .ok_or(VennError::UnknownRegion(id))?;
        ellipse.set_center(center);
        refresh_derived(&self.mapper, ellipse);
        trace!(id:% = id, x = center.x(), y = center.y(); "Position set");
        Ok(())
    }

    /// Sets both radii of `id`, each floored at the minimum radius.
    pub fn set_radii(&mut self, id: Id, radius_x: f32, radius_y: f32) -> Result<(), VennError> {
        let ellipse = self
            .ellipses
            .get_mut(&id)
            .ok_or(VennError::UnknownRegion(id))?;
        ellipse.set_radii(radius_x, radius_y);
        refresh_derived(&self.mapper, ellipse);
        trace!(id:% = id, radius_x = ellipse.radius_x(), radius_y = ellipse.radius_y(); "Radii set");
        Ok(())
    }

    /// Places `id` horizontally on a relative value anchor.
    pub fn set_relative_value(&mut self, id: Id, value: RelativeValue) -> Result<(), VennError> {
        let x = self.mapper.x_pixel(value);
        let ellipse = self.get_mut(id)?;
        ellipse.set_center(Point::new(x, ellipse.center_y()));
        ellipse.set_relative_value(Some(value));
        debug!(id:% = id, value:% = value; "Relative value set");
        Ok(())
    }

    /// Moves one edge of the stage span of `id` to `stage`.
    ///
    /// The other edge keeps its current stage, read from the geometry with
    /// the nearest-anchor rule if it is unset. A pair that ends up reversed
    /// is normalized so the start has the smaller pixel value.
    pub fn set_stage(&mut self, id: Id, edge: StageEdge, stage: Stage) -> Result<(), VennError> {
        let (start, end) = self.current_stage_span(id)?;
        let (start, end) = match edge {
            StageEdge::Start => (stage, end),
            StageEdge::End => (start, stage),
        };
        let (start, end) = self.mapper.pixel_ordered(start, end);
        let (center_y, radius_y) = self.mapper.stage_span(start, end);

        let ellipse = self.get_mut(id)?;
        ellipse.set_vertical(center_y, radius_y);
        ellipse.set_stage_span(Some(start), Some(end));
        debug!(id:% = id, edge:% = edge, start:% = start, end:% = end; "Stage span set");
        Ok(())
    }

    /// Text form of [`EllipseModel::set_relative_value`].
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Configuration`] for unknown text, leaving the
    /// ellipse untouched.
    pub fn set_qualitative_x(&mut self, id: Id, text: &str) -> Result<(), VennError> {
        let value = self.mapper.parse_relative_value(text)?;
        self.set_relative_value(id, value)
    }

    /// Text form of [`EllipseModel::set_stage`].
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Configuration`] for unknown text, leaving the
    /// ellipse untouched.
    pub fn set_qualitative_stage(
        &mut self,
        id: Id,
        edge: StageEdge,
        text: &str,
    ) -> Result<(), VennError> {
        let stage = self.mapper.parse_stage(text)?;
        self.set_stage(id, edge, stage)
    }

    /// The stored stage pair of `id`, with unset edges filled in from the
    /// nearest anchors of its geometry. The start always has the smaller
    /// pixel value.
    pub fn current_stage_span(&self, id: Id) -> Result<(Stage, Stage), VennError> {
        let ellipse = self.get(id).ok_or(VennError::UnknownRegion(id))?;
        let start = ellipse
            .stage_start()
            .unwrap_or_else(|| self.mapper.nearest_stage(ellipse.top()));
        let end = ellipse
            .stage_end()
            .unwrap_or_else(|| self.mapper.nearest_stage(ellipse.bottom()));
        Ok(self.mapper.pixel_ordered(start, end))
    }

    /// The relative value of `id`, or the nearest one if it is unset.
    pub fn current_relative_value(&self, id: Id) -> Result<RelativeValue, VennError> {
        let ellipse = self.get(id).ok_or(VennError::UnknownRegion(id))?;
        Ok(ellipse
            .relative_value()
            .unwrap_or_else(|| self.mapper.nearest_relative_value(ellipse.center_x())))
    }
}

/// Re-reads the qualitative fields of `ellipse` from its geometry.
fn refresh_derived(mapper: &CoordinateMapper, ellipse: &mut Ellipse) {
    ellipse.set_relative_value(mapper.relative_value_at(ellipse.center_x()));
    let (start, end) = mapper.stages_between(ellipse.top(), ellipse.bottom());
    ellipse.set_stage_span(start, end);
}

//! Event-driven selection, drag and resize handling.
//!
//! [`InteractionController`] is the only writer of the session state: the
//! [`EllipseModel`], the [`Ratings`] and the current [`Selection`]. Every
//! input, pointer or form control alike, arrives as an [`Event`] and
//! [`InteractionController::handle`] reports what it changed as an
//! [`Outcome`].
//!
//! # Selection
//!
//! ```text
//!            ClickEllipse(id)
//!   Idle ─────────────────────────▶ Selected(id)
//!    ▲                                │   ▲
//!    │ ClickBackground                │   │ ClickEllipse(other)
//!    └────────────────────────────────┘   │ ClickHandle, Drag, Resize, Release
//!                                         └──────────────
//! ```
//!
//! Drag and resize gestures act on the selected ellipse only. A release
//! commits whatever the gesture did; there is no cancel. While an ellipse is
//! selected no other ellipse changes position, so position panel entries for
//! other ellipses are ignored until the selection is cleared.

use log::{debug, info, warn};

use venn_core::{
    geometry::Point,
    identifier::Id,
    scale::{RelativeValue, Stage, StageEdge},
};
use venn_script::Command;

use crate::{
    error::VennError,
    model::EllipseModel,
    rating::{Rating, Ratings},
};

/// Which ellipse, if any, is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected(Id),
}

impl Selection {
    pub fn id(self) -> Option<Id> {
        match self {
            Self::Idle => None,
            Self::Selected(id) => Some(id),
        }
    }
}

/// One discrete input.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Click on an ellipse.
    ClickEllipse(Id),
    /// Click on empty canvas.
    ClickBackground,
    /// Click on the resize handle overlay.
    ClickHandle,
    /// Pointer drag; the selected ellipse's center follows the pointer.
    Drag(Point),
    /// Pointer release.
    Release,
    /// Resize gesture with transient scale factors relative to the stored radii.
    Resize { scale_x: f32, scale_y: f32 },
    /// Relative value selector, as entered.
    SelectRelativeValue { id: Id, value: String },
    /// Stage selector for one edge of the span, as entered.
    SelectStage {
        id: Id,
        edge: StageEdge,
        stage: String,
    },
    SetRating { id: Id, value: i32 },
    ClearRating(Id),
    /// Position panel entry. Applies while idle or to the selected ellipse,
    /// and never changes the selection.
    Place { id: Id, position: Point },
}

impl From<&Command> for Event {
    fn from(command: &Command) -> Self {
        match command {
            Command::Click { id } => Self::ClickEllipse(id.get()),
            Command::Background => Self::ClickBackground,
            Command::Handle => Self::ClickHandle,
            Command::Drag { x, y } => Self::Drag(Point::new(*x, *y)),
            Command::Release => Self::Release,
            Command::Resize { scale_x, scale_y } => Self::Resize {
                scale_x: *scale_x,
                scale_y: *scale_y,
            },
            Command::Value { id, value } => Self::SelectRelativeValue {
                id: id.get(),
                value: value.inner().clone(),
            },
            Command::Stage { id, edge, stage } => Self::SelectStage {
                id: id.get(),
                edge: *edge,
                stage: stage.inner().clone(),
            },
            Command::Rate { id, rating } => Self::SetRating {
                id: id.get(),
                value: rating.get(),
            },
            Command::Unrate { id } => Self::ClearRating(id.get()),
            Command::Place { id, x, y } => Self::Place {
                id: id.get(),
                position: Point::new(*x, *y),
            },
        }
    }
}

/// Why an event changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A gesture arrived with no ellipse selected.
    NothingSelected,
    /// A click named an ellipse that is not in the session.
    UnknownRegion(Id),
    /// A placement named an ellipse other than the selected one.
    OtherSelected(Id),
}

/// What an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    SelectionChanged { from: Selection, to: Selection },
    /// The event was valid but had no effect.
    Unchanged,
    Moved { id: Id, center: Point },
    Resized { id: Id, radius_x: f32, radius_y: f32 },
    /// A release; carries the ellipse the gesture applied to.
    Committed(Option<Id>),
    /// `fell_back` is set when the entered text was unknown and the nearest
    /// anchor was used instead.
    RelativeValueSet {
        id: Id,
        value: RelativeValue,
        fell_back: bool,
    },
    StageSpanSet {
        id: Id,
        start: Stage,
        end: Stage,
        fell_back: bool,
    },
    RatingSet { id: Id, rating: Rating },
    RatingCleared { id: Id, previous: Option<Rating> },
    Placed { id: Id, center: Point },
    Ignored(IgnoreReason),
}

/// Owner of the session state and the selection state machine.
#[derive(Debug, Clone)]
pub struct InteractionController {
    model: EllipseModel,
    ratings: Ratings,
    selection: Selection,
}

impl InteractionController {
    pub fn new(model: EllipseModel) -> Self {
        Self {
            model,
            ratings: Ratings::new(),
            selection: Selection::Idle,
        }
    }

    pub fn model(&self) -> &EllipseModel {
        &self.model
    }

    pub fn ratings(&self) -> &Ratings {
        &self.ratings
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Applies one event.
    ///
    /// # Errors
    ///
    /// Selector and rating events naming an unknown region fail with
    /// [`VennError::UnknownRegion`]; out of range ratings fail with
    /// [`VennError::InvalidRating`]. Failed events change nothing.
    pub fn handle(&mut self, event: Event) -> Result<Outcome, VennError> {
        debug!(event:?; "Handling event");
        let outcome = match event {
            Event::ClickEllipse(id) => self.click_ellipse(id),
            Event::ClickBackground => self.select(Selection::Idle),
            Event::ClickHandle => Outcome::Unchanged,
            Event::Drag(position) => self.drag(position)?,
            Event::Release => Outcome::Committed(self.selection.id()),
            Event::Resize { scale_x, scale_y } => self.resize(scale_x, scale_y)?,
            Event::SelectRelativeValue { id, value } => self.select_relative_value(id, &value)?,
            Event::SelectStage { id, edge, stage } => self.select_stage(id, edge, &stage)?,
            Event::SetRating { id, value } => {
                self.ensure_known(id)?;
                let rating = self.ratings.set(id, value)?;
                Outcome::RatingSet { id, rating }
            }
            Event::ClearRating(id) => {
                self.ensure_known(id)?;
                let previous = self.ratings.clear(id);
                Outcome::RatingCleared { id, previous }
            }
            Event::Place { id, position } => self.place(id, position)?,
        };

        if let Outcome::Ignored(reason) = &outcome {
            info!(reason:?; "Event ignored");
        }
        Ok(outcome)
    }

    fn ensure_known(&self, id: Id) -> Result<(), VennError> {
        if self.model.contains(id) {
            Ok(())
        } else {
            Err(VennError::UnknownRegion(id))
        }
    }

    fn select(&mut self, to: Selection) -> Outcome {
        let from = self.selection;
        if from == to {
            return Outcome::Unchanged;
        }
        self.selection = to;
        debug!(from:?, to:?; "Selection changed");
        Outcome::SelectionChanged { from, to }
    }

    fn click_ellipse(&mut self, id: Id) -> Outcome {
        if !self.model.contains(id) {
            return Outcome::Ignored(IgnoreReason::UnknownRegion(id));
        }
        self.select(Selection::Selected(id))
    }

    fn drag(&mut self, position: Point) -> Result<Outcome, VennError> {
        let Selection::Selected(id) = self.selection else {
            return Ok(Outcome::Ignored(IgnoreReason::NothingSelected));
        };
        self.model.set_position(id, position)?;
        Ok(Outcome::Moved {
            id,
            center: position,
        })
    }

    fn place(&mut self, id: Id, position: Point) -> Result<Outcome, VennError> {
        match self.selection {
            Selection::Selected(selected) if selected != id => {
                return Ok(Outcome::Ignored(IgnoreReason::OtherSelected(selected)));
            }
            _ => {}
        }
        self.model.set_position(id, position)?;
        Ok(Outcome::Placed {
            id,
            center: position,
        })
    }

    /// Scales the stored radii; the gesture's scale is not kept.
    fn resize(&mut self, scale_x: f32, scale_y: f32) -> Result<Outcome, VennError> {
        let Selection::Selected(id) = self.selection else {
            return Ok(Outcome::Ignored(IgnoreReason::NothingSelected));
        };
        let (radius_x, radius_y) = match self.model.get(id) {
            Some(ellipse) => (ellipse.radius_x() * scale_x, ellipse.radius_y() * scale_y),
            None => return Err(VennError::UnknownRegion(id)),
        };
        self.model.set_radii(id, radius_x, radius_y)?;

        let (radius_x, radius_y) = self
            .model
            .get(id)
            .map(|e| (e.radius_x(), e.radius_y()))
            .unwrap_or((radius_x, radius_y));
        Ok(Outcome::Resized {
            id,
            radius_x,
            radius_y,
        })
    }

    fn select_relative_value(&mut self, id: Id, text: &str) -> Result<Outcome, VennError> {
        self.ensure_known(id)?;
        let (value, fell_back) = match self.model.mapper().parse_relative_value(text) {
            Ok(value) => (value, false),
            Err(err) => {
                let nearest = self.model.current_relative_value(id)?;
                warn!(id:% = id, err:% = err, fallback:% = nearest; "Using nearest relative value");
                (nearest, true)
            }
        };
        self.model.set_relative_value(id, value)?;
        Ok(Outcome::RelativeValueSet {
            id,
            value,
            fell_back,
        })
    }

    fn select_stage(&mut self, id: Id, edge: StageEdge, text: &str) -> Result<Outcome, VennError> {
        self.ensure_known(id)?;
        let (stage, fell_back) = match self.model.mapper().parse_stage(text) {
            Ok(stage) => (stage, false),
            Err(err) => {
                let (start, end) = self.model.current_stage_span(id)?;
                let nearest = match edge {
                    StageEdge::Start => start,
                    StageEdge::End => end,
                };
                warn!(id:% = id, err:% = err, fallback:% = nearest; "Using nearest stage");
                (nearest, true)
            }
        };
        self.model.set_stage(id, edge, stage)?;
        let (start, end) = self.model.current_stage_span(id)?;
        Ok(Outcome::StageSpanSet {
            id,
            start,
            end,
            fell_back,
        })
    }
}

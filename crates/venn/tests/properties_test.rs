//! Property tests for the axis mapping, the region counter and the
//! interaction controller.

use float_cmp::approx_eq;
use proptest::prelude::*;

use venn::{
    DiagramBuilder, Event, Selection,
    config::AxesConfig,
    ellipse::{Ellipse, MIN_RADIUS},
    geometry::{Point, Size},
    identifier::Id,
    mapping::CoordinateMapper,
    regions::RegionCounter,
    scale::{Axis, QualitativeValue, RelativeValue, Stage, StageEdge},
};

const IDS: [&str; 6] = ["cultural", "leadership", "agile", "change", "robust", "intent"];

fn counter() -> RegionCounter {
    // Coarser than the default to keep each case cheap
    RegionCounter::new(Size::new(800.0, 600.0), 10.0)
}

fn ellipse_strategy() -> impl Strategy<Value = Ellipse> {
    (
        0usize..IDS.len(),
        0.0f32..800.0,
        0.0f32..600.0,
        20.0f32..250.0,
        20.0f32..250.0,
    )
        .prop_map(|(id, x, y, rx, ry)| Ellipse::new(IDS[id], Point::new(x, y), rx, ry))
}

fn event_strategy() -> impl Strategy<Value = Event> {
    let id = (0usize..IDS.len() + 1).prop_map(|i| Id::new(IDS.get(i).copied().unwrap_or("ghost")));
    prop_oneof![
        id.clone().prop_map(Event::ClickEllipse),
        Just(Event::ClickBackground),
        Just(Event::ClickHandle),
        Just(Event::Release),
        (-100.0f32..900.0, -100.0f32..700.0).prop_map(|(x, y)| Event::Drag(Point::new(x, y))),
        (0.0f32..3.0, 0.0f32..3.0).prop_map(|(scale_x, scale_y)| Event::Resize { scale_x, scale_y }),
        (id, -100.0f32..900.0, -100.0f32..700.0).prop_map(|(id, x, y)| Event::Place {
            id,
            position: Point::new(x, y),
        }),
    ]
}

/// Every qualitative value maps to its anchor and reads back as itself.
fn check_round_trip(value: QualitativeValue) -> Result<(), TestCaseError> {
    let mapper = CoordinateMapper::new(&AxesConfig::default()).expect("default axes");
    let axis = match value {
        QualitativeValue::Relative(_) => Axis::X,
        QualitativeValue::Stage(_) => Axis::Stage,
    };
    prop_assert_eq!(mapper.to_qualitative(axis, mapper.to_pixel(value)), Some(value));
    Ok(())
}

/// Region counts do not depend on the order of the ellipses.
fn check_count_is_order_independent(ellipses: Vec<Ellipse>) -> Result<(), TestCaseError> {
    let mut reversed = ellipses.clone();
    reversed.reverse();
    prop_assert_eq!(counter().regions(&ellipses), counter().regions(&reversed));
    Ok(())
}

/// A copy of an ellipse under another id never adds a region.
fn check_identical_copy_counts_one(ellipse: Ellipse) -> Result<(), TestCaseError> {
    let copy = Ellipse::new(
        "copy",
        ellipse.center(),
        ellipse.radius_x(),
        ellipse.radius_y(),
    );
    let alone = counter().count([&ellipse]);
    prop_assert!(alone <= 1);
    prop_assert_eq!(counter().count([&ellipse, &copy]), alone);
    Ok(())
}

/// Selection is always one known ellipse or nothing, no ellipse but the
/// selected one changes while a selection is held, and radii never drop
/// below the floor.
fn check_selection_and_radii(events: Vec<Event>) -> Result<(), TestCaseError> {
    let builder = DiagramBuilder::default();
    let mut session = builder.session().expect("default session");

    for event in events {
        let held = session.selection().id();
        let before: Vec<Ellipse> = session.model().iter().cloned().collect();
        let _ = session.handle(event);

        if let Some(held) = held {
            for (old, new) in before.iter().zip(session.model().iter()) {
                if old.id() != held {
                    prop_assert_eq!(old, new);
                }
            }
        }

        if let Selection::Selected(id) = session.selection() {
            prop_assert!(session.model().contains(id));
        }
        for ellipse in session.model().iter() {
            prop_assert!(ellipse.radius_x() >= MIN_RADIUS);
            prop_assert!(ellipse.radius_y() >= MIN_RADIUS);
        }
    }
    Ok(())
}

/// Selecting a start and an end stage in any order stores a pair whose start
/// has the smaller pixel value.
fn check_stage_pair_order(region: &str, first: Stage, second: Stage) -> Result<(), TestCaseError> {
    let builder = DiagramBuilder::default();
    let mut session = builder.session().expect("default session");
    let id = Id::new(region);

    for (edge, stage) in [(StageEdge::Start, first), (StageEdge::End, second)] {
        session
            .handle(Event::SelectStage {
                id,
                edge,
                stage: stage.to_string(),
            })
            .expect("known region");
    }

    let ellipse = session.model().get(id).expect("known region");
    let start = ellipse.stage_start().expect("start set");
    let end = ellipse.stage_end().expect("end set");
    let mapper = session.model().mapper();
    prop_assert!(mapper.stage_pixel(start) <= mapper.stage_pixel(end));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn relative_value_round_trip(index in 0usize..3) {
        check_round_trip(QualitativeValue::Relative(RelativeValue::ALL[index]))?;
    }

    #[test]
    fn stage_round_trip(index in 0usize..5) {
        check_round_trip(QualitativeValue::Stage(Stage::ALL[index]))?;
    }

    #[test]
    fn nearest_is_within_anchor_range(x in -1000.0f32..2000.0) {
        let mapper = CoordinateMapper::new(&AxesConfig::default()).expect("default axes");
        let nearest = mapper.x_pixel(mapper.nearest_relative_value(x));
        let distance = (nearest - x).abs();
        for value in RelativeValue::ALL {
            prop_assert!(distance <= (mapper.x_pixel(value) - x).abs());
        }
    }

    #[test]
    fn count_is_order_independent(ellipses in prop::collection::vec(ellipse_strategy(), 0..5)) {
        check_count_is_order_independent(ellipses)?;
    }

    #[test]
    fn identical_copy_counts_one(ellipse in ellipse_strategy()) {
        check_identical_copy_counts_one(ellipse)?;
    }

    #[test]
    fn far_apart_pair_counts_two(y in 100.0f32..500.0, r in 20.0f32..90.0) {
        let left = Ellipse::new("left", Point::new(150.0, y), r, r);
        let right = Ellipse::new("right", Point::new(650.0, y), r, r);
        prop_assert_eq!(counter().count([&left, &right]), 2);
    }

    #[test]
    fn stored_stage_pair_is_pixel_ordered(
        region in 0usize..IDS.len(),
        first in 0usize..5,
        second in 0usize..5,
    ) {
        check_stage_pair_order(IDS[region], Stage::ALL[first], Stage::ALL[second])?;
    }

    #[test]
    fn selection_and_radii_invariants(events in prop::collection::vec(event_strategy(), 0..40)) {
        check_selection_and_radii(events)?;
    }
}

#[test]
fn test_mapping_is_monotonic() {
    let mapper = CoordinateMapper::new(&AxesConfig::default()).expect("default axes");

    let xs: Vec<f32> = RelativeValue::ALL.iter().map(|v| mapper.x_pixel(*v)).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]));

    // The stage axis runs bottom to top
    let ys: Vec<f32> = Stage::ALL.iter().map(|s| mapper.stage_pixel(*s)).collect();
    assert!(ys.windows(2).all(|w| w[0] > w[1]));
    assert!(approx_eq!(f32, ys[0], 600.0));
}

#[test]
fn test_disjoint_pair_counts_two() {
    let first = Ellipse::new("first", Point::new(100.0, 100.0), 50.0, 50.0);
    let second = Ellipse::new("second", Point::new(700.0, 500.0), 50.0, 50.0);

    assert_eq!(RegionCounter::default().count([&first, &second]), 2);
}

#[test]
fn test_count_is_deterministic() {
    let builder = DiagramBuilder::default();
    let session = builder.session().expect("session");
    let first = builder.snapshot(&session);
    let second = builder.snapshot(&session);
    assert_eq!(first.regions(), second.regions());
}

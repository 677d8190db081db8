//! Semantic checks of a parsed script against a diagram's regions.

use log::debug;

use venn_core::{
    identifier::Id,
    scale::{RelativeValue, Stage},
};

use crate::{
    command::Command,
    error::{Diagnostic, ErrorCode},
    span::Spanned,
};

/// Ratings accepted by the diagram.
const RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

fn unknown_region(id: &Spanned<Id>, known_ids: &[Id]) -> Diagnostic {
    let mut names: Vec<String> = known_ids.iter().map(|id| id.to_name()).collect();
    names.sort();

    Diagnostic::warning(format!("unknown region `{}`", id.inner()))
        .with_code(ErrorCode::E200)
        .with_label(id.span(), "not a region of this diagram")
        .with_help(format!(
            "the command is ignored; known regions: {}",
            names.join(", ")
        ))
}

fn unknown_value(value: &Spanned<String>, axis: &str, expected: &str) -> Diagnostic {
    Diagnostic::warning(format!("`{}` is not a {axis}", value.inner()))
        .with_code(ErrorCode::E201)
        .with_label(value.span(), ErrorCode::E201.description())
        .with_help(format!(
            "expected {expected}; the value nearest to the region's current position is used"
        ))
}

/// Collect warnings for commands that reference unknown regions, values off
/// the axes, or ratings outside `1..=5`.
pub fn validate(commands: &[Spanned<Command>], known_ids: &[Id]) -> Vec<Diagnostic> {
    let mut warnings = Vec::new();

    for command in commands {
        if let Some(id) = command.inner().region() {
            if !known_ids.contains(id.inner()) {
                warnings.push(unknown_region(id, known_ids));
                // Nothing else about the command matters once its region is unknown
                continue;
            }
        }

        match command.inner() {
            Command::Value { value, .. } if value.inner().parse::<RelativeValue>().is_err() => {
                warnings.push(unknown_value(value, "relative value", "Low, Medium or High"));
            }
            Command::Stage { stage, .. } if stage.inner().parse::<Stage>().is_err() => {
                warnings.push(unknown_value(
                    stage,
                    "stage",
                    "Intention, Activation, Execution, \"Eval + Adapt\" or Impact",
                ));
            }
            Command::Rate { rating, .. } if !RATING_RANGE.contains(rating.inner()) => {
                warnings.push(
                    Diagnostic::warning(format!("rating {} is outside 1-5", rating.inner()))
                        .with_code(ErrorCode::E202)
                        .with_label(rating.span(), ErrorCode::E202.description())
                        .with_help("the rating is rejected and the previous one kept"),
                );
            }
            _ => {}
        }
    }

    debug!(warnings = warnings.len(); "Script validated");
    warnings
}

//! Qualitative axis values.
//!
//! Two semantic axes span the canvas:
//!
//! - the horizontal *relative value* axis with three points ([`RelativeValue`]);
//! - the vertical *stage* axis with five chronologically ordered points ([`Stage`]).
//!
//! Values parse from user-facing text case-insensitively, ignoring spaces and
//! punctuation, so `"Eval + Adapt"`, `"eval_adapt"` and `"EvalAdapt"` all name
//! the same stage. The pixel placement of each value is not defined here; see
//! the coordinate mapper in the `venn` crate.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when text does not name a point on an axis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a value of the {axis} axis")]
pub struct UnknownValueError {
    axis: Axis,
    value: String,
}

impl UnknownValueError {
    pub fn new(axis: Axis, value: impl Into<String>) -> Self {
        Self {
            axis,
            value: value.into(),
        }
    }

    /// The axis the value was looked up on.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The rejected text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One of the two qualitative axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal relative-value axis.
    X,
    /// Vertical stage axis.
    #[serde(alias = "y")]
    Stage,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "relative value"),
            Axis::Stage => write!(f, "stage"),
        }
    }
}

/// Three-point relative value scale on the X axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelativeValue {
    Low,
    Medium,
    High,
}

impl RelativeValue {
    /// All values in ascending order.
    pub const ALL: [RelativeValue; 3] = [Self::Low, Self::Medium, Self::High];

    /// Short tick label used on the canvas.
    pub fn tick_label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Med",
            Self::High => "High",
        }
    }
}

/// Five-point stage scale on the vertical axis, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Intention,
    Activation,
    Execution,
    EvalAdapt,
    Impact,
}

impl Stage {
    /// All stages, earliest first.
    pub const ALL: [Stage; 5] = [
        Self::Intention,
        Self::Activation,
        Self::Execution,
        Self::EvalAdapt,
        Self::Impact,
    ];
}

/// Which end of an ellipse's stage span a selector edits.
///
/// The start edge is the chronologically earlier stage, the end edge the later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageEdge {
    Start,
    End,
}

impl FromStr for StageEdge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" | "from" => Ok(Self::Start),
            "end" | "to" => Ok(Self::End),
            _ => Err(format!("`{s}` is not a stage edge (expected `start` or `end`)")),
        }
    }
}

impl fmt::Display for StageEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// A value on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualitativeValue {
    Relative(RelativeValue),
    Stage(Stage),
}

impl QualitativeValue {
    /// Parses `text` as a value of `axis`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use venn_core::scale::{Axis, QualitativeValue, Stage};
    /// let value = QualitativeValue::parse(Axis::Stage, "Eval + Adapt").unwrap();
    /// assert_eq!(value, QualitativeValue::Stage(Stage::EvalAdapt));
    /// assert!(QualitativeValue::parse(Axis::X, "Execution").is_err());
    /// ```
    pub fn parse(axis: Axis, text: &str) -> Result<Self, UnknownValueError> {
        match axis {
            Axis::X => text.parse().map(Self::Relative),
            Axis::Stage => text.parse().map(Self::Stage),
        }
    }

    /// The axis this value belongs to.
    pub fn axis(self) -> Axis {
        match self {
            Self::Relative(_) => Axis::X,
            Self::Stage(_) => Axis::Stage,
        }
    }
}

impl fmt::Display for QualitativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relative(value) => fmt::Display::fmt(value, f),
            Self::Stage(stage) => fmt::Display::fmt(stage, f),
        }
    }
}

/// Lowercases and drops everything but letters and digits.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for RelativeValue {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" | "mid" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(UnknownValueError::new(Axis::X, s)),
        }
    }
}

impl fmt::Display for RelativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        f.write_str(name)
    }
}

impl FromStr for Stage {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "intention" => Ok(Self::Intention),
            "activation" => Ok(Self::Activation),
            "execution" => Ok(Self::Execution),
            "evaladapt" | "evaluateadapt" | "evaluation" => Ok(Self::EvalAdapt),
            "impact" => Ok(Self::Impact),
            _ => Err(UnknownValueError::new(Axis::Stage, s)),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intention => "Intention",
            Self::Activation => "Activation",
            Self::Execution => "Execution",
            Self::EvalAdapt => "Eval + Adapt",
            Self::Impact => "Impact",
        };
        f.write_str(name)
    }
}

macro_rules! serde_via_text {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_via_text!(RelativeValue);
serde_via_text!(Stage);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_value_parse_aliases() {
        assert_eq!("Low".parse::<RelativeValue>(), Ok(RelativeValue::Low));
        assert_eq!("med".parse::<RelativeValue>(), Ok(RelativeValue::Medium));
        assert_eq!("MEDIUM".parse::<RelativeValue>(), Ok(RelativeValue::Medium));
        assert_eq!(" high ".parse::<RelativeValue>(), Ok(RelativeValue::High));
    }

    #[test]
    fn test_relative_value_parse_unknown() {
        let err = "Huge".parse::<RelativeValue>().unwrap_err();
        assert_eq!(err.axis(), Axis::X);
        assert_eq!(err.value(), "Huge");
        assert_eq!(err.to_string(), "`Huge` is not a value of the relative value axis");
    }

    #[test]
    fn test_stage_parse_display_roundtrip() {
        for stage in Stage::ALL {
            assert_eq!(stage.to_string().parse::<Stage>(), Ok(stage));
        }
        assert_eq!("eval_adapt".parse::<Stage>(), Ok(Stage::EvalAdapt));
    }

    #[test]
    fn test_stage_order_is_chronological() {
        let mut shuffled = vec![Stage::Impact, Stage::Intention, Stage::Execution];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Stage::Intention, Stage::Execution, Stage::Impact]
        );
    }

    #[test]
    fn test_stage_edge_parse() {
        assert_eq!("start".parse::<StageEdge>(), Ok(StageEdge::Start));
        assert_eq!("END".parse::<StageEdge>(), Ok(StageEdge::End));
        assert!("middle".parse::<StageEdge>().is_err());
    }

    #[test]
    fn test_qualitative_value_axis() {
        let value = QualitativeValue::parse(Axis::X, "High").unwrap();
        assert_eq!(value.axis(), Axis::X);
        assert_eq!(value.to_string(), "High");

        let err = QualitativeValue::parse(Axis::Stage, "Later").unwrap_err();
        assert_eq!(err.axis(), Axis::Stage);
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Stage::EvalAdapt).unwrap();
        assert_eq!(json, "\"Eval + Adapt\"");

        let stage: Stage = serde_json::from_str("\"activation\"").unwrap();
        assert_eq!(stage, Stage::Activation);
    }
}

//! Parsed script commands.

use std::{fmt, str::FromStr};

use venn_core::{identifier::Id, scale::StageEdge};

use crate::span::Spanned;

/// The command words of the script language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKeyword {
    Click,
    Background,
    Handle,
    Drag,
    Release,
    Resize,
    Value,
    Stage,
    Rate,
    Unrate,
    Place,
}

impl CommandKeyword {
    pub const ALL: [CommandKeyword; 11] = [
        Self::Click,
        Self::Background,
        Self::Handle,
        Self::Drag,
        Self::Release,
        Self::Resize,
        Self::Value,
        Self::Stage,
        Self::Rate,
        Self::Unrate,
        Self::Place,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Background => "background",
            Self::Handle => "handle",
            Self::Drag => "drag",
            Self::Release => "release",
            Self::Resize => "resize",
            Self::Value => "value",
            Self::Stage => "stage",
            Self::Rate => "rate",
            Self::Unrate => "unrate",
            Self::Place => "place",
        }
    }

    /// One-line usage shown in help text.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Click => "click <id>",
            Self::Background => "background",
            Self::Handle => "handle",
            Self::Drag => "drag <x> <y>",
            Self::Release => "release",
            Self::Resize => "resize <sx> <sy>",
            Self::Value => "value <id> <Low|Medium|High>",
            Self::Stage => "stage <id> <start|end> <stage>",
            Self::Rate => "rate <id> <1-5>",
            Self::Unrate => "unrate <id>",
            Self::Place => "place <id> <x> <y>",
        }
    }
}

impl FromStr for CommandKeyword {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

impl fmt::Display for CommandKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an interaction script.
///
/// Axis values stay as written; resolving them against the axes happens
/// when the command is applied, where an unknown value has a fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Click on a region.
    Click { id: Spanned<Id> },
    /// Click on empty canvas.
    Background,
    /// Click on the resize handle overlay.
    Handle,
    /// Drag the selected region so its center lands on `(x, y)`.
    Drag { x: f32, y: f32 },
    /// Release the pointer, committing the gesture.
    Release,
    /// Resize gesture with transient scale factors.
    Resize { scale_x: f32, scale_y: f32 },
    /// Relative value selector.
    Value {
        id: Spanned<Id>,
        value: Spanned<String>,
    },
    /// Stage selector for one edge of the span.
    Stage {
        id: Spanned<Id>,
        edge: StageEdge,
        stage: Spanned<String>,
    },
    Rate {
        id: Spanned<Id>,
        rating: Spanned<i32>,
    },
    Unrate { id: Spanned<Id> },
    /// Position panel entry.
    Place { id: Spanned<Id>, x: f32, y: f32 },
}

impl Command {
    pub fn keyword(&self) -> CommandKeyword {
        match self {
            Command::Click { .. } => CommandKeyword::Click,
            Command::Background => CommandKeyword::Background,
            Command::Handle => CommandKeyword::Handle,
            Command::Drag { .. } => CommandKeyword::Drag,
            Command::Release => CommandKeyword::Release,
            Command::Resize { .. } => CommandKeyword::Resize,
            Command::Value { .. } => CommandKeyword::Value,
            Command::Stage { .. } => CommandKeyword::Stage,
            Command::Rate { .. } => CommandKeyword::Rate,
            Command::Unrate { .. } => CommandKeyword::Unrate,
            Command::Place { .. } => CommandKeyword::Place,
        }
    }

    /// The region this command names, if any.
    pub fn region(&self) -> Option<&Spanned<Id>> {
        match self {
            Command::Click { id }
            | Command::Value { id, .. }
            | Command::Stage { id, .. }
            | Command::Rate { id, .. }
            | Command::Unrate { id }
            | Command::Place { id, .. } => Some(id),
            Command::Background
            | Command::Handle
            | Command::Drag { .. }
            | Command::Release
            | Command::Resize { .. } => None,
        }
    }
}

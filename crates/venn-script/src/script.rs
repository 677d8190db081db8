//! A parsed interaction script.

use venn_core::identifier::Id;

use crate::{command::Command, error::Diagnostic, span::Spanned, validate};

/// The commands of a script, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    commands: Vec<Spanned<Command>>,
}

impl Script {
    pub fn new(commands: Vec<Spanned<Command>>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[Spanned<Command>] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<Spanned<Command>> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Check the script against the regions of a diagram.
    ///
    /// Only warnings are produced: every flagged command still has a
    /// well-defined, degraded effect when applied.
    pub fn validate(&self, known_ids: &[Id]) -> Vec<Diagnostic> {
        validate::validate(&self.commands, known_ids)
    }
}

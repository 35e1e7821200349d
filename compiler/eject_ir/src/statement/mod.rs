//! Statements: the unit of scheduling.

use crate::generator::{Argument, CodeGenerator, Dependencies};
use crate::{Document, Identifier, Phase};

/// One unit of generatable code.
///
/// A statement belongs to a [`Phase`] and, in the initialization phase only,
/// may be the unique declarer of an identifier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statement {
    phase: Phase,
    declares: Option<Identifier>,
    generator: CodeGenerator,
}

impl Statement {
    /// A statement that declares `identifier`.
    ///
    /// Declarations are always in [`Phase::Initialization`].
    pub fn declaration(identifier: impl Into<Identifier>, generator: CodeGenerator) -> Self {
        Statement {
            phase: Phase::Initialization,
            declares: Some(identifier.into()),
            generator,
        }
    }

    /// A statement that declares nothing.
    pub fn new(phase: Phase, generator: CodeGenerator) -> Self {
        Statement {
            phase,
            declares: None,
            generator,
        }
    }

    /// Declare `identifier` by constructing `class_name` with `arguments`.
    pub fn declare_object(
        identifier: impl Into<Identifier>,
        class_name: impl Into<String>,
        arguments: Vec<Argument>,
    ) -> Self {
        let generator = CodeGenerator::Declaration {
            class_name: class_name.into(),
            arguments,
        };
        Statement::declaration(identifier, generator)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The identifier this statement declares, if any.
    #[inline]
    pub fn declares(&self) -> Option<&Identifier> {
        self.declares.as_ref()
    }

    #[inline]
    pub fn generator(&self) -> &CodeGenerator {
        &self.generator
    }

    /// Returns `true` if this is the initialization statement declaring `identifier`.
    pub fn is_declaration_of(&self, identifier: &Identifier) -> bool {
        self.phase.can_declare() && self.declares.as_ref() == Some(identifier)
    }

    pub fn dependent_identifiers(&self) -> Dependencies<'_> {
        self.generator.dependent_identifiers()
    }

    pub fn render(&self, document: &Document) -> String {
        self.generator.render(self.declares.as_ref(), document)
    }
}

#[cfg(test)]
mod tests;

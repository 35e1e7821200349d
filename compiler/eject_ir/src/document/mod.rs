//! The parsed document handed to the code generator.
//!
//! A [`Document`] is built by an external front end. It holds the ordered
//! statement list, the reference registry, and an object registry mapping
//! identifiers to the class and variable name chosen for them.

use rustc_hash::FxHashMap;

use crate::{Identifier, Phase, Reference, Statement};

/// Class and variable name of a document object.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectInfo {
    pub class_name: String,
    pub variable_name: String,
}

impl ObjectInfo {
    pub fn new(class_name: impl Into<String>, variable_name: impl Into<String>) -> Self {
        ObjectInfo {
            class_name: class_name.into(),
            variable_name: variable_name.into(),
        }
    }
}

/// A statement graph ready for code generation.
///
/// Statement order is significant: it is the traversal order of the source
/// document, outer objects before inner ones.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    statements: Vec<Statement>,
    references: Vec<Reference>,
    objects: FxHashMap<Identifier, ObjectInfo>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn add_reference(&mut self, reference: Reference) {
        self.references.push(reference);
    }

    /// Register an object and add a reference to it.
    ///
    /// Identifiers using the external prefix become placeholder references.
    pub fn add_object(&mut self, identifier: impl Into<Identifier>, info: ObjectInfo) {
        let identifier = identifier.into();
        self.references.push(Reference::from_identifier(identifier.clone()));
        self.objects.insert(identifier, info);
    }

    /// Register naming information without touching the reference list.
    pub fn register_object(&mut self, identifier: impl Into<Identifier>, info: ObjectInfo) {
        self.objects.insert(identifier.into(), info);
    }

    #[inline]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    #[inline]
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub fn object(&self, identifier: &Identifier) -> Option<&ObjectInfo> {
        self.objects.get(identifier)
    }

    /// Variable name generated code uses for `identifier`.
    ///
    /// Falls back to the identifier text for unregistered objects.
    pub fn variable_name<'a>(&'a self, identifier: &'a Identifier) -> &'a str {
        self.objects
            .get(identifier)
            .map_or(identifier.as_str(), |info| info.variable_name.as_str())
    }

    /// Code for every statement of `phase`, in document order.
    ///
    /// No scheduling happens here: dependencies are ignored and nothing is
    /// reordered. Useful for tooling that wants one phase in isolation.
    pub fn code_for_phase(&self, phase: Phase) -> Vec<String> {
        self.statements
            .iter()
            .filter(|statement| statement.phase() == phase)
            .map(|statement| statement.render(self))
            .collect()
    }
}

impl Extend<Statement> for Document {
    fn extend<T: IntoIterator<Item = Statement>>(&mut self, iter: T) {
        self.statements.extend(iter);
    }
}

#[cfg(test)]
mod tests;

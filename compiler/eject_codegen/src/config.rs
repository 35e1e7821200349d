//! Generation options.

/// What happens to a declaration whose dependencies are not yet declared
/// when the scheduler first looks at it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeclarationPolicy {
    /// Leave the declaration pending in its original position so a later
    /// pass can emit it once its dependencies are declared.
    #[default]
    Retain,
    /// Drop the declaration. Its code is never emitted, a later pass finds
    /// nothing to declare for that identifier, and generation fails with
    /// [`GenerationError::Unresolved`](crate::GenerationError::Unresolved)
    /// instead of returning the truncated listing.
    ///
    /// This reproduces the pass order of generators that dropped blocked
    /// declarations, with one difference: placeholder identifiers count as
    /// declared from the start here, so a declaration depending only on a
    /// placeholder such as `-1` is emitted rather than dropped.
    Discard,
}

/// Options for one generation request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GenerationConfig {
    /// Handling of declarations that are not ready yet.
    pub declarations: DeclarationPolicy,
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_declarations(mut self, policy: DeclarationPolicy) -> Self {
        self.declarations = policy;
        self
    }
}

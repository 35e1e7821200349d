//! Statement scheduling.
//!
//! [`GenerationContext`] orders a document's statements so that every
//! identifier is declared before any statement that uses it.
//!
//! # Algorithm
//!
//! 1. **Declaration passes.** Walk the non-placeholder references. For each
//!    one whose declaration has all dependencies declared, emit the
//!    declaration followed by every pending configuration statement that
//!    depends on that identifier alone. Repeat until a pass makes no
//!    progress.
//! 2. **Trailing drain.** Emit what is left, phase by phase: subviews,
//!    constraints, then configuration. Each phase is emitted in reverse
//!    document order, innermost objects first.
//! 3. **Postcondition.** Anything still pending, or any declaration
//!    dropped under [`DeclarationPolicy::Discard`], is an error.
//!
//! Each pass rescans the remaining references, so the worst case is
//! quadratic in the number of references. Documents are small enough that
//! this never matters.

use eject_ir::{Document, Identifier, Phase, Reference, Statement};
use rustc_hash::FxHashSet;

use crate::{DeclarationPolicy, GenerationConfig, GenerationError, UnresolvedStatement};

/// Phases drained after the declaration passes, in emission order.
pub const TRAILING_PHASES: [Phase; 3] =
    [Phase::Subviews, Phase::Constraints, Phase::Configuration];

/// Working state for one generation request.
///
/// Created per request and consumed by [`GenerationContext::generate`].
pub struct GenerationContext<'doc> {
    document: &'doc Document,
    config: GenerationConfig,
    /// Statements not yet emitted, in document order.
    pending: Vec<&'doc Statement>,
    /// Declarations dropped under [`DeclarationPolicy::Discard`].
    discarded: Vec<&'doc Statement>,
    /// Identifiers whose declaration has been emitted, plus placeholders.
    declared: FxHashSet<Identifier>,
}

impl<'doc> GenerationContext<'doc> {
    pub fn new(document: &'doc Document) -> Self {
        Self::with_config(document, GenerationConfig::default())
    }

    pub fn with_config(document: &'doc Document, config: GenerationConfig) -> Self {
        // Placeholders are supplied by the caller and available from the start.
        let declared = document
            .references()
            .iter()
            .filter(|reference| reference.is_placeholder())
            .map(|reference| reference.identifier().clone())
            .collect();
        GenerationContext {
            document,
            config,
            pending: document.statements().iter().collect(),
            discarded: Vec::new(),
            declared,
        }
    }

    /// Statements not yet emitted, in document order.
    pub fn pending(&self) -> &[&'doc Statement] {
        &self.pending
    }

    /// Declarations dropped before their dependencies were declared.
    pub fn discarded(&self) -> &[&'doc Statement] {
        &self.discarded
    }

    /// Returns `true` once `identifier` is available to dependent statements.
    pub fn is_declared(&self, identifier: &Identifier) -> bool {
        self.declared.contains(identifier)
    }

    /// Emit the declaration of `target` if it is ready.
    ///
    /// Returns `Ok(None)` when nothing pending declares `target` or when the
    /// declaration still depends on undeclared identifiers. In the latter
    /// case the declaration stays pending under [`DeclarationPolicy::Retain`]
    /// and is dropped under [`DeclarationPolicy::Discard`]. A dropped
    /// declaration is never emitted and makes [`GenerationContext::generate`]
    /// fail.
    pub fn declaration(
        &mut self,
        target: &Identifier,
    ) -> Result<Option<String>, GenerationError> {
        let statement = match self.config.declarations {
            DeclarationPolicy::Retain => {
                let mut candidates = self
                    .pending
                    .iter()
                    .copied()
                    .enumerate()
                    .filter(|(_, statement)| statement.is_declaration_of(target));
                let Some((index, statement)) = candidates.next() else {
                    return Ok(None);
                };
                check_unique(target, 1 + candidates.count())?;

                if !self.is_ready(statement) {
                    tracing::trace!(identifier = %target, "declaration not ready, retained");
                    return Ok(None);
                }
                self.pending.remove(index)
            }
            DeclarationPolicy::Discard => {
                let mut declarations =
                    self.extract(|statement| statement.is_declaration_of(target));
                check_unique(target, declarations.len())?;
                let Some(statement) = declarations.pop() else {
                    return Ok(None);
                };

                if !self.is_ready(statement) {
                    tracing::warn!(
                        identifier = %target,
                        "declaration discarded before its dependencies were declared"
                    );
                    self.discarded.push(statement);
                    return Ok(None);
                }
                statement
            }
        };

        self.declared.insert(target.clone());
        let code = statement.render(self.document);
        tracing::trace!(identifier = %target, code = %code, "declared");
        Ok(Some(code))
    }

    /// Emit every pending configuration statement that depends on `target`
    /// and nothing else, in document order.
    ///
    /// Configuration touching other identifiers too is left for the
    /// trailing drain.
    pub fn configuration(&mut self, target: &Identifier) -> Vec<String> {
        let document = self.document;
        self.extract(|statement| {
            statement.phase() == Phase::Configuration
                && statement.generator().depends_only_on(target)
        })
        .into_iter()
        .map(|statement| statement.render(document))
        .collect()
    }

    /// Emit every pending statement of `phase`, in reverse document order.
    pub fn drain_phase(&mut self, phase: Phase) -> Vec<String> {
        let document = self.document;
        let statements = self.extract(|statement| statement.phase() == phase);
        tracing::debug!(%phase, count = statements.len(), "draining phase");
        statements
            .into_iter()
            .rev()
            .map(|statement| statement.render(document))
            .collect()
    }

    /// Run the whole schedule and return the ordered code listing.
    #[tracing::instrument(level = "debug", skip_all, fields(
        statements = self.document.statements().len(),
        references = self.document.references().len(),
    ))]
    pub fn generate(mut self) -> Result<Vec<String>, GenerationError> {
        let document = self.document;
        let mut code = Vec::with_capacity(document.statements().len());

        let mut worklist: Vec<&'doc Identifier> = document
            .references()
            .iter()
            .filter(|reference| !reference.is_placeholder())
            .map(Reference::identifier)
            .collect();

        let mut pass = 0u32;
        while !worklist.is_empty() {
            pass += 1;
            let before = worklist.len();
            let mut blocked = Vec::with_capacity(before);

            for identifier in worklist {
                if let Some(declaration) = self.declaration(identifier)? {
                    code.push(declaration);
                    code.extend(self.configuration(identifier));
                } else {
                    blocked.push(identifier);
                }
            }

            tracing::debug!(
                pass,
                resolved = before - blocked.len(),
                blocked = blocked.len(),
                "declaration pass"
            );
            if blocked.len() == before {
                break;
            }
            worklist = blocked;
        }

        for phase in TRAILING_PHASES {
            code.extend(self.drain_phase(phase));
        }

        if !self.pending.is_empty() || !self.discarded.is_empty() {
            let remaining: Vec<_> = self
                .discarded
                .iter()
                .chain(&self.pending)
                .map(|&statement| UnresolvedStatement::from_statement(statement))
                .collect();
            tracing::debug!(
                count = remaining.len(),
                discarded = self.discarded.len(),
                "statements left unscheduled"
            );
            return Err(GenerationError::Unresolved { remaining });
        }

        Ok(code)
    }

    /// Remove and return every pending statement matching `matches`,
    /// preserving the relative order of both halves.
    fn extract(&mut self, mut matches: impl FnMut(&Statement) -> bool) -> Vec<&'doc Statement> {
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|&statement| matches(statement));
        self.pending = kept;
        taken
    }

    fn is_ready(&self, statement: &Statement) -> bool {
        statement
            .dependent_identifiers()
            .iter()
            .all(|identifier| self.declared.contains(*identifier))
    }
}

fn check_unique(identifier: &Identifier, count: usize) -> Result<(), GenerationError> {
    if count > 1 {
        return Err(GenerationError::DuplicateDeclaration {
            identifier: identifier.clone(),
            count,
        });
    }
    Ok(())
}

//! Generation errors.
//!
//! Both variants mean the document is inconsistent. Neither is retried and
//! neither comes with a partial listing.

use std::fmt;

use eject_ir::{Identifier, Phase, Statement};

/// Why a document could not be turned into code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GenerationError {
    /// More than one initialization statement declares the same identifier.
    #[error("`{identifier}` is declared by {count} statements, expected exactly one")]
    DuplicateDeclaration { identifier: Identifier, count: usize },

    /// Statements were still pending after every phase drained, typically
    /// because of a dependency cycle or a dependency nothing declares.
    /// Declarations dropped under the discarding policy are listed first.
    #[error(
        "{} statement(s) could not be scheduled: {}",
        .remaining.len(),
        join(.remaining)
    )]
    Unresolved { remaining: Vec<UnresolvedStatement> },
}

/// Summary of a statement left pending by the scheduler.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnresolvedStatement {
    pub phase: Phase,
    pub declares: Option<Identifier>,
    pub dependencies: Vec<Identifier>,
}

impl UnresolvedStatement {
    pub fn from_statement(statement: &Statement) -> Self {
        UnresolvedStatement {
            phase: statement.phase(),
            declares: statement.declares().cloned(),
            dependencies: statement
                .dependent_identifiers()
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Display for UnresolvedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} statement", self.phase)?;
        if let Some(identifier) = &self.declares {
            write!(f, " declaring `{identifier}`")?;
        }
        if !self.dependencies.is_empty() {
            f.write_str(" (depends on ")?;
            for (i, dependency) in self.dependencies.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "`{dependency}`")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

fn join(remaining: &[UnresolvedStatement]) -> String {
    remaining
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

//! Reference registry entries.

use crate::Identifier;

/// An identifier the document needs declared, or a placeholder for one the
/// calling environment supplies.
///
/// Placeholders never have a declaring statement. The scheduler never tries
/// to resolve them and treats them as available from the start.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    identifier: Identifier,
    is_placeholder: bool,
}

impl Reference {
    /// A reference to an object the document itself declares.
    pub fn object(identifier: impl Into<Identifier>) -> Self {
        Reference {
            identifier: identifier.into(),
            is_placeholder: false,
        }
    }

    /// A reference to an externally supplied object.
    pub fn placeholder(identifier: impl Into<Identifier>) -> Self {
        Reference {
            identifier: identifier.into(),
            is_placeholder: true,
        }
    }

    /// Build a reference, classifying it by the external-identifier prefix.
    pub fn from_identifier(identifier: impl Into<Identifier>) -> Self {
        let identifier = identifier.into();
        let is_placeholder = identifier.is_external();
        Reference {
            identifier,
            is_placeholder,
        }
    }

    #[inline]
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.is_placeholder
    }
}

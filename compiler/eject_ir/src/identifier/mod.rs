//! Object identifiers.
//!
//! An [`Identifier`] is the stable name a document uses to cross-reference
//! an object between statements. It is not the generated variable name;
//! that lives in the document's object registry.

use std::borrow::Borrow;
use std::fmt;

/// Stable identifier of an object in a document.
///
/// Identifiers beginning with `-` follow the document convention for
/// externally-owned objects (`-1` is the owner, `-2` the first responder).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identifier(Box<str>);

impl Identifier {
    /// Prefix marking identifiers supplied by the calling environment.
    pub const EXTERNAL_PREFIX: char = '-';

    pub fn new(identifier: impl Into<Box<str>>) -> Self {
        Identifier(identifier.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier follows the external-object convention.
    #[inline]
    pub fn is_external(&self) -> bool {
        self.0.starts_with(Self::EXTERNAL_PREFIX)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({:?})", &*self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(identifier: &str) -> Self {
        Identifier::new(identifier)
    }
}

impl From<String> for Identifier {
    fn from(identifier: String) -> Self {
        Identifier::new(identifier)
    }
}

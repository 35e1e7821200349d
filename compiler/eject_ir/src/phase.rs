//! Emission phases.

use std::fmt;

/// Coarse emission priority of a statement.
///
/// Phases are a closed set, not a total order: the scheduler decides how
/// they interleave. Only [`Phase::Initialization`] statements may declare
/// an identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Object construction. The only phase that declares identifiers.
    Initialization,
    /// Property assignment and method calls on declared objects.
    Configuration,
    /// Attaching children to their parent.
    Subviews,
    /// Installing layout constraints between declared objects.
    Constraints,
}

impl Phase {
    /// All phases, in declaration order.
    pub const ALL: [Phase; 4] = [
        Phase::Initialization,
        Phase::Configuration,
        Phase::Subviews,
        Phase::Constraints,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Phase::Initialization => "initialization",
            Phase::Configuration => "configuration",
            Phase::Subviews => "subviews",
            Phase::Constraints => "constraints",
        }
    }

    /// Whether statements in this phase may declare an identifier.
    #[inline]
    pub fn can_declare(self) -> bool {
        self == Phase::Initialization
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

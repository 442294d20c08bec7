use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Identifier of one state in a transducer.
///
/// State identifiers are opaque to callers; only equality matters. The
/// numeric representation exists so that fresh identifiers can be issued
/// by incrementing past a conflict set.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
#[serde(transparent)]
pub struct StateId(pub u32);

impl StateId {
    pub(crate) const ZERO: Self = StateId(0);

    #[inline(always)]
    pub(crate) fn incr(&self) -> Self {
        Self(self.0 + 1)
    }

    #[inline(always)]
    pub(crate) fn offset(&self, n: u32) -> Self {
        Self(self.0 + n)
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of state identifiers.
pub type StateSet = hashbrown::HashSet<StateId>;

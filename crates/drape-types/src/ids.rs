//! Strongly-typed identifiers for simulation entities.

use serde::{Deserialize, Serialize};

/// Handle to a constraint registered with a cloth.
///
/// Ids are handed out in registration order and never reused,
/// so a removed constraint's id stays invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConstraintId(pub u32);

impl ConstraintId {
    /// Returns the raw id.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Returns the id that follows this one.
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for ConstraintId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

//! Strongly typed location handle.
//!
//! Locations are stored in a central arena (`Vec<Location>` inside
//! `RouteGraph`); adjacency lists hold `LocationId`s rather than references,
//! so the graph has a single owner and no reference cycles.  The inner
//! integer is `pub` for direct indexing, but callers should prefer
//! [`LocationId::index`].

use std::fmt;

/// Index of a location in the graph's arena.  Assigned sequentially from 0
/// in insertion order.  Max ~4.3 billion locations; `u32::MAX` is reserved
/// for [`LocationId::INVALID`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationId(pub u32);

impl LocationId {
    /// Sentinel meaning "no location" — used for unset predecessor links.
    pub const INVALID: LocationId = LocationId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for LocationId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationId({})", self.0)
    }
}

impl From<LocationId> for usize {
    #[inline(always)]
    fn from(id: LocationId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for LocationId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<LocationId, Self::Error> {
        u32::try_from(n).map(LocationId)
    }
}

//! Strongly typed lane identifier.
//!
//! A `LaneId` is the lane's position in snapshot insertion order.  The inner
//! integer is `pub` so it can index `LaneSet`'s backing `Vec` directly, but
//! callers should prefer [`LaneId::index`].

use std::fmt;

/// Dense index of a lane in its [`LaneSet`](crate::LaneSet).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneId(pub u32);

impl LaneId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LaneId({})", self.0)
    }
}

impl From<LaneId> for usize {
    #[inline(always)]
    fn from(id: LaneId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for LaneId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<LaneId, Self::Error> {
        u32::try_from(n).map(LaneId)
    }
}

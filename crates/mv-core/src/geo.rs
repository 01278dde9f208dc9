//! Planar coordinate type.
//!
//! Locations live on a flat 2-D plane (map/canvas units), not on the globe,
//! so distance is plain Euclidean.  `f64` keeps edge weights exact enough
//! that `weight(a, b) == weight(b, a)` holds bit-for-bit: both sides are
//! computed from the same coordinate pair in the same order.

/// A point on the map plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_2(other).sqrt()
    }

    /// Squared Euclidean distance.  Cheaper than [`distance`](Self::distance)
    /// when only comparisons against a squared bound are needed.
    #[inline]
    pub fn distance_2(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Coordinates as an `[x, y]` array (the layout `rstar` expects).
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

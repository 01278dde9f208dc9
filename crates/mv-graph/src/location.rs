//! A named point on the map and its outgoing adjacencies.

use mv_core::{LocationId, Point};

// ── Adjacency ─────────────────────────────────────────────────────────────────

/// One directed half of an undirected edge, stored on the source location.
///
/// Both weights are fixed when the edge is created.  `traffic_weight` is
/// `weight` scaled by a factor sampled independently for each direction, so
/// the two halves of an edge share `weight` but usually not
/// `traffic_weight`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Adjacency {
    pub to: LocationId,
    /// Euclidean distance between the endpoints.
    pub weight: f64,
    /// `weight * factor`, factor drawn from the configured traffic range.
    pub traffic_weight: f64,
}

impl Adjacency {
    /// The multiplier that was applied to produce `traffic_weight`.
    ///
    /// Returns 1.0 for zero-length edges, where the factor is unrecoverable.
    pub fn traffic_factor(&self) -> f64 {
        if self.weight == 0.0 { 1.0 } else { self.traffic_weight / self.weight }
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// A named location.  Owned by [`RouteGraph`](crate::RouteGraph); other
/// locations refer to it only by [`LocationId`].
#[derive(Clone, Debug)]
pub struct Location {
    pub id:   LocationId,
    pub name: String,
    pub pos:  Point,
    /// Outgoing adjacencies in insertion order.
    pub(crate) neighbors: Vec<Adjacency>,
}

impl Location {
    pub(crate) fn new(id: LocationId, name: String, pos: Point) -> Self {
        Self { id, name, pos, neighbors: Vec::new() }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }

    /// Outgoing adjacencies in the order the edges were created.
    #[inline]
    pub fn adjacencies(&self) -> &[Adjacency] {
        &self.neighbors
    }

    /// Ids of directly connected locations, in edge-creation order.
    pub fn neighbors(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.neighbors.iter().map(|a| a.to)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_adjacent(&self, other: LocationId) -> bool {
        self.adjacency(other).is_some()
    }

    /// First adjacency leading to `neighbor`, if any.
    pub fn adjacency(&self, neighbor: LocationId) -> Option<&Adjacency> {
        self.neighbors.iter().find(|a| a.to == neighbor)
    }

    /// Geometric edge weight to `neighbor`, or `None` if not adjacent.
    pub fn weight(&self, neighbor: LocationId) -> Option<f64> {
        self.adjacency(neighbor).map(|a| a.weight)
    }

    /// Traffic-adjusted edge weight to `neighbor`, or `None` if not adjacent.
    pub fn traffic_weight(&self, neighbor: LocationId) -> Option<f64> {
        self.adjacency(neighbor).map(|a| a.traffic_weight)
    }

    pub(crate) fn push_adjacency(&mut self, adj: Adjacency) {
        self.neighbors.push(adj);
    }
}

//! Location graph representation and builder.
//!
//! # Data layout
//!
//! Locations live in a single arena (`Vec<Location>`) indexed by
//! [`LocationId`].  Each location carries its own adjacency list; an
//! adjacency names its target by id, never by reference, so the graph is the
//! sole owner of every location.
//!
//! Names are the human-facing key.  A name → id map gives O(1) lookup with
//! first-match semantics: inserting a duplicate name creates a second
//! location that is only reachable through its id.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over `(x, y)` answers radius ("nearby") and
//! nearest-location (hit-test) queries without scanning every location.

use log::{debug, warn};
use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use mv_core::{CoreError, LocationId, MapConfig, Point, TrafficRng};

use crate::location::{Adjacency, Location};
use crate::router::{DijkstraRouter, Metric, Route, RoutePair, Router};
use crate::topology::TopologyEntry;
use crate::{GraphError, GraphResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: an `[x, y]` point with the
/// associated `LocationId`.
#[derive(Clone, Debug)]
struct LocationEntry {
    point: [f64; 2],
    id: LocationId,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Undirected location graph plus a spatial index.
///
/// Read-only once built; construct with [`RouteGraphBuilder`] or
/// [`RouteGraph::from_topology`].
pub struct RouteGraph {
    locations:   Vec<Location>,
    by_name:     FxHashMap<String, LocationId>,
    spatial_idx: RTree<LocationEntry>,
}

impl RouteGraph {
    /// A graph with no locations.  Every query against it reports
    /// "not found".
    pub fn empty() -> Self {
        RouteGraphBuilder::seeded(0).build()
    }

    /// Build a graph from an ordered batch of entries.
    ///
    /// With `config.strict_neighbors` set, the first forward reference or
    /// self-reference aborts the build; otherwise such links are skipped.
    pub fn from_topology<'a, I>(entries: I, config: &MapConfig) -> GraphResult<Self>
    where
        I: IntoIterator<Item = &'a TopologyEntry>,
    {
        let mut b = RouteGraphBuilder::with_config(config)?;
        for entry in entries {
            b.insert_entry(entry)?;
        }
        Ok(b.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of directed adjacencies (two per undirected edge).
    pub fn edge_count(&self) -> usize {
        self.locations.iter().map(Location::degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// Like [`location`](Self::location) but reports a missing id as an error.
    pub fn get(&self, id: LocationId) -> GraphResult<&Location> {
        self.location(id).ok_or(GraphError::LocationNotFound(id))
    }

    /// First location inserted under `name`.
    pub fn find(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    pub fn find_location(&self, name: &str) -> Option<&Location> {
        self.find(name).and_then(|id| self.location(id))
    }

    fn resolve(&self, name: &str) -> GraphResult<LocationId> {
        self.find(name).ok_or_else(|| GraphError::UnknownLocation(name.to_owned()))
    }

    /// All locations in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Every directed adjacency as `(source, adjacency)`.  An undirected
    /// edge appears once from each endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (LocationId, &Adjacency)> + '_ {
        self.locations
            .iter()
            .flat_map(|loc| loc.adjacencies().iter().map(move |a| (loc.id, a)))
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Shortest path from `start` to `end` with the default Dijkstra router.
    ///
    /// `use_traffic` selects traffic-adjusted weights instead of plain
    /// geometric distance.
    pub fn shortest_path(
        &self,
        start: LocationId,
        end: LocationId,
        use_traffic: bool,
    ) -> GraphResult<Route> {
        DijkstraRouter.route(self, start, end, Metric::from_traffic(use_traffic))
    }

    pub fn shortest_path_by_name(
        &self,
        start: &str,
        end: &str,
        use_traffic: bool,
    ) -> GraphResult<Route> {
        self.shortest_path(self.resolve(start)?, self.resolve(end)?, use_traffic)
    }

    /// Both routes a path query shows: plain distance and traffic-adjusted.
    pub fn route_pair(&self, start: LocationId, end: LocationId) -> GraphResult<RoutePair> {
        RoutePair::compute(&DijkstraRouter, self, start, end)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Every other location whose distance to `location` lies in
    /// `(0, radius]`, sorted by id.
    ///
    /// Proximity only: graph edges are ignored.  Any location sharing the
    /// exact coordinates of `location` is excluded along with `location`
    /// itself.
    pub fn nearby(&self, location: LocationId, radius: f64) -> GraphResult<Vec<LocationId>> {
        let center = self.get(location)?.pos;
        Ok(self.nearby_point(center, radius))
    }

    pub fn nearby_by_name(&self, name: &str, radius: f64) -> GraphResult<Vec<LocationId>> {
        self.nearby(self.resolve(name)?, radius)
    }

    /// Locations whose distance to `center` lies in `(0, radius]`, sorted by id.
    pub fn nearby_point(&self, center: Point, radius: f64) -> Vec<LocationId> {
        if radius.is_nan() || radius <= 0.0 || !(center.x.is_finite() && center.y.is_finite()) {
            return Vec::new();
        }
        // `center ± radius` rounds; pad the box so the exact filter below
        // decides every boundary case.
        let reach = radius + (center.x.abs().max(center.y.abs()) + radius) * 4.0 * f64::EPSILON;
        let envelope = AABB::from_corners(
            [center.x - reach, center.y - reach],
            [center.x + reach, center.y + reach],
        );
        let mut found: Vec<LocationId> = self
            .spatial_idx
            .locate_in_envelope_intersecting(&envelope)
            .filter(|e| {
                let d = Point::new(e.point[0], e.point[1]).distance(center);
                d > 0.0 && d <= radius
            })
            .map(|e| e.id)
            .collect();
        found.sort_unstable();
        found
    }

    /// The location nearest to `point`, provided it lies strictly within
    /// `tolerance`.  Used to turn a click (in map coordinates) into a
    /// selection.
    pub fn location_at(&self, point: Point, tolerance: f64) -> Option<LocationId> {
        let query = point.to_array();
        self.spatial_idx
            .nearest_neighbor(&query)
            .filter(|e| e.distance_2(&query).sqrt() < tolerance)
            .map(|e| e.id)
    }
}

// ── RouteGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`RouteGraph`] incrementally, then call [`build`](Self::build).
///
/// Each insert may only link to locations inserted before it.  Edges are
/// undirected: both endpoints get an adjacency with the same geometric
/// weight, and each side samples its own traffic factor.
///
/// # Example
///
/// ```
/// use mv_graph::RouteGraphBuilder;
///
/// let mut b = RouteGraphBuilder::seeded(42);
/// b.insert("Sanj", 100.0, 300.0, None::<&str>);
/// b.insert("JJ Park", 300.0, 300.0, ["Sanj"]);
/// let graph = b.build();
/// assert_eq!(graph.location_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // one adjacency per endpoint
/// ```
pub struct RouteGraphBuilder {
    locations: Vec<Location>,
    by_name:   FxHashMap<String, LocationId>,
    rng:       TrafficRng,
    strict:    bool,
}

impl RouteGraphBuilder {
    /// Builder with default configuration and an entropy-seeded traffic RNG.
    pub fn new() -> Self {
        Self::from_parts(TrafficRng::from_entropy(Default::default()), false)
    }

    /// Builder with default configuration and a fixed traffic seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_parts(TrafficRng::new(seed, Default::default()), false)
    }

    pub fn with_config(config: &MapConfig) -> GraphResult<Self> {
        config.validate()?;
        let rng = TrafficRng::from_seed_opt(config.seed, config.traffic);
        Ok(Self::from_parts(rng, config.strict_neighbors))
    }

    fn from_parts(rng: TrafficRng, strict: bool) -> Self {
        Self {
            locations: Vec::new(),
            by_name:   FxHashMap::default(),
            rng,
            strict,
        }
    }

    /// Add a location and link it to every already-inserted neighbor.
    ///
    /// Neighbor names that do not resolve yet (forward references) and
    /// self-references are skipped with a warning; no edge is created.
    ///
    /// A location with a NaN or infinite coordinate, or one beyond the id
    /// limit, is not added at all: the call logs a warning and returns
    /// [`LocationId::INVALID`].
    pub fn insert<I, S>(&mut self, name: &str, x: f64, y: f64, neighbors: I) -> LocationId
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = match self.next_id(name, x, y) {
            Ok(id) => id,
            Err(e) => {
                warn!("{e}; location skipped");
                return LocationId::INVALID;
            }
        };
        let mut links = Vec::new();
        for neighbor in neighbors {
            let neighbor = neighbor.as_ref();
            match self.find(neighbor) {
                Some(other) => links.push(other),
                None if neighbor == name => {
                    warn!("{name:?} lists itself as a neighbor; skipped");
                }
                None => {
                    warn!("{name:?} references {neighbor:?} before it was inserted; no edge created");
                }
            }
        }
        self.push_location(id, name, Point::new(x, y), links)
    }

    /// Strict variant of [`insert`](Self::insert): fails on a non-finite
    /// coordinate or on the first unresolved neighbor or self-reference, and
    /// leaves the builder unchanged.
    pub fn try_insert<I, S>(
        &mut self,
        name: &str,
        x: f64,
        y: f64,
        neighbors: I,
    ) -> GraphResult<LocationId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = self.next_id(name, x, y)?;
        let mut links = Vec::new();
        for neighbor in neighbors {
            let neighbor = neighbor.as_ref();
            match self.find(neighbor) {
                Some(other) => links.push(other),
                None if neighbor == name => {
                    return Err(GraphError::SelfReference(name.to_owned()));
                }
                None => {
                    return Err(GraphError::UnknownNeighbor {
                        location: name.to_owned(),
                        neighbor: neighbor.to_owned(),
                    });
                }
            }
        }
        Ok(self.push_location(id, name, Point::new(x, y), links))
    }

    /// Insert one topology entry, strictly or leniently per the builder's
    /// configuration.
    pub fn insert_entry(&mut self, entry: &TopologyEntry) -> GraphResult<LocationId> {
        if self.strict {
            self.try_insert(&entry.id, entry.x, entry.y, &entry.neighbors)
        } else {
            Ok(self.insert(&entry.id, entry.x, entry.y, &entry.neighbors))
        }
    }

    /// Add an undirected edge `a`–`b` with an explicit length instead of the
    /// straight-line distance (a road that bends).  Traffic factors are
    /// sampled as for any other edge.
    pub fn connect(&mut self, a: LocationId, b: LocationId, length: f64) -> GraphResult<()> {
        for id in [a, b] {
            if id.index() >= self.locations.len() {
                return Err(GraphError::LocationNotFound(id));
            }
        }
        if a == b {
            return Err(GraphError::SelfReference(self.locations[a.index()].name.clone()));
        }
        if length.is_nan() || length < 0.0 {
            return Err(GraphError::Core(CoreError::Config(format!(
                "edge length must be non-negative (got {length})"
            ))));
        }
        self.link_with_weight(a, b, length);
        Ok(())
    }

    /// First location inserted under `name` so far.
    pub fn find(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.locations.iter().map(Location::degree).sum()
    }

    /// Id the next location will get, after checking its coordinates.
    fn next_id(&self, name: &str, x: f64, y: f64) -> GraphResult<LocationId> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(GraphError::InvalidCoordinate { location: name.to_owned(), x, y });
        }
        LocationId::try_from(self.locations.len())
            .ok()
            .filter(|id| id.is_valid())
            .ok_or_else(|| GraphError::TooManyLocations(name.to_owned()))
    }

    fn push_location(
        &mut self,
        id: LocationId,
        name: &str,
        pos: Point,
        links: Vec<LocationId>,
    ) -> LocationId {
        debug_assert_eq!(id.index(), self.locations.len());
        self.locations.push(Location::new(id, name.to_owned(), pos));
        if self.by_name.contains_key(name) {
            debug!("duplicate location name {name:?}; {id} reachable by id only");
        } else {
            self.by_name.insert(name.to_owned(), id);
        }
        for other in links {
            self.link(id, other);
        }
        id
    }

    /// Create both halves of the undirected edge `a`–`b`.
    fn link(&mut self, a: LocationId, b: LocationId) {
        let weight = self.locations[a.index()].pos.distance(self.locations[b.index()].pos);
        self.link_with_weight(a, b, weight);
    }

    fn link_with_weight(&mut self, a: LocationId, b: LocationId, weight: f64) {
        let a_factor = self.rng.factor();
        let b_factor = self.rng.factor();
        self.locations[a.index()].push_adjacency(Adjacency {
            to: b,
            weight,
            traffic_weight: weight * a_factor,
        });
        self.locations[b.index()].push_adjacency(Adjacency {
            to: a,
            weight,
            traffic_weight: weight * b_factor,
        });
    }

    /// Consume the builder and produce a [`RouteGraph`].
    ///
    /// Bulk-loads the R-tree in O(N log N).
    pub fn build(self) -> RouteGraph {
        let entries: Vec<LocationEntry> = self
            .locations
            .iter()
            .map(|loc| LocationEntry { point: loc.pos.to_array(), id: loc.id })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        debug!(
            "built route graph: {} locations, {} adjacencies",
            self.locations.len(),
            self.locations.iter().map(Location::degree).sum::<usize>()
        );

        RouteGraph {
            locations: self.locations,
            by_name: self.by_name,
            spatial_idx,
        }
    }
}

impl Default for RouteGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

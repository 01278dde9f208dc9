//! Routing trait and default Dijkstra implementation.
//!
//! # Metrics
//!
//! Every adjacency carries two costs fixed at build time: the geometric
//! `weight` and the traffic-adjusted `traffic_weight`.  A [`Metric`] picks
//! which one a query minimizes.  The presentation layer typically asks for
//! both (see [`RoutePair`]) and draws them in different colours.
//!
//! # Unreachable targets
//!
//! A query whose target lies in a different connected component returns
//! [`GraphError::NoRoute`]; no partial chain is ever produced.

use log::trace;

use mv_core::LocationId;

use crate::graph::RouteGraph;
use crate::location::Adjacency;
use crate::queue::PriorityQueue;
use crate::{GraphError, GraphResult};

// ── Metric ────────────────────────────────────────────────────────────────────

/// Which edge cost a route minimizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Plain Euclidean edge length.
    #[default]
    Distance,
    /// Edge length scaled by the edge's fixed traffic factor.
    Traffic,
}

impl Metric {
    #[inline]
    pub fn from_traffic(use_traffic: bool) -> Self {
        if use_traffic { Metric::Traffic } else { Metric::Distance }
    }
}

/// Edge cost under `metric`.
#[inline]
fn edge_cost(adj: &Adjacency, metric: Metric) -> f64 {
    match metric {
        Metric::Distance => adj.weight,
        Metric::Traffic  => adj.traffic_weight,
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the locations visited from start to end
/// (both inclusive) and the total cost under the query's metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub locations: Vec<LocationId>,
    pub total_cost: f64,
    pub metric: Metric,
}

impl Route {
    /// `true` if start and end are the same location.
    pub fn is_trivial(&self) -> bool {
        self.locations.len() <= 1
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.locations.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<LocationId> {
        self.locations.first().copied()
    }

    pub fn end(&self) -> Option<LocationId> {
        self.locations.last().copied()
    }

    /// Consecutive `(from, to)` pairs along the route.
    pub fn legs(&self) -> impl Iterator<Item = (LocationId, LocationId)> + '_ {
        self.locations.windows(2).map(|w| (w[0], w[1]))
    }

    /// `true` if the route traverses the edge `a`–`b` in either direction.
    /// Renderers use this to highlight edges on the path.
    pub fn contains_edge(&self, a: LocationId, b: LocationId) -> bool {
        self.legs().any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.locations.contains(&id)
    }

    /// Total cost of this route re-measured under `metric`.
    ///
    /// Returns `None` if two consecutive locations are not adjacent in
    /// `graph` (the route came from a different graph).
    pub fn cost_under(&self, graph: &RouteGraph, metric: Metric) -> Option<f64> {
        self.legs().try_fold(0.0, |acc, (from, to)| {
            let adj = graph.location(from)?.adjacency(to)?;
            Some(acc + edge_cost(adj, metric))
        })
    }
}

// ── RoutePair ─────────────────────────────────────────────────────────────────

/// The two routes shown for one path query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePair {
    /// Minimizes geometric distance.
    pub distance: Route,
    /// Minimizes traffic-adjusted distance.
    pub traffic: Route,
}

impl RoutePair {
    /// Run both queries with `router`.
    pub fn compute<R: Router + ?Sized>(
        router: &R,
        graph: &RouteGraph,
        start: LocationId,
        end: LocationId,
    ) -> GraphResult<Self> {
        Ok(Self {
            distance: router.route(graph, start, end, Metric::Distance)?,
            traffic:  router.route(graph, start, end, Metric::Traffic)?,
        })
    }

    /// `true` when traffic changes which locations the best route visits.
    pub fn diverges(&self) -> bool {
        self.distance.locations != self.traffic.locations
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
pub trait Router {
    /// Compute a route from `from` to `to` minimizing `metric`.
    ///
    /// `from == to` yields the single-location route with cost 0.  Returns
    /// [`GraphError::NoRoute`] if `to` is unreachable and
    /// [`GraphError::LocationNotFound`] for an id outside the graph.
    fn route(
        &self,
        graph: &RouteGraph,
        from: LocationId,
        to: LocationId,
        metric: Metric,
    ) -> GraphResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm with a lazy-deletion binary heap.
///
/// Stops as soon as the target is popped, so distances to locations beyond
/// the target are not finalized.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        graph: &RouteGraph,
        from: LocationId,
        to: LocationId,
        metric: Metric,
    ) -> GraphResult<Route> {
        graph.get(from)?;
        graph.get(to)?;
        dijkstra(graph, from, to, metric)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(
    graph: &RouteGraph,
    from: LocationId,
    to: LocationId,
    metric: Metric,
) -> GraphResult<Route> {
    let n = graph.location_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev[v] = location that reached v; INVALID for unreached nodes and `from`.
    let mut prev = vec![LocationId::INVALID; n];

    dist[from.index()] = 0.0;

    let mut heap: PriorityQueue<LocationId> = PriorityQueue::with_capacity(n);
    heap.insert(from, 0.0);
    let mut pops = 0usize;

    while let Some((node, cost)) = heap.extract_min() {
        pops += 1;
        if node == to {
            trace!("dijkstra {from}→{to} ({metric:?}): {pops} pops, cost {cost}");
            return Ok(reconstruct(&prev, from, to, cost, metric));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        let Some(loc) = graph.location(node) else {
            continue;
        };
        for adj in loc.adjacencies() {
            let alt = cost + edge_cost(adj, metric);
            if alt < dist[adj.to.index()] {
                dist[adj.to.index()] = alt;
                prev[adj.to.index()] = node;
                heap.insert(adj.to, alt);
            }
        }
    }

    trace!("dijkstra {from}→{to} ({metric:?}): exhausted after {pops} pops");
    Err(GraphError::NoRoute { from, to })
}

fn reconstruct(
    prev: &[LocationId],
    from: LocationId,
    to: LocationId,
    total_cost: f64,
    metric: Metric,
) -> Route {
    let mut locations = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        if !cur.is_valid() {
            debug_assert!(false, "broken predecessor chain");
            break;
        }
        locations.push(cur);
    }
    locations.reverse();
    Route { locations, total_cost, metric }
}

//! `mv-graph` — location graph, spatial indexing, and routing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`location`] | `Location`, `Adjacency` (per-edge weights)                |
//! | [`graph`]    | `RouteGraph` (arena + R-tree), `RouteGraphBuilder`        |
//! | [`topology`] | `TopologyEntry` — declarative build input                 |
//! | [`queue`]    | `PriorityQueue` binary min-heap                           |
//! | [`router`]   | `Router` trait, `Metric`, `Route`, `RoutePair`, `DijkstraRouter` |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                            |
//!
//! # Lifecycle
//!
//! The graph is built once through [`RouteGraphBuilder`] (sequential
//! inserts, each linking only to locations inserted earlier) and is
//! read-only afterwards.  Queries borrow `&RouteGraph`, so the type system
//! rules out mutation during a query.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod graph;
pub mod location;
pub mod queue;
pub mod router;
pub mod topology;


pub use error::{GraphError, GraphResult};
pub use graph::{RouteGraph, RouteGraphBuilder};
pub use location::{Adjacency, Location};
pub use queue::PriorityQueue;
pub use router::{DijkstraRouter, Metric, Route, RoutePair, Router};
pub use topology::TopologyEntry;

//! `mv-core` — foundational types for the `mapviz` routing engine.
//!
//! This crate is a dependency of every other `mv-*` crate.  It has no `mv-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `LocationId`                                          |
//! | [`geo`]     | `Point`, Euclidean distance                           |
//! | [`rng`]     | `TrafficRng` (per-graph traffic factor sampling)      |
//! | [`config`]  | `MapConfig`, `TrafficRange`                           |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MapConfig, TrafficRange};
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::LocationId;
pub use rng::TrafficRng;

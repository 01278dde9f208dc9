//! city — route comparison demo for the mapviz engine.
//!
//! Builds the 55-location demo city, then plays the part of the map UI:
//! for a few start/end selections it asks for the plain-distance and the
//! traffic-adjusted route, and for a typed location it lists nearby
//! suggestions.
//!
//! Usage: `city [config.json]`.  The optional JSON file deserializes into
//! `MapConfig`; missing fields keep their defaults.  Set `RUST_LOG=debug` to
//! see build warnings for dropped forward references.

mod network;

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use mv_core::{MapConfig, Point};
use mv_graph::{GraphError, Route, RouteGraph};

use network::build_city;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Used when no config file is given, so runs are reproducible.
const SEED: u64 = 42;

/// Start/end selections, as if clicked on the map.
const QUERIES: &[(&str, &str)] = &[
    ("Sanj", "Lighthouse"),
    ("Countryside", "Mountain Trail"),
    ("Police HQ", "Skate Park"),
    ("Hi Bridge", "Hi Bridge"),
];

/// Location typed into the search box.
const SEARCH: &str = "Valo Tower";

/// Second, wider suggestion radius.
const WIDE_RADIUS: f64 = 150.0;

// ── Output helpers ────────────────────────────────────────────────────────────

fn route_names(graph: &RouteGraph, route: &Route) -> String {
    route
        .locations
        .iter()
        .filter_map(|&id| graph.location(id))
        .map(|loc| loc.name.as_str())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn load_config() -> Result<MapConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(MapConfig::seeded(SEED));
    };
    let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config: MapConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    info!("loaded config from {path}");
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    println!("=== city — mapviz route comparison ===");
    match config.seed {
        Some(seed) => println!("Traffic seed: {seed}"),
        None => println!("Traffic seed: random"),
    }
    println!();

    // 1. Build the graph.
    let t0 = Instant::now();
    let graph = build_city(&config)?;
    println!(
        "City: {} locations, {} edges (built in {:.3} ms)",
        graph.location_count(),
        graph.edge_count() / 2,
        t0.elapsed().as_secs_f64() * 1_000.0
    );
    println!();

    // 2. Two queries per selection: traffic off, then on.
    for &(start, end) in QUERIES {
        let (Some(s), Some(e)) = (graph.find(start), graph.find(end)) else {
            println!("{start} → {end}: location not found");
            continue;
        };
        match graph.route_pair(s, e) {
            Ok(pair) => {
                println!("{start} → {end}");
                println!(
                    "  distance ({:>7.1}): {}",
                    pair.distance.total_cost,
                    route_names(&graph, &pair.distance)
                );
                println!(
                    "  traffic  ({:>7.1}): {}",
                    pair.traffic.total_cost,
                    route_names(&graph, &pair.traffic)
                );
                if pair.diverges() {
                    println!("  traffic reroutes this trip");
                }
            }
            Err(GraphError::NoRoute { .. }) => println!("{start} → {end}: no path exists"),
            Err(e) => return Err(e.into()),
        }
        println!();
    }

    // 3. Nearby suggestions for the search box.
    for radius in [config.nearby_radius, WIDE_RADIUS] {
        match graph.nearby_by_name(SEARCH, radius) {
            Ok(ids) if ids.is_empty() => println!("Near {SEARCH} (≤ {radius}): nothing"),
            Ok(ids) => {
                let names: Vec<&str> = ids
                    .iter()
                    .filter_map(|&id| graph.location(id))
                    .map(|loc| loc.name.as_str())
                    .collect();
                println!("Near {SEARCH} (≤ {radius}): {}", names.join(", "));
            }
            Err(GraphError::UnknownLocation(name)) => println!("Location not found: {name}"),
            Err(e) => return Err(e.into()),
        }
    }

    // 4. A click at a map point.
    let click = Point::new(503.0, 296.0);
    match graph.location_at(click, config.select_tolerance) {
        Some(id) => {
            let name = graph.location(id).map_or("?", |loc| loc.name.as_str());
            println!("Click at {click} selects {name}");
        }
        None => println!("Click at {click} selects nothing"),
    }

    Ok(())
}

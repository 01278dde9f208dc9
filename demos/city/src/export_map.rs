//! Export the demo city and one route pair for an external renderer.
//!
//! Writes three JSON files to `output/city/`:
//!   - `locations.json` — `[{id, name, x, y}, …]`
//!   - `edges.json`     — `[{from, to, weight, traffic_weight, traffic_factor}, …]`
//!   - `routes.json`    — `{start, end, distance: {...}, traffic: {...}}`
//!
//! Run with: `cargo run -p city --bin export_map [start] [end]`

mod network;

use std::fs;

use anyhow::{Context, Result};
use log::info;
use serde_json::json;

use mv_core::MapConfig;

use network::build_city;

const SEED: u64 = 42;
const OUT_DIR: &str = "output/city";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let start = args.next().unwrap_or_else(|| "Sanj".to_owned());
    let end = args.next().unwrap_or_else(|| "Lighthouse".to_owned());

    let graph = build_city(&MapConfig::seeded(SEED))?;
    fs::create_dir_all(OUT_DIR)?;

    // ── locations.json ────────────────────────────────────────────────────────
    let locations: Vec<serde_json::Value> = graph
        .locations()
        .iter()
        .map(|loc| json!({ "id": loc.id, "name": loc.name, "x": loc.x(), "y": loc.y() }))
        .collect();
    fs::write(
        format!("{OUT_DIR}/locations.json"),
        serde_json::to_string_pretty(&locations)?,
    )?;
    info!("wrote {OUT_DIR}/locations.json ({} locations)", locations.len());

    // ── edges.json ────────────────────────────────────────────────────────────
    let edges: Vec<serde_json::Value> = graph
        .edges()
        .map(|(from, adj)| {
            json!({
                "from": from,
                "to": adj.to,
                "weight": adj.weight,
                "traffic_weight": adj.traffic_weight,
                "traffic_factor": adj.traffic_factor(),
            })
        })
        .collect();
    fs::write(
        format!("{OUT_DIR}/edges.json"),
        serde_json::to_string_pretty(&edges)?,
    )?;
    info!("wrote {OUT_DIR}/edges.json ({} edges)", edges.len());

    // ── routes.json ───────────────────────────────────────────────────────────
    let s = graph.find(&start).with_context(|| format!("no location named {start:?}"))?;
    let e = graph.find(&end).with_context(|| format!("no location named {end:?}"))?;
    let pair = graph
        .route_pair(s, e)
        .with_context(|| format!("routing {start} → {end}"))?;
    let routes = json!({ "start": start, "end": end, "distance": pair.distance, "traffic": pair.traffic });
    fs::write(
        format!("{OUT_DIR}/routes.json"),
        serde_json::to_string_pretty(&routes)?,
    )?;
    info!("wrote {OUT_DIR}/routes.json");

    Ok(())
}

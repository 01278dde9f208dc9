//! Shared demo city definition.
//!
//! 55 named locations on a 1200 × 900 canvas.  Entries are applied in
//! order; several list a neighbor that only appears later ("New Street" →
//! "Valo Tower"), and those links are dropped by the builder.
//! Both `city` and `export_map` call this.

use mv_core::MapConfig;
use mv_graph::{GraphResult, RouteGraph, TopologyEntry};

/// `(name, x, y, neighbors)` in insert order.
const CITY: &[(&str, f64, f64, &[&str])] = &[
    ("Sanj",              100.0,  300.0, &[]),
    ("New Street",        200.0,  200.0, &["Valo Tower"]),
    ("JJ Park",           300.0,  300.0, &["Sanj"]),
    ("FK Mall",           400.0,  200.0, &["New Street"]),
    ("Valo Tower",        500.0,  300.0, &["New Street", "JJ Park"]),
    ("Hi Bridge",         300.0,  400.0, &["Sanj", "New Street", "JJ Park"]),
    ("Central Station",   600.0,  100.0, &["FK Mall", "Valo Tower"]),
    ("Riverbank Park",    700.0,  200.0, &["Central Station", "FK Mall"]),
    ("North Square",      800.0,  300.0, &["Riverbank Park", "Valo Tower"]),
    ("South Gate",        100.0,  400.0, &["Sanj"]),
    ("Library",           150.0,  150.0, &["Sanj", "New Street"]),
    ("Museum",            250.0,  100.0, &["Library", "New Street"]),
    ("City Hall",         350.0,   50.0, &["Museum"]),
    ("Hospital",          500.0,   50.0, &["City Hall"]),
    ("Tech Hub",          600.0,   50.0, &["Hospital", "Central Station"]),
    ("Grand Theatre",     400.0,  400.0, &["Hi Bridge", "FK Mall"]),
    ("Shopping Plaza",    500.0,  400.0, &["Grand Theatre", "Valo Tower"]),
    ("Cinema Complex",    450.0,  300.0, &["FK Mall", "Shopping Plaza"]),
    ("University",        200.0,  500.0, &["South Gate", "Hi Bridge"]),
    ("City Park",         300.0,  500.0, &["University", "Hi Bridge"]),
    ("Downtown",          700.0,  400.0, &["Shopping Plaza", "North Square"]),
    ("Old Town",          800.0,  500.0, &["Downtown", "North Square"]),
    ("Sports Arena",      900.0,  600.0, &["Old Town"]),
    ("Bus Terminal",      200.0,  600.0, &["City Park"]),
    ("Train Station",     400.0,  600.0, &["Bus Terminal", "Grand Theatre"]),
    ("Harbor",           1000.0,  500.0, &["Old Town"]),
    ("West End",          200.0,  700.0, &["Bus Terminal"]),
    ("East Market",       800.0,  100.0, &["Riverbank Park", "North Square"]),
    ("Music Academy",     300.0,   50.0, &["City Hall"]),
    ("Botanical Garden",  900.0,  100.0, &["East Market"]),
    ("Art Gallery",       150.0,   50.0, &["Music Academy"]),
    ("Civic Center",      400.0,  450.0, &["Grand Theatre"]),
    ("Community Center",  300.0,  600.0, &["University"]),
    ("Residential Area",  600.0,  600.0, &["Shopping Plaza", "Train Station"]),
    ("Zoo",               700.0,  700.0, &["Sports Arena", "Residential Area"]),
    ("Airport",          1000.0,  300.0, &["Harbor"]),
    ("Suburban Town",     100.0,  750.0, &["West End"]),
    ("Business District", 400.0,  700.0, &["Train Station"]),
    ("Main Square",       200.0,   50.0, &["Art Gallery"]),
    ("Golf Course",       900.0,  700.0, &["Zoo"]),
    ("Beachside",        1100.0,  400.0, &["Harbor", "Airport"]),
    ("Metro Station",     600.0,  700.0, &["Residential Area"]),
    ("Stadium",           900.0,  400.0, &["Sports Arena"]),
    ("Pier",             1100.0,  600.0, &["Beachside"]),
    ("Observatory",       700.0,  100.0, &["Botanical Garden"]),
    ("Fire Station",      300.0,  100.0, &["Library"]),
    ("Police HQ",         200.0,  100.0, &["Fire Station"]),
    ("Post Office",       500.0,  450.0, &["Civic Center"]),
    ("Local Market",      600.0,  450.0, &["Post Office", "Downtown"]),
    ("Skate Park",        800.0,  800.0, &["Zoo", "Golf Course"]),
    ("Lakeview",          100.0,  900.0, &["Suburban Town"]),
    ("Mountain Trail",   1200.0,  500.0, &["Pier", "Beachside"]),
    ("Waterfall",        1200.0,  200.0, &["Mountain Trail", "Botanical Garden"]),
    ("Countryside",        50.0,  850.0, &["Lakeview"]),
    ("Lighthouse",       1100.0,  100.0, &["Botanical Garden", "Waterfall"]),
];

/// The city as an ordered topology batch.
pub fn city_topology() -> Vec<TopologyEntry> {
    CITY.iter()
        .map(|&(name, x, y, neighbors)| TopologyEntry::new(name, x, y, neighbors))
        .collect()
}

/// Build the demo city with `config`.
pub fn build_city(config: &MapConfig) -> GraphResult<RouteGraph> {
    RouteGraph::from_topology(&city_topology(), config)
}

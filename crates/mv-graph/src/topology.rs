//! Declarative build input.
//!
//! The presentation layer describes the map as an ordered list of entries;
//! each entry may only link to entries that appear before it.

/// One `(id, x, y, neighbor_ids)` build instruction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopologyEntry {
    pub id: String,
    pub x:  f64,
    pub y:  f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub neighbors: Vec<String>,
}

impl TopologyEntry {
    pub fn new<S: Into<String>>(id: S, x: f64, y: f64, neighbors: &[&str]) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            neighbors: neighbors.iter().map(|n| (*n).to_owned()).collect(),
        }
    }
}

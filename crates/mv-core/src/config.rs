//! Map configuration.
//!
//! Typically constructed by the application crate (or deserialized from a
//! TOML/JSON file with the `serde` feature) and handed to
//! `RouteGraphBuilder::with_config`.

use crate::{CoreError, CoreResult};

// ── TrafficRange ──────────────────────────────────────────────────────────────

/// Closed interval the per-edge traffic factor is drawn from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficRange {
    pub min: f64,
    pub max: f64,
}

impl TrafficRange {
    pub const DEFAULT: TrafficRange = TrafficRange { min: 0.75, max: 1.25 };

    pub fn new(min: f64, max: f64) -> CoreResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// `true` if `factor` lies inside the closed interval.
    #[inline]
    pub fn contains(&self, factor: f64) -> bool {
        (self.min..=self.max).contains(&factor)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(CoreError::Config(format!(
                "traffic range bounds must be finite (got {}..={})",
                self.min, self.max
            )));
        }
        if self.min <= 0.0 {
            return Err(CoreError::Config(format!(
                "traffic factor minimum must be positive (got {})",
                self.min
            )));
        }
        if self.min > self.max {
            return Err(CoreError::Config(format!(
                "traffic range is inverted ({} > {})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for TrafficRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ── MapConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for building and querying a route graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    /// Traffic RNG seed.  `None` seeds from OS entropy, so every build gets a
    /// different traffic picture.  The same seed always produces identical
    /// traffic factors.
    pub seed: Option<u64>,

    /// Interval the per-edge traffic factor is drawn from.
    /// Default: `[0.75, 1.25]`.
    pub traffic: TrafficRange,

    /// Default radius for nearby-location suggestions, in map units.
    /// Default: 100.
    pub nearby_radius: f64,

    /// Hit-test tolerance for selecting a location at a point, in map units.
    /// Default: 10.
    pub select_tolerance: f64,

    /// Fail the build on a neighbor id that has not been inserted yet (or on
    /// a self-reference) instead of silently skipping the edge.
    pub strict_neighbors: bool,
}

impl MapConfig {
    /// Same as [`Default`], but with a fixed traffic seed.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    pub fn validate(&self) -> CoreResult<()> {
        self.traffic.validate()?;
        if self.nearby_radius.is_nan() || self.nearby_radius < 0.0 {
            return Err(CoreError::Config(format!(
                "nearby radius must be non-negative (got {})",
                self.nearby_radius
            )));
        }
        if self.select_tolerance.is_nan() || self.select_tolerance < 0.0 {
            return Err(CoreError::Config(format!(
                "select tolerance must be non-negative (got {})",
                self.select_tolerance
            )));
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            seed:             None,
            traffic:          TrafficRange::DEFAULT,
            nearby_radius:    100.0,
            select_tolerance: 10.0,
            strict_neighbors: false,
        }
    }
}

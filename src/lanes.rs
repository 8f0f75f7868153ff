//! Enemy travel lane geometry.
//!
//! Lanes are hand-authored polylines in normalized map space
//! (`x, z` in `[0, 1]`). Wave analytics use the mean world-space length
//! across the three lanes as the canonical enemy travel distance; the
//! model deliberately ignores per-lane divergence in risk.

use serde::Serialize;

/// Map half-extents in world units. Normalized lane points map to
/// `[-half, +half]` on each axis.
pub const MAP_HALF_WIDTH: f64 = 12.0;
pub const MAP_HALF_HEIGHT: f64 = 9.0;

/// A point in normalized map space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LanePoint {
    pub x: f64,
    pub z: f64,
}

impl LanePoint {
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Convert to world space. `z` is flipped so that normalized 0 is the
    /// far edge of the map.
    pub fn to_world(&self, half_width: f64, half_height: f64) -> (f64, f64) {
        (
            self.x * 2.0 * half_width - half_width,
            (1.0 - self.z) * 2.0 * half_height - half_height,
        )
    }
}

/// An ordered, immutable sequence of normalized points.
#[derive(Debug, Clone, Serialize)]
pub struct LanePolyline {
    name: &'static str,
    points: Vec<LanePoint>,
}

impl LanePolyline {
    /// A polyline needs at least two points to have a length; anything
    /// shorter is an authoring error caught at construction.
    pub fn new(name: &'static str, points: Vec<LanePoint>) -> Self {
        assert!(points.len() >= 2, "lane '{}' needs at least 2 points", name);
        Self { name, points }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn points(&self) -> &[LanePoint] {
        &self.points
    }

    /// World-space length: sum of consecutive Euclidean segment lengths.
    pub fn world_length(&self, half_width: f64, half_height: f64) -> f64 {
        self.points
            .windows(2)
            .map(|seg| {
                let (x0, z0) = seg[0].to_world(half_width, half_height);
                let (x1, z1) = seg[1].to_world(half_width, half_height);
                ((x1 - x0).powi(2) + (z1 - z0).powi(2)).sqrt()
            })
            .sum()
    }
}

/// The three authored lanes plus the map extents they live in.
#[derive(Debug, Clone, Serialize)]
pub struct LaneGeometryModel {
    lanes: Vec<LanePolyline>,
    half_width: f64,
    half_height: f64,
}

impl LaneGeometryModel {
    /// The shipping three-lane map.
    pub fn standard() -> Self {
        let top = LanePolyline::new(
            "top",
            vec![
                LanePoint::new(0.04, 0.18),
                LanePoint::new(0.30, 0.20),
                LanePoint::new(0.50, 0.32),
                LanePoint::new(0.72, 0.30),
                LanePoint::new(0.96, 0.50),
            ],
        );
        let mid = LanePolyline::new(
            "mid",
            vec![
                LanePoint::new(0.04, 0.50),
                LanePoint::new(0.35, 0.48),
                LanePoint::new(0.65, 0.52),
                LanePoint::new(0.96, 0.50),
            ],
        );
        let bottom = LanePolyline::new(
            "bottom",
            vec![
                LanePoint::new(0.04, 0.82),
                LanePoint::new(0.28, 0.80),
                LanePoint::new(0.52, 0.68),
                LanePoint::new(0.74, 0.70),
                LanePoint::new(0.96, 0.50),
            ],
        );
        Self {
            lanes: vec![top, mid, bottom],
            half_width: MAP_HALF_WIDTH,
            half_height: MAP_HALF_HEIGHT,
        }
    }

    pub fn lanes(&self) -> &[LanePolyline] {
        &self.lanes
    }

    pub fn lane_length(&self, lane: &LanePolyline) -> f64 {
        lane.world_length(self.half_width, self.half_height)
    }

    /// Arithmetic mean world-space length across all lanes: the single
    /// canonical enemy travel distance used by the wave analytics.
    pub fn average_path_length(&self) -> f64 {
        let total: f64 = self
            .lanes
            .iter()
            .map(|lane| lane.world_length(self.half_width, self.half_height))
            .sum();
        total / self.lanes.len() as f64
    }
}

/// Canonical travel distance on the shipping map.
pub fn canonical_path_length() -> f64 {
    LaneGeometryModel::standard().average_path_length()
}

//! Named polygonal regions and per-move constraint enforcement.
//!
//! A region is an implicitly closed ring. The caller decides per search whether
//! the regions are boundaries (stay inside) or obstacles (stay outside); see
//! `RegionMode`. Rings with fewer than three distinct vertices enclose no area
//! and contribute no constraint.

use serde::{Deserialize, Serialize};

use crate::geom::{
    distance_point_to_segment, is_inside_ring, ring_edges, segments_intersect, Coordinate,
};

/// A named polygon used as a boundary or an obstacle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub vertices: Vec<Coordinate>,
}

impl Region {
    pub fn new(name: impl Into<String>, vertices: Vec<Coordinate>) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }

    /// Axis-aligned rectangle with corners `min` and `max`, counterclockwise.
    pub fn rectangle(name: impl Into<String>, min: Coordinate, max: Coordinate) -> Self {
        Self::new(
            name,
            vec![
                min,
                Coordinate::new(max.lng, min.lat),
                max,
                Coordinate::new(min.lng, max.lat),
            ],
        )
    }

    /// True when the ring has fewer than three distinct vertices.
    pub fn is_degenerate(&self) -> bool {
        let mut distinct: Vec<Coordinate> = Vec::with_capacity(3);
        for v in &self.vertices {
            if !distinct.contains(v) {
                distinct.push(*v);
                if distinct.len() == 3 {
                    return false;
                }
            }
        }
        true
    }

    #[inline]
    pub fn contains(&self, p: Coordinate) -> bool {
        is_inside_ring(p, &self.vertices)
    }

    #[inline]
    pub fn is_outside(&self, p: Coordinate) -> bool {
        !self.contains(p)
    }

    /// Edges including the closing edge last → first.
    pub fn edges(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        ring_edges(&self.vertices)
    }

    /// True when segment ab properly crosses any edge of the ring.
    pub fn is_crossed_by(&self, a: Coordinate, b: Coordinate) -> bool {
        self.edges().any(|(v, w)| segments_intersect(a, b, v, w))
    }

    /// Distance from `p` to the nearest edge; `f64::INFINITY` for an edgeless ring.
    pub fn wall_distance(&self, p: Coordinate) -> f64 {
        self.edges()
            .map(|(v, w)| distance_point_to_segment(p, v, w))
            .fold(f64::INFINITY, f64::min)
    }
}

/// How a search interprets its region list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionMode {
    /// Every position must stay inside every region.
    Boundary,
    /// Every position must stay outside every region.
    Exclusion,
}

/// Move validator for one search: the non-degenerate regions, the mode, and the
/// agent's wall clearance.
#[derive(Clone, Debug)]
pub struct MoveCheck<'a> {
    regions: Vec<&'a Region>,
    mode: RegionMode,
    safety_margin: f64,
}

impl<'a> MoveCheck<'a> {
    pub fn new(regions: &'a [Region], mode: RegionMode, safety_margin: f64) -> Self {
        let regions = regions
            .iter()
            .filter(|r| {
                let skip = r.is_degenerate();
                if skip {
                    tracing::debug!(region = %r.name, "skipping degenerate region");
                }
                !skip
            })
            .collect();
        Self {
            regions,
            mode,
            safety_margin: safety_margin.max(0.0),
        }
    }

    #[inline]
    pub fn mode(&self) -> RegionMode {
        self.mode
    }

    /// Number of regions that actually constrain moves.
    #[inline]
    pub fn active_regions(&self) -> usize {
        self.regions.len()
    }

    /// True when the move a → b must not be taken.
    pub fn rejects(&self, a: Coordinate, b: Coordinate) -> bool {
        if self.regions.is_empty() {
            return false;
        }
        match self.mode {
            RegionMode::Boundary => self.leaves_boundary(a, b),
            RegionMode::Exclusion => self.hits_obstacle(a, b),
        }
    }

    fn leaves_boundary(&self, a: Coordinate, b: Coordinate) -> bool {
        for r in &self.regions {
            if r.is_outside(a) || r.is_outside(b) || r.is_crossed_by(a, b) {
                return true;
            }
        }
        self.safety_margin > 0.0 && self.nearest_wall(b) < self.safety_margin
    }

    fn hits_obstacle(&self, a: Coordinate, b: Coordinate) -> bool {
        self.regions
            .iter()
            .any(|r| r.contains(a) || r.contains(b) || r.is_crossed_by(a, b))
    }

    /// Nearest wall across all active regions.
    pub fn nearest_wall(&self, p: Coordinate) -> f64 {
        self.regions
            .iter()
            .map(|r| r.wall_distance(p))
            .fold(f64::INFINITY, f64::min)
    }
}

//! Region sources: user-drawn tracks with holes and the procedural wall.
//!
//! A track arrives as an outer ring plus hole rings (the infield). The search
//! takes plain rings, so holes are stitched into the outer ring: each hole is
//! appended, closed, and bridged back to the outer ring's first vertex. An open
//! outer ring is closed first so the bridge starts from its anchor. The bridge
//! is walked twice (out and back), which keeps ray-crossing parity intact, but
//! it also acts as a thin wall that moves cannot cross.

use serde::{Deserialize, Serialize};

use crate::geom::Coordinate;
use crate::region::Region;

/// Polygon with optional holes, rings as `[lng, lat]` pairs (GeoJSON order).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonWithHoles {
    pub outer: Vec<Coordinate>,
    #[serde(default)]
    pub holes: Vec<Vec<Coordinate>>,
}

impl PolygonWithHoles {
    /// Build from nested rings; the first ring is the outer boundary.
    pub fn from_rings(rings: &[Vec<[f64; 2]>]) -> Self {
        let to_ring = |r: &Vec<[f64; 2]>| -> Vec<Coordinate> {
            r.iter().map(|&[lng, lat]| Coordinate::new(lng, lat)).collect()
        };
        let mut it = rings.iter();
        let outer = it.next().map(to_ring).unwrap_or_default();
        Self {
            outer,
            holes: it.map(to_ring).collect(),
        }
    }

    /// Single boundary ring: outer, then each hole closed and bridged back.
    ///
    /// Returns `None` when there is no outer ring.
    pub fn flatten(&self, name: impl Into<String>) -> Option<Region> {
        let anchor = *self.outer.first()?;
        let mut ring = self.outer.clone();
        for hole in &self.holes {
            let Some(&first) = hole.first() else {
                continue;
            };
            if ring.last() != Some(&anchor) {
                ring.push(anchor);
            }
            ring.extend_from_slice(hole);
            ring.push(first);
            ring.push(anchor);
        }
        Some(Region::new(name, ring))
    }
}

/// Half-width (lng) and half-height (lat) of the procedural wall, in degrees.
pub const WALL_HALF_EXTENT: (f64, f64) = (0.0005, 0.001);

/// A rectangular obstacle centred on the start-goal midpoint.
///
/// Used when a race has no track, so that every racer has something to route around.
pub fn procedural_wall(start: Coordinate, goal: Coordinate) -> Region {
    let mid = Coordinate::new((start.lng + goal.lng) / 2.0, (start.lat + goal.lat) / 2.0);
    let (hx, hy) = WALL_HALF_EXTENT;
    Region::rectangle(
        "Procedural Wall Obstacle",
        Coordinate::new(mid.lng - hx, mid.lat - hy),
        Coordinate::new(mid.lng + hx, mid.lat + hy),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lng: f64, lat: f64) -> Coordinate {
        Coordinate::new(lng, lat)
    }

    fn ring(pts: &[(f64, f64)]) -> Vec<[f64; 2]> {
        pts.iter().map(|&(x, y)| [x, y]).collect()
    }

    fn circuit() -> PolygonWithHoles {
        PolygonWithHoles::from_rings(&[
            ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]),
            ring(&[(3.0, 3.0), (7.0, 3.0), (7.0, 7.0), (3.0, 7.0), (3.0, 3.0)]),
        ])
    }

    #[test]
    fn flatten_appends_closes_and_bridges() {
        let r = circuit().flatten("track").unwrap();
        assert_eq!(r.name, "track");
        assert_eq!(r.vertices.len(), 5 + 5 + 2);
        assert_eq!(r.vertices[5], c(3.0, 3.0));
        assert_eq!(r.vertices[10], c(3.0, 3.0));
        assert_eq!(*r.vertices.last().unwrap(), c(0.0, 0.0));
    }

    #[test]
    fn flattened_track_excludes_infield() {
        let r = circuit().flatten("track").unwrap();
        // on the racing surface, away from the bridge diagonal
        assert!(r.contains(c(8.5, 1.5)));
        assert!(r.contains(c(1.0, 8.0)));
        // infield and outside
        assert!(!r.contains(c(5.0, 5.5)));
        assert!(!r.contains(c(11.0, 5.0)));
    }

    #[test]
    fn open_outer_ring_is_closed_before_the_bridge() {
        let p = PolygonWithHoles::from_rings(&[
            ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            ring(&[(3.0, 3.0), (7.0, 3.0), (7.0, 7.0), (3.0, 7.0)]),
        ]);
        let r = p.flatten("t").unwrap();
        assert_eq!(r.vertices[4], c(0.0, 0.0));
        assert_eq!(r.vertices.len(), 4 + 1 + 4 + 2);
        // the corner between the last outer vertex, the hole, and the anchor
        assert!(r.contains(c(1.0, 5.0)));
        assert!(r.contains(c(2.0, 8.0)));
        assert!(!r.contains(c(5.0, 5.5)));
    }

    #[test]
    fn without_holes_the_outer_ring_is_kept() {
        let p = PolygonWithHoles {
            outer: vec![c(0.0, 0.0), c(1.0, 0.0), c(0.0, 1.0)],
            holes: vec![vec![]],
        };
        assert_eq!(p.flatten("t").unwrap().vertices, p.outer);
        assert!(PolygonWithHoles::default().flatten("t").is_none());
    }

    #[test]
    fn wall_sits_between_start_and_goal() {
        let start = c(-3.1880, 55.9440);
        let goal = c(-3.1860, 55.9440);
        let wall = procedural_wall(start, goal);
        assert!(wall.contains(c(-3.1870, 55.9440)));
        assert!(!wall.contains(start));
        assert!(!wall.contains(goal));
        assert!(wall.is_crossed_by(start, goal));
    }
}

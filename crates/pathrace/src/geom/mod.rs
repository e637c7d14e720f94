//! Planar geometry on (longitude, latitude) pairs.
//!
//! Purpose
//! - Provide the exact predicates the search needs for boundary enforcement:
//!   orientation, strict segment crossing, point-to-segment distance, and
//!   ray-crossing containment against implicitly closed rings.
//! - Provide the quantized `CoordinateKey` used to identify search nodes.
//!
//! Conventions
//! - Coordinates are treated as planar (no geodesic correction). Headings are
//!   measured in degrees counterclockwise from east, so 90° points north.
//! - All predicates are pure and work on coordinate differences, which keeps
//!   them stable at |lng| ≈ 180 with deltas around 1e-5.
//!
//! Known limitation
//! - `segments_intersect` reports proper crossings only. Collinear overlap and
//!   touching endpoints are not crossings.

mod predicates;
mod types;

pub use predicates::{
    distance, distance_point_to_segment, is_inside_ring, is_outside_ring, next_position,
    orientation, ring_edges, segments_intersect,
};
pub use types::{Coordinate, CoordinateKey};

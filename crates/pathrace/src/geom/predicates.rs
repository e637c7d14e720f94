//! Exact 2D predicates used by region enforcement.
//!
//! References
//! - Code cross-refs: `types::Coordinate`, `crate::region::Region`

use super::types::Coordinate;

/// Signed doubled area of triangle (a, b, c).
///
/// Positive when a→b→c turns counterclockwise, negative when clockwise, zero
/// when collinear.
#[inline]
pub fn orientation(a: Coordinate, b: Coordinate, c: Coordinate) -> f64 {
    let ab = b.to_vec() - a.to_vec();
    let ac = c.to_vec() - a.to_vec();
    ab.x * ac.y - ab.y * ac.x
}

/// Strict proper crossing of segments p1p2 and p3p4.
///
/// Each segment must have its endpoints strictly on opposite sides of the other
/// segment's supporting line. Touching endpoints and collinear overlap return `false`.
pub fn segments_intersect(p1: Coordinate, p2: Coordinate, p3: Coordinate, p4: Coordinate) -> bool {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);
    opposite(d1, d2) && opposite(d3, d4)
}

#[inline]
fn opposite(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

/// Euclidean distance between two coordinates (planar).
#[inline]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    (b.to_vec() - a.to_vec()).norm()
}

/// Distance from `p` to the closed segment vw.
///
/// The projection parameter is clamped to [0, 1]; a degenerate segment (v == w)
/// yields the distance to `v`.
pub fn distance_point_to_segment(p: Coordinate, v: Coordinate, w: Coordinate) -> f64 {
    let vw = w.to_vec() - v.to_vec();
    let vp = p.to_vec() - v.to_vec();
    let len2 = vw.norm_squared();
    if len2 == 0.0 {
        return vp.norm();
    }
    let t = (vp.dot(&vw) / len2).clamp(0.0, 1.0);
    (vp - vw * t).norm()
}

/// Edges of an implicitly closed ring, including the closing edge last → first.
///
/// Yields nothing for fewer than two vertices.
pub fn ring_edges(ring: &[Coordinate]) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
    let n = if ring.len() < 2 { 0 } else { ring.len() };
    (0..n).map(move |i| (ring[i], ring[(i + 1) % n]))
}

/// Ray-crossing containment against an implicitly closed ring.
///
/// A horizontal ray is cast towards +lng; each edge straddling the point's
/// latitude toggles the result. Points exactly on an edge may land on either side.
pub fn is_inside_ring(p: Coordinate, ring: &[Coordinate]) -> bool {
    let mut inside = false;
    for (a, b) in ring_edges(ring) {
        if (a.lat > p.lat) != (b.lat > p.lat) {
            let x = (b.lng - a.lng) * (p.lat - a.lat) / (b.lat - a.lat) + a.lng;
            if p.lng < x {
                inside = !inside;
            }
        }
    }
    inside
}

#[inline]
pub fn is_outside_ring(p: Coordinate, ring: &[Coordinate]) -> bool {
    !is_inside_ring(p, ring)
}

/// Position reached by moving `step` along `heading_deg` (0° = east, 90° = north).
#[inline]
pub fn next_position(from: Coordinate, heading_deg: f64, step: f64) -> Coordinate {
    let (s, c) = heading_deg.to_radians().sin_cos();
    Coordinate::new(from.lng + step * c, from.lat + step * s)
}

//! Coordinate value type and its quantized map key.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A (longitude, latitude) pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.lng, self.lat)
    }

    #[inline]
    pub fn from_vec(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }

    /// Key this coordinate at `scale` units per degree (e.g. `1e9` keeps nine decimals).
    #[inline]
    pub fn key(self, scale: f64) -> CoordinateKey {
        CoordinateKey::new(self, scale)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lng, self.lat)
    }
}

/// Fixed-precision identity of a coordinate for hash-map bookkeeping.
///
/// Two coordinates that differ only by rounding noise below `1/scale` map to the
/// same key, so the best-known-node map does not grow duplicate entries for
/// positions reached along different move orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordinateKey {
    pub lng: i64,
    pub lat: i64,
}

impl CoordinateKey {
    #[inline]
    pub fn new(c: Coordinate, scale: f64) -> Self {
        Self {
            lng: quantize(c.lng, scale),
            lat: quantize(c.lat, scale),
        }
    }
}

#[inline]
fn quantize(x: f64, scale: f64) -> i64 {
    // `as` saturates on overflow and maps NaN to 0; both are acceptable for a key.
    (x * scale).round() as i64
}

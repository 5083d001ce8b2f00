//! Leg geometry: decoding encoded paths and computing bounds.
//!
//! OTP ships each leg's traveled line as a Google-style encoded polyline
//! (precision 5). Coordinates are `geo::Coord` with `x` = longitude and
//! `y` = latitude, matching the GeoJSON axis order used by map renderers.

use geo::{Coord, LineString, Rect};

/// Precision OTP uses when encoding leg geometry.
pub const OTP_POLYLINE_PRECISION: u32 = 5;

/// A (longitude, latitude) pair.
pub type LngLat = Coord<f64>;

/// Error returned when an encoded path cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid encoded path: {reason}")]
pub struct InvalidPath {
    reason: String,
}

/// Decode an OTP encoded path into an ordered line of coordinates.
///
/// Pure and deterministic: decoding the same string twice yields identical
/// lines. A path with fewer than two points decodes fine; callers decide
/// whether that is meaningful.
///
/// # Examples
///
/// ```
/// use itinerary_server::geometry::decode_path;
///
/// let line = decode_path("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
/// let first = line.0[0];
/// assert!((first.x - -120.2).abs() < 1e-9);
/// assert!((first.y - 38.5).abs() < 1e-9);
/// ```
pub fn decode_path(encoded: &str) -> Result<LineString<f64>, InvalidPath> {
    polyline::decode_polyline(encoded, OTP_POLYLINE_PRECISION).map_err(|e| InvalidPath {
        reason: e.to_string(),
    })
}

/// Minimal axis-aligned rectangle covering a set of coordinates.
///
/// Starts empty and grows with [`Bounds::extend`]. Extension is commutative
/// and associative, so the result never depends on the order coordinates
/// were seen in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    rect: Option<Rect<f64>>,
}

impl Bounds {
    /// An empty bound that contains nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Grow the bound so it covers `coord`.
    pub fn extend(&mut self, coord: LngLat) {
        self.rect = Some(match self.rect {
            None => Rect::new(coord, coord),
            Some(rect) => {
                let min = rect.min();
                let max = rect.max();
                Rect::new(
                    Coord {
                        x: min.x.min(coord.x),
                        y: min.y.min(coord.y),
                    },
                    Coord {
                        x: max.x.max(coord.x),
                        y: max.y.max(coord.y),
                    },
                )
            }
        });
    }

    /// Returns true if no coordinate has been added yet.
    pub fn is_empty(&self) -> bool {
        self.rect.is_none()
    }

    /// The covering rectangle, if any coordinate has been added.
    pub fn rect(&self) -> Option<Rect<f64>> {
        self.rect
    }

    /// South-west corner (minimum longitude and latitude).
    pub fn south_west(&self) -> Option<LngLat> {
        self.rect.map(|r| r.min())
    }

    /// North-east corner (maximum longitude and latitude).
    pub fn north_east(&self) -> Option<LngLat> {
        self.rect.map(|r| r.max())
    }

    /// Returns true if `coord` lies inside or on the edge of the bound.
    pub fn contains(&self, coord: &LngLat) -> bool {
        self.rect.is_some_and(|r| {
            let (min, max) = (r.min(), r.max());
            min.x <= coord.x && coord.x <= max.x && min.y <= coord.y && coord.y <= max.y
        })
    }
}

impl Extend<LngLat> for Bounds {
    fn extend<I: IntoIterator<Item = LngLat>>(&mut self, iter: I) {
        for coord in iter {
            Bounds::extend(self, coord);
        }
    }
}

impl FromIterator<LngLat> for Bounds {
    fn from_iter<I: IntoIterator<Item = LngLat>>(iter: I) -> Self {
        let mut bounds = Bounds::empty();
        Extend::extend(&mut bounds, iter);
        bounds
    }
}

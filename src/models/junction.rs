use serde::{Deserialize, Serialize};

/// A geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned box enclosing a set of coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    /// Smallest bounds containing every point, or `None` for an empty slice
    #[must_use]
    pub fn enclosing(points: &[Coordinate]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self { south_west: *first, north_east: *first };
        for point in rest {
            bounds.south_west.lat = bounds.south_west.lat.min(point.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(point.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(point.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(point.lng);
        }
        Some(bounds)
    }
}

/// A named point of the road network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Junction {
    pub id: String,
    pub coordinate: Coordinate,
}

impl Junction {
    #[must_use]
    pub fn new(id: impl Into<String>, coordinate: Coordinate) -> Self {
        Self { id: id.into(), coordinate }
    }

    /// Human-readable marker label; identifiers use underscores in place of spaces
    #[must_use]
    pub fn label(&self) -> String {
        self.id.replace('_', " ")
    }
}

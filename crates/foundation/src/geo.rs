/// A named geographic location from the static catalog.
///
/// `name` is the unique key; catalog data is reference data and is never
/// mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }
}

/// Geographic extent represented by a rendering surface.
///
/// Invariant: `max_lon > min_lon` and `max_lat > min_lat`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MapBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl MapBounds {
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        debug_assert!(max_lon > min_lon);
        debug_assert!(max_lat > min_lat);
        Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        }
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// Default extent covering Germany, matching the bundled base map.
pub const GERMANY_BOUNDS: MapBounds = MapBounds {
    min_lon: 5.5,
    max_lon: 15.5,
    min_lat: 47.0,
    max_lat: 55.5,
};

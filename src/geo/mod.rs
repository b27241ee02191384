use serde::{Deserialize, Serialize};

/// A point given as raw latitude/longitude degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planar distance over the raw coordinate values. This is not a
    /// great-circle distance; match radii and fares are expressed in the
    /// same units.
    pub fn distance_to(&self, other: &Location) -> f64 {
        planar_distance(self, other)
    }
}

pub fn planar_distance(a: &Location, b: &Location) -> f64 {
    let delta_lat = a.lat - b.lat;
    let delta_lng = a.lng - b.lng;

    (delta_lat.powi(2) + delta_lng.powi(2)).sqrt()
}

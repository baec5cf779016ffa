use std::fmt;

// The Earth's radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

pub const LAT_DEG_MIN: f64 = -90.0;
pub const LAT_DEG_MAX: f64 = 90.0;
pub const LNG_DEG_MIN: f64 = -180.0;
pub const LNG_DEG_MAX: f64 = 180.0;

pub fn is_valid_lat_deg(lat: f64) -> bool {
    lat.is_finite() && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat)
}

pub fn is_valid_lng_deg(lng: f64) -> bool {
    lng.is_finite() && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng)
}

/// A point on the map, given as latitude/longitude in degrees.
///
/// Both components of a `MapPoint` are always finite and within
/// the valid coordinate ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat_deg: f64,
    lng_deg: f64,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Option<Self> {
        if !is_valid_lat_deg(lat_deg) || !is_valid_lng_deg(lng_deg) {
            return None;
        }
        Some(Self { lat_deg, lng_deg })
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat_deg
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng_deg
    }

    /// Great-circle distance to another point (Haversine).
    pub fn distance_km(self, other: Self) -> f64 {
        let lat1 = self.lat_deg.to_radians();
        let lat2 = other.lat_deg.to_radians();
        let dlat = (other.lat_deg - self.lat_deg).to_radians();
        let dlng = (other.lng_deg - self.lng_deg).to_radians();

        let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
            + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat_deg, self.lng_deg)
    }
}

/// Renders meters below 1 km, otherwise kilometers with one decimal place.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else {
        format!("{:.1} km", km)
    }
}

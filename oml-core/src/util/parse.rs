use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    // Coordinates embedded in a place reference, e.g.
    // ".../place/Blue+Tokai/@12.97,77.59,17z/data=!3m1!4b1!4m6!3m5!...!3d12.9716!4d77.5946"
    static ref PLACE_FRAGMENT: Regex =
        Regex::new(r"!3d(-?\d+(?:\.\d+)?)!4d(-?\d+(?:\.\d+)?)").unwrap();
    // Viewport center, e.g. ".../@12.9716,77.5946,17z"
    static ref VIEWPORT_FRAGMENT: Regex =
        Regex::new(r"@(-?\d+(?:\.\d+)?),(-?\d+(?:\.\d+)?)").unwrap();
}

/// Extracts an embedded coordinate pair from a map-service URL.
///
/// The place fragment takes precedence over the viewport center
/// because the viewport is only an approximation of the place.
/// Returns the raw pair without range validation; `None` if the
/// input is not a URL or carries no coordinates. Never falls
/// back to (0, 0).
pub fn extract_lat_lng_from_url(source_url: &str) -> Option<(f64, f64)> {
    let url = Url::parse(source_url).ok()?;
    let haystack = url.as_str();
    let captures = PLACE_FRAGMENT
        .captures(haystack)
        .or_else(|| VIEWPORT_FRAGMENT.captures(haystack))?;
    let lat = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let lng = captures.get(2)?.as_str().parse::<f64>().ok()?;
    Some((lat, lng))
}

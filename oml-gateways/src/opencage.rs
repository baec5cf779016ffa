use geocoding::{Forward, Opencage};

use oml_core::{entities::MapPoint, gateways::place_search::PlaceSearchGateway};

/// Forward geocoding backed by the OpenCage API.
pub struct OpenCage {
    api_key: Option<String>,
}

impl OpenCage {
    pub fn new(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            log::warn!("No OpenCage API key found: place queries cannot be resolved");
        }
        Self { api_key }
    }
}

fn oc_search_place(api_key: String, query: &str) -> Option<MapPoint> {
    let oc_req = Opencage::new(api_key);
    match oc_req.forward(query) {
        Ok(res) => {
            if let Some(point) = res.first() {
                log::debug!("Resolved place query '{}': {:?}", query, point);
                // x = longitude, y = latitude
                return MapPoint::try_from_lat_lng_deg(point.y(), point.x());
            }
        }
        Err(err) => {
            log::warn!("Failed to resolve place query '{}': {}", query, err);
        }
    }
    None
}

impl PlaceSearchGateway for OpenCage {
    fn search_place(&self, query: &str) -> Option<MapPoint> {
        if query.trim().is_empty() {
            return None;
        }
        self.api_key
            .as_ref()
            .and_then(|key| oc_search_place(key.clone(), query))
    }
}

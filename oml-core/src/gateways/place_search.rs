use crate::entities::MapPoint;

/// Free-text place lookup. Implementations return the geometry
/// of the first search result, if any.
pub trait PlaceSearchGateway {
    fn search_place(&self, query: &str) -> Option<MapPoint>;
}

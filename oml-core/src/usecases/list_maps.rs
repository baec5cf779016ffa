use super::prelude::*;

pub const DEFAULT_PAGE_LIMIT: u64 = 20;
pub const MAX_PAGE_LIMIT: u64 = 100;

#[derive(Debug, Clone)]
pub struct MapListing {
    pub items: Vec<Map>,
    pub total: usize,
}

/// Paginated listing of all maps, most recently created first.
pub fn list_maps<R: MapRepo>(repo: &R, pagination: &Pagination) -> Result<MapListing> {
    if let Some(limit) = pagination.limit {
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(Error::InvalidLimit);
        }
    }
    let pagination = Pagination {
        offset: pagination.offset,
        limit: Some(pagination.limit.unwrap_or(DEFAULT_PAGE_LIMIT)),
    };
    let items = repo.recent_maps(&pagination)?;
    let total = repo.count_maps()?;
    Ok(MapListing { items, total })
}

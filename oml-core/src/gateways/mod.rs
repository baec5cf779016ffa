pub mod identity;
pub mod place_search;
pub mod storage;

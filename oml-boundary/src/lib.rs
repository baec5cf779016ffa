//! Serializable, anemic data structures for accessing the
//! OpenMapList API in a type-safe manner.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Map {
    pub id                : String,
    pub slug              : String,
    pub title             : String,
    pub short_description : String,
    pub body              : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url       : Option<String>,
    pub owner_id          : String,
    pub created_at        : i64,
    pub updated_at        : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct MapListing {
    pub items: Vec<Map>,
    pub total: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewMap {
    pub title: String,
    pub short_description: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct MapUpdate {
    pub title: String,
    pub short_description: String,
    pub body: String,
}

/// Compact acknowledgement returned by map mutations.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct MapRef {
    pub id: String,
    pub title: String,
    pub slug: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Location {
    pub id          : String,
    pub map_id      : String,
    pub creator_id  : String,
    pub name        : String,
    pub lat         : f64,
    pub lng         : f64,
    pub source_url  : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note        : Option<String>,
    pub status      : ModerationStatus,
    pub is_approved : bool,
    pub created_at  : i64,
    /// Only rendered for "near me" style listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance    : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewLocation {
    pub name: String,
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Review {
    pub status: ModerationStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PendingLocation {
    #[serde(flatten)]
    pub location: Location,
    pub submitter: SubmitterProfile,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SubmitterProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct User {
    pub id          : String,
    pub email       : String,
    pub first_name  : String,
    pub last_name   : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city        : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CurrentUser {
    #[serde(flatten)]
    pub user: User,
    pub is_new: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct VoteStatusRequest {
    pub map_ids: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SlugAvailability {
    pub available: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct StoredImage {
    pub url: String,
}

/// Error responses of the JSON API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{http_status}: {message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

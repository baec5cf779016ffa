#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # oml-entities
//!
//! Reusable, agnostic domain entities for OpenMapList.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod email;
pub mod geo;
pub mod id;
pub mod location;
pub mod map;
pub mod moderation;
pub mod slug;
pub mod time;
pub mod user;
pub mod vote;

#[cfg(feature = "url")]
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;

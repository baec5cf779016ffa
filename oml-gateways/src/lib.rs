pub mod media_store;
pub mod oidc;
pub mod opencage;

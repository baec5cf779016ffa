use crate::entities::*;

/// Identity attributes as reported by the external
/// authentication provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderIdentity {
    pub id: Id,
    pub email: EmailAddress,
    pub full_name: Option<String>,
    pub picture_url: Option<String>,
}

/// Verifies opaque bearer tokens against the authentication
/// provider. The OAuth handshake itself never reaches the core.
pub trait IdentityGateway {
    fn verify_token(&self, token: &str) -> Option<ProviderIdentity>;
}

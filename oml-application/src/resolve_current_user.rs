use oml_core::gateways::identity::IdentityGateway;

use super::*;
use usecases::{Error, ResolvedIdentity};

/// Resolves the bearer token of a request into a user profile.
///
/// The profile is created from the provider attributes on first
/// sight; a returning user keeps the stored profile.
pub fn resolve_current_user(
    connections: &sqlite::Connections,
    identities: &dyn IdentityGateway,
    token: &str,
) -> Result<ResolvedIdentity> {
    let Some(identity) = identities.verify_token(token) else {
        debug!("Rejecting request with unverifiable bearer token");
        return Err(Error::Unauthorized.into());
    };
    let resolved = connections
        .exclusive()?
        .transaction(|conn| usecases::resolve_identity(conn, identity))?;
    Ok(resolved)
}

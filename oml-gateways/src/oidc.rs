use std::time::Duration;

use serde::Deserialize;

use oml_core::{
    entities::EmailAddress,
    gateways::identity::{IdentityGateway, ProviderIdentity},
};

/// Resolves bearer tokens against the userinfo endpoint of an
/// OpenID Connect provider.
pub struct OidcUserinfo {
    userinfo_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct UserinfoClaims {
    sub: String,
    email: String,
    name: Option<String>,
    picture: Option<String>,
}

impl OidcUserinfo {
    pub fn new(userinfo_url: String) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            userinfo_url,
            client,
        })
    }

    fn fetch_claims(&self, token: &str) -> anyhow::Result<UserinfoClaims> {
        let response = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(token)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}

impl IdentityGateway for OidcUserinfo {
    fn verify_token(&self, token: &str) -> Option<ProviderIdentity> {
        let claims = match self.fetch_claims(token) {
            Ok(claims) => claims,
            Err(err) => {
                log::debug!("Token verification failed: {err}");
                return None;
            }
        };
        let email = match claims.email.parse::<EmailAddress>() {
            Ok(email) => email,
            Err(err) => {
                log::warn!(
                    "Identity provider reported an unparsable email address for subject {}: {err}",
                    claims.sub
                );
                return None;
            }
        };
        Some(ProviderIdentity {
            id: claims.sub.into(),
            email,
            full_name: claims.name,
            picture_url: claims.picture,
        })
    }
}

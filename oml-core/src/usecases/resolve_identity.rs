use super::prelude::*;
use crate::{gateways::identity::ProviderIdentity, util::validate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub user: User,
    pub is_new: bool,
}

/// Resolves a provider identity into a durable user profile,
/// creating the profile on first sight.
///
/// Creation goes through an atomic upsert keyed on the provider
/// id, so two concurrent first sign-ins of the same identity
/// cannot produce duplicate rows.
pub fn resolve_identity<R: UserRepo>(
    repo: &R,
    identity: ProviderIdentity,
) -> Result<ResolvedIdentity> {
    if !validate::is_valid_email(identity.email.as_str()) {
        return Err(Error::Email);
    }
    if let Some(user) = repo.try_get_user(identity.id.as_str())? {
        return Ok(ResolvedIdentity {
            user,
            is_new: false,
        });
    }
    let (first_name, last_name) = split_display_name(&identity);
    let now = Timestamp::now();
    let user = User {
        id: identity.id,
        email: identity.email,
        first_name,
        last_name,
        picture_url: identity.picture_url,
        city: None,
        created_at: now,
        updated_at: now,
    };
    log::debug!("Creating new user profile: id = {}", user.id);
    repo.create_or_update_user(&user)?;
    let user = repo.get_user(user.id.as_str())?;
    Ok(ResolvedIdentity { user, is_new: true })
}

// Splits a full display name on the first whitespace run. A
// missing name falls back to the local part of the email address
// or the literal "User".
fn split_display_name(identity: &ProviderIdentity) -> (String, String) {
    let full_name = identity
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());
    match full_name {
        Some(name) => match name.split_once(char::is_whitespace) {
            Some((first, last)) => (first.to_owned(), last.trim_start().to_owned()),
            None => (name.to_owned(), String::new()),
        },
        None => {
            let local = identity.email.local_part();
            if local.is_empty() {
                ("User".to_owned(), String::new())
            } else {
                (local.to_owned(), String::new())
            }
        }
    }
}

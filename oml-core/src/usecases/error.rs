use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The short description is invalid")]
    ShortDescription,
    #[error("The body is invalid")]
    Body,
    #[error("The location name is invalid")]
    LocationName,
    #[error("Invalid email address")]
    Email,
    #[error("The source URL contains no coordinates")]
    SourceUrl,
    #[error("No place found for the given query")]
    PlaceNotFound,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid moderation status")]
    ModerationStatus,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("Missing id list")]
    EmptyIdList,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<oml_entities::email::EmailAddressParseError> for Error {
    fn from(_: oml_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<oml_entities::moderation::InvalidModerationStatusPrimitive> for Error {
    fn from(_: oml_entities::moderation::InvalidModerationStatusPrimitive) -> Self {
        Self::ModerationStatus
    }
}

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{EnumCount, EnumIter, EnumString};
use thiserror::Error;

pub type ModerationStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModerationStatus {
    Rejected = -1,
    Pending  =  0,
    Approved =  1,
}

impl ModerationStatus {
    /// The `is_approved` flag that must be stored alongside
    /// this status. The pair never disagrees.
    pub fn is_approved(self) -> bool {
        self == Self::Approved
    }

    pub const fn default() -> Self {
        Self::Pending
    }
}

#[derive(Debug, Error)]
#[error("Invalid moderation status primitive: {0}")]
pub struct InvalidModerationStatusPrimitive(ModerationStatusPrimitive);

impl TryFrom<i16> for ModerationStatus {
    type Error = InvalidModerationStatusPrimitive;
    fn try_from(from: ModerationStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidModerationStatusPrimitive(from))
    }
}

impl From<ModerationStatus> for ModerationStatusPrimitive {
    fn from(from: ModerationStatus) -> Self {
        from.to_i16().expect("moderation status primitive")
    }
}

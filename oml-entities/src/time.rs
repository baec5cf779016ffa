use std::fmt;

use time::OffsetDateTime;

/// Point in time with millisecond precision.
///
/// All timestamps are stored as unix timestamps in **milli**seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds * 1_000)
    }

    pub const fn as_milliseconds(self) -> i64 {
        self.0
    }

    pub const fn as_seconds(self) -> i64 {
        self.0.div_euclid(1_000)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
            .expect("valid unix timestamp")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = OffsetDateTime::from(*self);
        write!(f, "{dt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_between_seconds_and_milliseconds() {
        let ts = Timestamp::from_seconds(1_700_000_000);
        assert_eq!(1_700_000_000_000, ts.as_milliseconds());
        assert_eq!(1_700_000_000, ts.as_seconds());
    }

    #[test]
    fn seconds_round_towards_negative_infinity() {
        let ts = Timestamp::from_milliseconds(-1);
        assert_eq!(-1, ts.as_seconds());
    }

    #[test]
    fn roundtrip_offset_date_time() {
        let now = Timestamp::now();
        let dt = OffsetDateTime::from(now);
        assert_eq!(now, Timestamp::from(dt));
    }
}

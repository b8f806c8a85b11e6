//! Scryfall date and timestamp wire formats.
//!
//! Scryfall uses two conventions:
//!
//! - dates such as `released_at` or `published_at` are `YYYY-MM-DD` strings in
//!   the timezone of Wizards of the Coast's offices (UTC-8), regardless of
//!   where the client runs;
//! - timestamps such as `updated_at` are RFC 3339 strings with optional
//!   fractional seconds and an explicit offset.
//!
//! Both decode `null` to a zero value and encode the zero value back as `null`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::{format_description, offset};
use time::{Month, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Fixed offset in which Scryfall dates are interpreted.
pub const SCRYFALL_DATE_OFFSET: UtcOffset = offset!(-8);

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const ZERO_INSTANT: OffsetDateTime = PrimitiveDateTime::MIN.assume_utc();

/// A calendar date returned by the Scryfall API, anchored at midnight UTC-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(OffsetDateTime);

impl Date {
    /// The zero value, produced by decoding `null`.
    pub const ZERO: Self = Self(ZERO_INSTANT);

    /// Midnight UTC-8 on the given calendar day.
    pub fn from_calendar_date(
        year: i32,
        month: Month,
        day: u8,
    ) -> Result<Self, time::error::ComponentRange> {
        let date = time::Date::from_calendar_date(year, month, day)?;
        Ok(Self(date.midnight().assume_offset(SCRYFALL_DATE_OFFSET)))
    }

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Result<Self, time::error::Parse> {
        let date = time::Date::parse(s, DATE_FORMAT)?;
        Ok(Self(date.midnight().assume_offset(SCRYFALL_DATE_OFFSET)))
    }

    /// Format as `YYYY-MM-DD` in the date's own offset.
    pub fn format(&self) -> Result<String, time::error::Format> {
        self.0.format(DATE_FORMAT)
    }

    /// Check if this is the zero value.
    pub fn is_zero(&self) -> bool {
        self.0 == ZERO_INSTANT
    }

    /// The calendar day.
    pub fn date(&self) -> time::Date {
        self.0.date()
    }

    /// The instant this date starts at.
    pub fn as_offset_date_time(&self) -> OffsetDateTime {
        self.0
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Date> for OffsetDateTime {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.format().map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_zero() {
            return serializer.serialize_none();
        }
        let s = self.format().map_err(ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => Date::parse(&s).map_err(de::Error::custom),
            None => Ok(Date::ZERO),
        }
    }
}

/// A point in time returned by the Scryfall API, keeping its wire offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// The zero value, produced by decoding `null`.
    pub const ZERO: Self = Self(ZERO_INSTANT);

    /// Parse an RFC 3339 timestamp.
    pub fn parse(s: &str) -> Result<Self, time::error::Parse> {
        OffsetDateTime::parse(s, &Rfc3339).map(Self)
    }

    /// Format as RFC 3339.
    pub fn format(&self) -> Result<String, time::error::Format> {
        self.0.format(&Rfc3339)
    }

    /// Check if this is the zero value.
    pub fn is_zero(&self) -> bool {
        self.0 == ZERO_INSTANT
    }

    /// The underlying instant.
    pub fn as_offset_date_time(&self) -> OffsetDateTime {
        self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(value: OffsetDateTime) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.format().map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_zero() {
            return serializer.serialize_none();
        }
        let s = self.format().map_err(ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => Timestamp::parse(&s).map_err(de::Error::custom),
            None => Ok(Timestamp::ZERO),
        }
    }
}

// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

pub const CATEGORY_MAX_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
    OutOfRange(&'static str),
    InvalidFormat(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::OutOfRange(msg) | Self::InvalidFormat(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// Open-ended category/type label (`"DJ Night"`, `"Nightclub"`, ...).
/// Filtering equality is case-insensitive; the stored casing is the
/// display form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct Category(String);

impl Category {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("category"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("category"));
        }
        if input.len() > CATEGORY_MAX_LEN {
            return Err(ParseError::TooLong("category", CATEGORY_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cover price in whole dollars, or the `"Free"` sentinel.
///
/// `Free` orders strictly before any dollar amount, including `$0`, so
/// ascending price sorts always surface free events first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Price {
    Free,
    Usd(u32),
}

impl Price {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty("price"));
        }
        if trimmed.eq_ignore_ascii_case("free") {
            return Ok(Self::Free);
        }
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        digits.parse::<u32>().map(Self::Usd).map_err(|_| {
            ParseError::InvalidFormat("price must be a whole dollar amount or \"Free\"")
        })
    }

    #[must_use]
    pub const fn dollars(self) -> u32 {
        match self {
            Self::Free => 0,
            Self::Usd(amount) => amount,
        }
    }

    #[must_use]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }

    /// Wire form: the original catalog serializes prices as bare
    /// strings (`"20"`) with `"Free"` as the sentinel.
    #[must_use]
    pub fn wire_string(self) -> String {
        match self {
            Self::Free => "Free".to_string(),
            Self::Usd(amount) => amount.to_string(),
        }
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Free, Self::Free) => Ordering::Equal,
            (Self::Free, Self::Usd(_)) => Ordering::Less,
            (Self::Usd(_), Self::Free) => Ordering::Greater,
            (Self::Usd(a), Self::Usd(b)) => a.cmp(b),
        }
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => f.write_str("Free"),
            Self::Usd(amount) => write!(f, "${amount}"),
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.wire_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Calendar date for events and guestlists.
///
/// The catalog's human-entered strings (`"May 15, 2023"`) are parsed
/// once at ingestion; ordering and equality are calendar semantics,
/// never string comparison. The display string is derived output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventDate(NaiveDate);

impl EventDate {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty("date"));
        }
        NaiveDate::parse_from_str(trimmed, "%B %d, %Y")
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
            .map(Self)
            .map_err(|_| {
                ParseError::InvalidFormat(
                    "date must look like \"May 15, 2023\" or \"2023-05-15\"",
                )
            })
    }

    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl Display for EventDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%B %-d, %Y"))
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Venue rating, `0.0..=5.0` and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Rating(f32);

impl Rating {
    pub fn parse(value: f32) -> Result<Self, ParseError> {
        if !value.is_finite() || !(0.0..=5.0).contains(&value) {
            return Err(ParseError::OutOfRange("rating must be within 0.0..=5.0"));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn total_cmp(self, other: Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f32::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}

/// Geographic point for map placement.
///
/// Validity is checked at the map boundary, not at load: a record with
/// broken coordinates stays listable and only drops off the map. The
/// exact origin is treated as absent data, matching the upstream feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= 90.0
            && self.lng.abs() <= 180.0
            && !(self.lat == 0.0 && self.lng == 0.0)
    }
}

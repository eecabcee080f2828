// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Sort dimension for a catalog listing.
///
/// A dimension a record kind does not carry leaves the input order
/// untouched; an unrecognized token fails at [`SortKey::parse`] and the
/// caller runs unsorted instead of erroring, keeping listings renderable
/// on bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending calendar order.
    Date,
    /// Ascending dollars, `Free` first.
    Price,
    /// Descending.
    Rating,
    /// Ascending, case-insensitive.
    Name,
}

impl SortKey {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if token.eq_ignore_ascii_case("date") {
            Some(Self::Date)
        } else if token.eq_ignore_ascii_case("price") {
            Some(Self::Price)
        } else if token.eq_ignore_ascii_case("rating") {
            Some(Self::Rating)
        } else if token.eq_ignore_ascii_case("name") {
            Some(Self::Name)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Price => "price",
            Self::Rating => "rating",
            Self::Name => "name",
        }
    }
}

/// Named boolean field a query can pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Flag {
    Featured,
    Trending,
    Open,
}

impl Flag {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if token.eq_ignore_ascii_case("featured") {
            Some(Self::Featured)
        } else if token.eq_ignore_ascii_case("trending") {
            Some(Self::Trending)
        } else if token.eq_ignore_ascii_case("open") {
            Some(Self::Open)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Trending => "trending",
            Self::Open => "open",
        }
    }
}

/// Exact-match filter on one boolean field. `featured=false` is a real
/// filter, not a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagFilter {
    pub flag: Flag,
    pub value: bool,
}

/// One catalog query: every predicate combines with AND.
///
/// All fields default to "off". Fields that do not apply to the record
/// kind being queried are ignored for that kind rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive substring over the kind's searchable fields.
    /// Whitespace-only terms are equivalent to absent.
    pub search: Option<String>,
    /// Case-insensitive equality against the record's category/type.
    /// `"All"` (any case) disables the filter.
    pub category: Option<String>,
    pub flag: Option<FlagFilter>,
    /// Case-insensitive substring against the denormalized venue name.
    pub venue: Option<String>,
    /// Calendar-equality date filter; accepts the display form
    /// (`"May 20, 2023"`) or ISO (`"2023-05-20"`). A value that parses
    /// as neither matches nothing.
    pub date: Option<String>,
    pub sort: Option<SortKey>,
}

impl CatalogQuery {
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.flag.is_none()
            && self.venue.is_none()
            && self.date.is_none()
    }
}

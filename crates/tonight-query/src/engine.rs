// SPDX-License-Identifier: Apache-2.0

use crate::query::{CatalogQuery, Flag, SortKey};
use std::cmp::Ordering;
use tonight_core::fold;
use tonight_model::{Category, EventDate, Price, Rating};

/// One record kind's view of the catalog contract.
///
/// Accessors return `None` for dimensions the kind does not carry;
/// the engine treats those predicates as inapplicable and the record
/// passes. Searchable fields are the kind-specific subset the listing
/// pages scan.
pub trait CatalogRecord {
    fn id(&self) -> u32;
    /// Fields the free-text search scans, in display order.
    fn search_fields(&self) -> Vec<&str>;
    fn category(&self) -> Option<&Category>;
    fn flag(&self, flag: Flag) -> Option<bool>;
    /// Denormalized venue name, for kinds that reference one.
    fn venue_name(&self) -> Option<&str>;
    fn date(&self) -> Option<EventDate>;
    fn price(&self) -> Option<Price>;
    fn rating(&self) -> Option<Rating>;
    /// The name/title used by the `name` sort.
    fn display_name(&self) -> &str;
}

/// Pure filter + stable sort over one snapshot.
///
/// Returns a new sequence; the input is never mutated. Predicates
/// combine with AND, insertion order is the tie-break, and a sort
/// dimension the kind lacks leaves the order untouched. Running the
/// same query twice is a fixpoint.
#[must_use]
pub fn run_query<R: CatalogRecord + Clone>(records: &[R], query: &CatalogQuery) -> Vec<R> {
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(fold);
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"));
    let venue = query
        .venue
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(fold);
    let date = query
        .date
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| EventDate::parse(value).ok());

    let mut out: Vec<R> = records
        .iter()
        .filter(|record| {
            search_matches(*record, search.as_deref())
                && category_matches(*record, category)
                && flag_matches(*record, query)
                && venue_matches(*record, venue.as_deref())
                && date_matches(*record, date)
        })
        .cloned()
        .collect();

    if let Some(sort) = query.sort {
        sort_records(&mut out, sort);
    }
    out
}

fn search_matches<R: CatalogRecord>(record: &R, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    record
        .search_fields()
        .iter()
        .any(|field| fold(field).contains(needle))
}

fn category_matches<R: CatalogRecord>(record: &R, wanted: Option<&str>) -> bool {
    let Some(wanted) = wanted else {
        return true;
    };
    record
        .category()
        .is_none_or(|category| category.matches(wanted))
}

fn flag_matches<R: CatalogRecord>(record: &R, query: &CatalogQuery) -> bool {
    let Some(filter) = query.flag else {
        return true;
    };
    record
        .flag(filter.flag)
        .is_none_or(|value| value == filter.value)
}

fn venue_matches<R: CatalogRecord>(record: &R, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    record
        .venue_name()
        .is_none_or(|name| fold(name).contains(needle))
}

fn date_matches<R: CatalogRecord>(record: &R, wanted: Option<Option<EventDate>>) -> bool {
    let Some(wanted) = wanted else {
        return true;
    };
    let Some(recorded) = record.date() else {
        return true;
    };
    // An unparseable filter value matches nothing, mirroring how
    // unrecognized endpoint parameters filter everything out.
    wanted.is_some_and(|date| recorded == date)
}

fn sort_records<R: CatalogRecord>(records: &mut [R], sort: SortKey) {
    match sort {
        SortKey::Date => records.sort_by_key(|record| record.date()),
        SortKey::Price => records.sort_by_key(|record| record.price()),
        SortKey::Rating => records.sort_by(|a, b| match (a.rating(), b.rating()) {
            (Some(a), Some(b)) => b.total_cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortKey::Name => records.sort_by_cached_key(|record| fold(record.display_name())),
    }
}

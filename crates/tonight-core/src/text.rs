// SPDX-License-Identifier: Apache-2.0

use unicode_normalization::UnicodeNormalization;

/// Canonical search form: NFKC, then lowercase. Matching anywhere in the
/// workspace goes through this so client-side and server-side filtering
/// agree on what "case-insensitive" means.
#[must_use]
pub fn fold(input: &str) -> String {
    input.nfkc().collect::<String>().to_lowercase()
}

/// Splits free text like `"Skip the line, Free entry before midnight"`
/// into trimmed, non-empty items.
#[must_use]
pub fn split_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

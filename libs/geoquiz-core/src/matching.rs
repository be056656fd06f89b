//! Matching typed guesses against the catalog.

use crate::catalog::Catalog;
use crate::normalize::normalize;
use crate::types::CountryRecord;

/// Find the country a typed guess names, if any.
///
/// Blank input never matches. Canonical names and aliases are compared by
/// normalized key, so case, accents, spacing, apostrophes and hyphens are
/// all ignored.
pub fn match_country<'a>(raw: &str, catalog: &'a Catalog) -> Option<&'a CountryRecord> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let key = normalize(trimmed);
    if key.is_empty() {
        return None;
    }
    catalog.lookup(&key)
}

//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

use geoquiz_core::{Catalog, Continent, CountryRecord};

/// France, Germany, United States and Japan, with a few aliases.
pub fn four_countries() -> Catalog {
    Catalog::new(vec![
        CountryRecord::new("France", Continent::Europe, &[]),
        CountryRecord::new("Germany", Continent::Europe, &["Deutschland"]),
        CountryRecord::new("United States", Continent::NorthAmerica, &["USA", "US"]),
        CountryRecord::new("Japan", Continent::Asia, &["Nippon"]),
    ])
    .expect("fixture catalog is valid")
}

/// A catalog of `n` European countries named "Country 1".."Country n".
pub fn numbered_countries(n: usize) -> Catalog {
    let records = (1..=n)
        .map(|i| CountryRecord::new(format!("Country {}", i), Continent::Europe, &[]))
        .collect();
    Catalog::new(records).expect("fixture catalog is valid")
}

/// Body for POST /api/session/guess.
pub fn guess(text: &str) -> Value {
    json!({ "text": text })
}

//! Country catalog: the immutable reference data a session plays against.
//!
//! The catalog is loaded once, validated, and then only read. Validation
//! rejects data that would make a typed name ambiguous, so every
//! normalized key points at exactly one country.

use crate::error::{CatalogError, CatalogIssue, Result};
use crate::normalize::{normalize, NormalizedKey};
use crate::types::{Continent, CountryRecord};
use std::collections::HashMap;

const BUNDLED_COUNTRIES: &str = include_str!("../data/countries.json");

/// Validated, ordered list of countries with a lookup index.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CountryRecord>,
    index: HashMap<NormalizedKey, usize>,
}

impl Catalog {
    /// Build a catalog, reporting every data-quality issue at once.
    pub fn new(records: Vec<CountryRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut issues = Vec::new();
        let mut index: HashMap<NormalizedKey, usize> = HashMap::new();

        for (i, record) in records.iter().enumerate() {
            let key = normalize(&record.name);
            if key.is_empty() {
                issues.push(CatalogIssue::BlankName { index: i });
                continue;
            }
            if let Some(&existing) = index.get(&key) {
                issues.push(CatalogIssue::DuplicateName {
                    name: record.name.clone(),
                    existing: records[existing].name.clone(),
                });
                continue;
            }
            index.insert(key, i);
        }

        // Aliases go in after every name so a collision is reported the
        // same way regardless of which record comes first.
        for (i, record) in records.iter().enumerate() {
            for alias in &record.aliases {
                let key = normalize(alias);
                if key.is_empty() {
                    continue;
                }
                match index.get(&key) {
                    Some(&owner) if owner == i => {}
                    Some(&owner) => issues.push(CatalogIssue::AliasCollision {
                        alias: alias.clone(),
                        country: record.name.clone(),
                        other: records[owner].name.clone(),
                    }),
                    None => {
                        index.insert(key, i);
                    }
                }
            }
        }

        if !issues.is_empty() {
            return Err(CatalogError::Invalid { issues });
        }

        Ok(Self { records, index })
    }

    /// Parse and validate a JSON array of country records.
    pub fn from_json(content: &str) -> Result<Self> {
        let records: Vec<CountryRecord> = serde_json::from_str(content)?;
        Self::new(records)
    }

    /// The world catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_COUNTRIES)
    }

    /// Find the country a normalized key names, by canonical name or alias.
    pub fn lookup(&self, key: &NormalizedKey) -> Option<&CountryRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    /// Find a country by its canonical name (normalized comparison).
    pub fn get(&self, name: &str) -> Option<&CountryRecord> {
        self.lookup(&normalize(name))
            .filter(|record| normalize(&record.name) == normalize(name))
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Countries grouped per continent in board order, each group sorted by name.
    ///
    /// Continents with no countries are still listed, with an empty group.
    pub fn by_continent(&self) -> Vec<(Continent, Vec<&CountryRecord>)> {
        Continent::ALL
            .into_iter()
            .map(|continent| (continent, self.in_continent(continent)))
            .collect()
    }

    /// Countries of one continent, sorted by name.
    pub fn in_continent(&self, continent: Continent) -> Vec<&CountryRecord> {
        let mut countries: Vec<&CountryRecord> = self
            .records
            .iter()
            .filter(|r| r.continent == continent)
            .collect();
        countries.sort_by(|a, b| {
            normalize(&a.name)
                .cmp(&normalize(&b.name))
                .then_with(|| a.name.cmp(&b.name))
        });
        countries
    }
}

//! Core types for the geography quiz.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Continent a country is grouped under on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America", alias = "NorthAmerica")]
    NorthAmerica,
    #[serde(rename = "South America", alias = "SouthAmerica")]
    SouthAmerica,
    Oceania,
}

impl Continent {
    /// Display order used by the board.
    pub const ALL: [Continent; 6] = [
        Self::Africa,
        Self::Asia,
        Self::Europe,
        Self::NorthAmerica,
        Self::SouthAmerica,
        Self::Oceania,
    ];

    /// Get the continent name as shown to players.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Oceania => "Oceania",
        }
    }

    /// Parse from a display name or its CamelCase form, ignoring case and spacing.
    pub fn from_name(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL.into_iter().find(|c| {
            c.as_str()
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .flat_map(char::to_lowercase)
                .eq(key.chars())
        })
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A country as loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Canonical display name.
    pub name: String,
    pub continent: Continent,
    /// Alternate spellings and abbreviations, in catalog order.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, continent: Continent, aliases: &[&str]) -> Self {
        Self {
            name: name.into(),
            continent,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Lifecycle stage of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Running,
    Ended,
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Performance grade for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Grade {
    /// Grade a found/total ratio.
    ///
    /// Thresholds are checked top-down: 90% Excellent, 70% Good,
    /// 40% Average, otherwise Poor. An empty total grades as Poor.
    pub fn from_progress(found: usize, total: usize) -> Self {
        if total == 0 {
            return Self::Poor;
        }
        let scaled = found.saturating_mul(100);
        if scaled >= 90 * total {
            Self::Excellent
        } else if scaled >= 70 * total {
            Self::Good
        } else if scaled >= 40 * total {
            Self::Average
        } else {
            Self::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far through the catalog a session has got.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub found: usize,
    pub total: usize,
    pub percent: f64,
}

impl Progress {
    pub fn new(found: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0.0
        } else {
            found as f64 * 100.0 / total as f64
        };
        Self {
            found,
            total,
            percent,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_progress(self.found, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_progress(9, 10), Grade::Excellent);
        assert_eq!(Grade::from_progress(10, 10), Grade::Excellent);
        assert_eq!(Grade::from_progress(8, 10), Grade::Good);
        assert_eq!(Grade::from_progress(7, 10), Grade::Good);
        assert_eq!(Grade::from_progress(4, 10), Grade::Average);
        assert_eq!(Grade::from_progress(3, 10), Grade::Poor);
        assert_eq!(Grade::from_progress(0, 10), Grade::Poor);
    }

    #[test]
    fn grade_boundaries_are_inclusive() {
        // 176 / 195 = 90.26%, 175 / 195 = 89.74%
        assert_eq!(Grade::from_progress(176, 195), Grade::Excellent);
        assert_eq!(Grade::from_progress(175, 195), Grade::Good);
        assert_eq!(Grade::from_progress(78, 195), Grade::Average);
        assert_eq!(Grade::from_progress(77, 195), Grade::Poor);
    }

    #[test]
    fn grade_empty_total_is_poor() {
        assert_eq!(Grade::from_progress(0, 0), Grade::Poor);
    }

    #[test]
    fn progress_percent() {
        let progress = Progress::new(3, 10);
        assert_eq!(progress.percent, 30.0);
        assert_eq!(progress.grade(), Grade::Poor);
        assert_eq!(Progress::new(0, 0).percent, 0.0);
    }

    #[test]
    fn continent_serde_uses_display_names() {
        let json = serde_json::to_string(&Continent::NorthAmerica).unwrap();
        assert_eq!(json, "\"North America\"");

        let parsed: Continent = serde_json::from_str("\"SouthAmerica\"").unwrap();
        assert_eq!(parsed, Continent::SouthAmerica);
    }

    #[test]
    fn continent_from_name() {
        assert_eq!(Continent::from_name("north america"), Some(Continent::NorthAmerica));
        assert_eq!(Continent::from_name("SouthAmerica"), Some(Continent::SouthAmerica));
        assert_eq!(Continent::from_name("south_america"), Some(Continent::SouthAmerica));
        assert_eq!(Continent::from_name("Europe"), Some(Continent::Europe));
        assert_eq!(Continent::from_name("Atlantis"), None);
    }

    #[test]
    fn record_aliases_default_to_empty() {
        let record: CountryRecord =
            serde_json::from_str(r#"{"name": "Chad", "continent": "Africa"}"#).unwrap();
        assert!(record.aliases.is_empty());
    }
}

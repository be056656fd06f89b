//! Quiz session state machine.
//!
//! A session starts `Idle`, moves to `Running` on [`Session::start`], and
//! ends when the countdown reaches zero. [`Session::reset`] returns it to
//! `Idle` from anywhere. Commands issued in the wrong phase are ignored.
//!
//! Transitions return the notifications they produce instead of calling
//! out, so callers decide how feedback (sounds, UI updates) is delivered.

use crate::catalog::Catalog;
use crate::matching::match_country;
use crate::normalize::{normalize, NormalizedKey};
use crate::types::{Continent, CountryRecord, Grade, Phase, Progress};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Length of a session in seconds (15 minutes).
pub const DEFAULT_DURATION_SECS: u32 = 900;

/// [`DEFAULT_DURATION_SECS`] as a session duration.
pub const DEFAULT_DURATION: NonZeroU32 = match NonZeroU32::new(DEFAULT_DURATION_SECS) {
    Some(d) => d,
    None => panic!("session duration must be non-zero"),
};

/// Countries found so far, in the order they were guessed.
#[derive(Debug, Clone, Default)]
pub struct FoundSet {
    names: Vec<String>,
    keys: HashSet<NormalizedKey>,
}

impl FoundSet {
    /// Add a canonical name. Returns false if it was already present.
    fn insert(&mut self, name: &str) -> bool {
        if !self.keys.insert(normalize(name)) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(&normalize(name))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn clear(&mut self) {
        self.names.clear();
        self.keys.clear();
    }
}

/// Notification produced by a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    Started { duration_secs: u32 },
    CorrectGuess { name: String },
    Ended { grade: Grade, found: usize, total: usize },
    Reset,
}

/// What happened to a submitted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The session is not running; the guess was ignored.
    NotRunning,
    /// Nothing but whitespace was typed.
    Blank,
    NoMatch,
    AlreadyFound { name: String },
    Correct { name: String },
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    /// The notification to publish for this outcome, if any.
    pub fn event(&self) -> Option<SessionEvent> {
        match self {
            Self::Correct { name } => Some(SessionEvent::CorrectGuess { name: name.clone() }),
            _ => None,
        }
    }
}

/// One cell on the continent board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEntry {
    pub name: String,
    pub found: bool,
}

/// Countries of one continent with their found flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinentBoard {
    pub continent: Continent,
    pub found: usize,
    pub total: usize,
    pub countries: Vec<BoardEntry>,
}

/// Read-only view of a session for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub remaining_display: String,
    pub duration_secs: u32,
    pub found: Vec<String>,
    pub catalog_size: usize,
    pub percent: f64,
    /// Grade the current progress would earn; shown while running.
    pub provisional_grade: Grade,
    /// Final grade, set once the countdown has run out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_grade: Option<Grade>,
}

/// A single player's quiz session over a shared catalog.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    duration: NonZeroU32,
    phase: Phase,
    remaining_seconds: u32,
    found: FoundSet,
    grade: Option<Grade>,
}

impl Session {
    /// Create an idle session with the standard 15 minute countdown.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_duration(catalog, DEFAULT_DURATION)
    }

    pub fn with_duration(catalog: Arc<Catalog>, duration: NonZeroU32) -> Self {
        Self {
            catalog,
            duration,
            phase: Phase::Idle,
            remaining_seconds: duration.get(),
            found: FoundSet::default(),
            grade: None,
        }
    }

    /// Begin a fresh round. Ignored while already running.
    pub fn start(&mut self) -> Option<SessionEvent> {
        if self.phase == Phase::Running {
            return None;
        }
        self.found.clear();
        self.grade = None;
        self.remaining_seconds = self.duration.get();
        self.phase = Phase::Running;
        Some(SessionEvent::Started {
            duration_secs: self.duration.get(),
        })
    }

    /// Advance the countdown by one second.
    ///
    /// The final tick ends the session and fixes the grade in the same
    /// step, so `remaining_seconds == 0` is never seen while running.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        if self.phase != Phase::Running || self.remaining_seconds == 0 {
            return None;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds > 0 {
            return None;
        }

        let progress = self.progress();
        let grade = progress.grade();
        self.phase = Phase::Ended;
        self.grade = Some(grade);
        Some(SessionEvent::Ended {
            grade,
            found: progress.found,
            total: progress.total,
        })
    }

    /// Check a typed guess and record it if it names a new country.
    pub fn submit_guess(&mut self, text: &str) -> GuessOutcome {
        if self.phase != Phase::Running {
            return GuessOutcome::NotRunning;
        }
        if text.trim().is_empty() {
            return GuessOutcome::Blank;
        }
        let Some(record) = match_country(text, &self.catalog) else {
            return GuessOutcome::NoMatch;
        };
        let name = record.name.clone();
        if self.found.insert(&name) {
            GuessOutcome::Correct { name }
        } else {
            GuessOutcome::AlreadyFound { name }
        }
    }

    /// Return to idle with a full clock and nothing found.
    ///
    /// Emits `Reset` only when there was a round to discard.
    pub fn reset(&mut self) -> Option<SessionEvent> {
        let was_idle = self.phase == Phase::Idle;
        self.phase = Phase::Idle;
        self.found.clear();
        self.grade = None;
        self.remaining_seconds = self.duration.get();
        (!was_idle).then_some(SessionEvent::Reset)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration.get()
    }

    pub fn found(&self) -> &FoundSet {
        &self.found
    }

    /// Final grade, present only once the session has ended.
    pub fn grade(&self) -> Option<Grade> {
        self.grade
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog.len()
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.found.len(), self.catalog.len())
    }

    /// Grade for the current progress, using the same table as the final grade.
    pub fn provisional_grade(&self) -> Grade {
        self.progress().grade()
    }

    /// The catalog grouped per continent with found flags.
    pub fn board(&self) -> Vec<ContinentBoard> {
        self.catalog
            .by_continent()
            .into_iter()
            .map(|(continent, records)| self.continent_board(continent, &records))
            .collect()
    }

    /// Board for a single continent.
    pub fn continent(&self, continent: Continent) -> ContinentBoard {
        let records = self.catalog.in_continent(continent);
        self.continent_board(continent, &records)
    }

    fn continent_board(
        &self,
        continent: Continent,
        records: &[&CountryRecord],
    ) -> ContinentBoard {
        let countries: Vec<BoardEntry> = records
            .iter()
            .map(|r| BoardEntry {
                name: r.name.clone(),
                found: self.found.contains(&r.name),
            })
            .collect();
        ContinentBoard {
            continent,
            found: countries.iter().filter(|c| c.found).count(),
            total: countries.len(),
            countries,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let progress = self.progress();
        SessionSnapshot {
            phase: self.phase,
            remaining_seconds: self.remaining_seconds,
            remaining_display: format_clock(self.remaining_seconds),
            duration_secs: self.duration.get(),
            found: self.found.names().to_vec(),
            catalog_size: progress.total,
            percent: progress.percent,
            provisional_grade: progress.grade(),
            performance_grade: self.grade,
        }
    }
}

/// Format seconds as a zero-padded `MM:SS` clock.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

//! Core library for the timed geography quiz.
//!
//! Provides:
//! - Country catalog with load-time validation
//! - Name normalization (case, accents, spacing)
//! - Guess matching against canonical names and aliases
//! - Session state machine with countdown and grading

pub mod catalog;
pub mod error;
pub mod matching;
pub mod normalize;
pub mod session;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogIssue, Result};
pub use matching::match_country;
pub use normalize::{normalize, NormalizedKey};
pub use session::{
    format_clock, BoardEntry, ContinentBoard, FoundSet, GuessOutcome, Session, SessionEvent,
    SessionSnapshot, DEFAULT_DURATION, DEFAULT_DURATION_SECS,
};
pub use types::{Continent, CountryRecord, Grade, Phase, Progress};

//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from geoquiz-core
pub use geoquiz_core::{
    BoardEntry, Continent, ContinentBoard, GuessOutcome, Phase, SessionSnapshot,
};
pub use crate::services::game::{GameEvent, SessionView};

/// Longest guess accepted over HTTP, in characters.
pub const MAX_GUESS_CHARS: usize = 200;

/// POST /api/session/guess body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    pub text: String,
}

/// Result of a guess along with the updated session
#[derive(Debug, Clone, Serialize)]
pub struct GuessResponse {
    pub outcome: GuessOutcome,
    pub snapshot: SessionView,
}

/// GET /api/catalog query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub continent: Option<String>,
}

/// Catalog grouped per continent with found flags
#[derive(Debug, Clone, Serialize)]
pub struct BoardResponse {
    pub catalog_size: usize,
    pub continents: Vec<ContinentBoard>,
}

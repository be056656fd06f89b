//! Catalog board endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/catalog
/// Returns every continent, or just one with `?continent=`
pub async fn board(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<BoardResponse>> {
    let continents = match query.continent.as_deref() {
        Some(name) => {
            let continent = Continent::from_name(name)
                .ok_or_else(|| ApiError::NotFound(format!("continent {}", name)))?;
            vec![state.game.continent(continent)]
        }
        None => state.game.board(),
    };

    Ok(Json(BoardResponse {
        catalog_size: state.game.catalog_size(),
        continents,
    }))
}

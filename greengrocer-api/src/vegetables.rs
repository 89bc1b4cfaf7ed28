use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use greengrocer_catalog::Listing;

use crate::error::AppError;
use crate::response::Envelope;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UpsertVegetableRequest {
    pub name: String,
    pub price: f64,
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteVegetableRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteVegetableResponse {
    pub removed: bool,
}

#[derive(Debug, Deserialize)]
pub struct CostQuery {
    pub name: String,
    pub quantity: f64,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /vegetable/add
pub async fn add_vegetable(
    State(state): State<AppState>,
    Json(req): Json<UpsertVegetableRequest>,
) -> Result<Json<Envelope<()>>, AppError> {
    state
        .pricing
        .write()
        .await
        .add_vegetable(&req.name, req.price, req.unit)?;

    debug!(name = %req.name, price = req.price, "vegetable added");
    Ok(Json(Envelope::ok_empty()))
}

/// POST /vegetable/update
pub async fn update_vegetable(
    State(state): State<AppState>,
    Json(req): Json<UpsertVegetableRequest>,
) -> Result<Json<Envelope<()>>, AppError> {
    state
        .pricing
        .write()
        .await
        .update_vegetable(&req.name, req.price, req.unit)?;

    debug!(name = %req.name, price = req.price, "vegetable updated");
    Ok(Json(Envelope::ok_empty()))
}

/// POST /vegetable/delete
pub async fn delete_vegetable(
    State(state): State<AppState>,
    Json(req): Json<DeleteVegetableRequest>,
) -> Result<Json<Envelope<DeleteVegetableResponse>>, AppError> {
    let removed = state.pricing.write().await.delete_vegetable(&req.name);

    debug!(name = %req.name, removed, "vegetable delete requested");
    Ok(Json(Envelope::ok(DeleteVegetableResponse { removed })))
}

/// GET /vegetable/cost
pub async fn vegetable_cost(
    State(state): State<AppState>,
    Query(query): Query<CostQuery>,
) -> Result<Json<Envelope<f64>>, AppError> {
    let quote = state.pricing.read().await.quote(&query.name, query.quantity)?;

    Ok(Json(Envelope::ok(quote.total_cost)))
}

/// GET /vegetable/list
pub async fn list_vegetables(State(state): State<AppState>) -> Json<Envelope<Vec<Listing>>> {
    let rows = state.pricing.read().await.listings();

    Json(Envelope::ok(rows))
}

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use greengrocer_core::Receipt;

use crate::error::AppError;
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateReceiptRequest {
    pub clerk_id: String,
    pub name: String,
    pub quantity: f64,
    pub amount_given: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub cashier_name: String,
    pub vegetable: String,
    pub quantity: f64,
    pub total_cost: f64,
    pub amount_given: f64,
    pub change_due: f64,
    pub items: Vec<String>,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            cashier_name: receipt.cashier_name,
            vegetable: receipt.vegetable,
            quantity: receipt.quantity,
            total_cost: receipt.total_cost,
            amount_given: receipt.amount_given,
            change_due: receipt.change_due,
            items: receipt.items,
        }
    }
}

/// POST /receipt/calculate
pub async fn calculate_receipt(
    State(state): State<AppState>,
    Json(req): Json<CalculateReceiptRequest>,
) -> Result<Json<Envelope<ReceiptResponse>>, AppError> {
    let pricing = state.pricing.read().await;
    let receipt = state.receipts.build_receipt(
        &pricing,
        &req.clerk_id,
        &req.name,
        req.quantity,
        req.amount_given,
    )?;

    debug!(
        clerk = %req.clerk_id,
        vegetable = %req.name,
        total = receipt.total_cost,
        "receipt calculated"
    );
    Ok(Json(Envelope::ok(receipt.into())))
}

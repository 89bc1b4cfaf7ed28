use serde::{Deserialize, Serialize};

/// A computed total for one vegetable at its currently listed price.
/// Never stored; recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_cost: f64,
}

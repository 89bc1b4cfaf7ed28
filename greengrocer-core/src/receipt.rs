use serde::{Deserialize, Serialize};

/// A quote combined with the cash the customer handed over.
///
/// `change_due` may be negative: underpayment is reported, not rejected,
/// and callers interpret the sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub cashier_name: String,
    pub vegetable: String,
    pub quantity: f64,
    pub total_cost: f64,
    pub amount_given: f64,
    pub change_due: f64,
    /// Display lines for the purchased items.
    pub items: Vec<String>,
}

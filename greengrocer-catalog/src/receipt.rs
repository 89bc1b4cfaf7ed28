use greengrocer_core::{CoreError, CoreResult, Receipt};

use crate::pricing::PricingService;

/// Builds receipts by pricing a sale through a [`PricingService`] and
/// folding in the tendered cash.
pub struct ReceiptService;

impl ReceiptService {
    pub fn new() -> Self {
        Self
    }

    /// Quote the sale, then compute the change against `amount_given`.
    ///
    /// `NotFound`/`InvalidArgument` from the quote propagate unchanged; a
    /// negative `amount_given` is `InvalidArgument`. Underpayment is NOT
    /// rejected here: `change_due` simply comes out negative.
    pub fn build_receipt(
        &self,
        pricing: &PricingService,
        cashier_name: &str,
        name: &str,
        quantity: f64,
        amount_given: f64,
    ) -> CoreResult<Receipt> {
        let quote = pricing.quote(name, quantity)?;
        if amount_given < 0.0 {
            return Err(CoreError::InvalidArgument(format!(
                "amount given must be non-negative, got {amount_given}"
            )));
        }
        Ok(Receipt {
            cashier_name: cashier_name.to_string(),
            vegetable: quote.name,
            quantity: quote.quantity,
            total_cost: quote.total_cost,
            amount_given,
            change_due: amount_given - quote.total_cost,
            items: vec![format!("{} x {} @ {}", quote.quantity, name, quote.unit_price)],
        })
    }
}

impl Default for ReceiptService {
    fn default() -> Self {
        Self::new()
    }
}

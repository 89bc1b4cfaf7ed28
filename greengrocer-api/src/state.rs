use std::sync::Arc;

use tokio::sync::RwLock;

use greengrocer_catalog::{PricingService, ReceiptService};

/// Shared handler state.
///
/// The pricing service sits behind one `RwLock`: quote and list handlers
/// take the read half and may overlap, mutations take the write half and
/// are exclusive. No handler holds the lock across I/O.
#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<RwLock<PricingService>>,
    pub receipts: Arc<ReceiptService>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            pricing: Arc::new(RwLock::new(PricingService::new())),
            receipts: Arc::new(ReceiptService::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

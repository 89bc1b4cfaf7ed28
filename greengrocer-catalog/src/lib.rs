pub mod pricing;
pub mod receipt;
pub mod store;

pub use pricing::{Listing, PricingService};
pub use receipt::ReceiptService;
pub use store::{PriceBook, PriceEntry};

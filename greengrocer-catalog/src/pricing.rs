use serde::{Deserialize, Serialize};

use greengrocer_core::{CoreError, CoreResult, Quote};

use crate::store::{PriceBook, PriceEntry};

/// One row of the full price list, for display surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    pub price: f64,
    pub unit: Option<String>,
}

/// Request-shaped operations over a [`PriceBook`].
///
/// Owns the book exclusively; every mutation goes through here.
pub struct PricingService {
    book: PriceBook,
}

impl PricingService {
    pub fn new() -> Self {
        Self {
            book: PriceBook::new(),
        }
    }

    /// Create-or-overwrite: adding a name that already exists replaces its
    /// price rather than failing as a duplicate.
    pub fn add_vegetable(&mut self, name: &str, price: f64, unit: Option<String>) -> CoreResult<()> {
        if name.is_empty() {
            return Err(CoreError::InvalidArgument(
                "vegetable name must not be empty".to_string(),
            ));
        }
        self.book.set(name, PriceEntry { price, unit })
    }

    /// Existence-checked overwrite: updating a vegetable that was never added
    /// is `NotFound`, distinguishing it from [`Self::add_vegetable`]. When
    /// `unit` is `None` the stored label is kept.
    pub fn update_vegetable(
        &mut self,
        name: &str,
        price: f64,
        unit: Option<String>,
    ) -> CoreResult<()> {
        let existing = match self.book.get(name) {
            Some(entry) => entry.clone(),
            None => return Err(CoreError::NotFound(name.to_string())),
        };
        let unit = unit.or(existing.unit);
        self.book.set(name, PriceEntry { price, unit })
    }

    /// Removing an absent vegetable is a no-op, not a failure.
    pub fn delete_vegetable(&mut self, name: &str) -> bool {
        self.book.remove(name)
    }

    /// Price `quantity` units of `name` at the listed price.
    ///
    /// An absent name is `NotFound` whatever the quantity; a negative
    /// quantity on a listed name is `InvalidArgument`.
    pub fn quote(&self, name: &str, quantity: f64) -> CoreResult<Quote> {
        let entry = self
            .book
            .get(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;
        if quantity < 0.0 {
            return Err(CoreError::InvalidArgument(format!(
                "quantity must be non-negative, got {quantity}"
            )));
        }
        Ok(Quote {
            name: name.to_string(),
            quantity,
            unit_price: entry.price,
            total_cost: entry.price * quantity,
        })
    }

    /// Snapshot of the full price list, sorted by name for stable display.
    pub fn listings(&self) -> Vec<Listing> {
        let mut rows: Vec<Listing> = self
            .book
            .names()
            .into_iter()
            .filter_map(|name| {
                let entry = self.book.get(&name)?.clone();
                Some(Listing {
                    price: entry.price,
                    unit: entry.unit,
                    name,
                })
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }
}

impl Default for PricingService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_quote_returns_listed_price() {
        let mut service = PricingService::new();
        service.add_vegetable("Carrot", 2.5, None).unwrap();

        let quote = service.quote("Carrot", 1.0).unwrap();
        assert_eq!(quote.unit_price, 2.5);
        assert_eq!(quote.total_cost, 2.5);
    }

    #[test]
    fn test_quote_multiplies_price_by_quantity() {
        let mut service = PricingService::new();
        service.add_vegetable("Carrot", 2.5, None).unwrap();

        let quote = service.quote("Carrot", 4.0).unwrap();
        assert_eq!(quote.total_cost, 10.0);
    }

    #[test]
    fn test_quote_unknown_vegetable_is_not_found() {
        let service = PricingService::new();

        // Absent names win over any quantity, valid or not.
        assert!(matches!(
            service.quote("Kale", 3.0),
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(
            service.quote("Kale", -1.0),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_quote_negative_quantity_rejected() {
        let mut service = PricingService::new();
        service.add_vegetable("Carrot", 2.5, None).unwrap();

        assert!(matches!(
            service.quote("Carrot", -2.0),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_add_empty_name_rejected() {
        let mut service = PricingService::new();

        assert!(matches!(
            service.add_vegetable("", 1.0, None),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_add_negative_price_rejected() {
        let mut service = PricingService::new();

        assert!(matches!(
            service.add_vegetable("Carrot", -2.5, None),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_add_existing_name_overwrites() {
        let mut service = PricingService::new();
        service.add_vegetable("Tomato", 3.0, None).unwrap();
        service.add_vegetable("Tomato", 3.5, None).unwrap();

        assert_eq!(service.quote("Tomato", 1.0).unwrap().total_cost, 3.5);
    }

    #[test]
    fn test_update_missing_vegetable_is_not_found() {
        let mut service = PricingService::new();

        assert!(matches!(
            service.update_vegetable("Parsnip", 2.0, None),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_overwrites_price() {
        let mut service = PricingService::new();
        service.add_vegetable("Tomato", 3.0, None).unwrap();
        service.update_vegetable("Tomato", 2.0, None).unwrap();

        assert_eq!(service.quote("Tomato", 1.0).unwrap().total_cost, 2.0);
    }

    #[test]
    fn test_update_negative_price_rejected() {
        let mut service = PricingService::new();
        service.add_vegetable("Tomato", 3.0, None).unwrap();

        assert!(matches!(
            service.update_vegetable("Tomato", -1.0, None),
            Err(CoreError::InvalidArgument(_))
        ));
        // The listed price is untouched.
        assert_eq!(service.quote("Tomato", 1.0).unwrap().total_cost, 3.0);
    }

    #[test]
    fn test_update_keeps_unit_when_omitted() {
        let mut service = PricingService::new();
        service
            .add_vegetable("Spinach", 1.5, Some("bunch".to_string()))
            .unwrap();
        service.update_vegetable("Spinach", 1.75, None).unwrap();

        let rows = service.listings();
        assert_eq!(rows[0].unit.as_deref(), Some("bunch"));
        assert_eq!(rows[0].price, 1.75);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut service = PricingService::new();
        service.add_vegetable("Onion", 0.9, None).unwrap();

        assert!(service.delete_vegetable("Onion"));
        assert!(!service.delete_vegetable("Onion"));
    }

    #[test]
    fn test_listings_sorted_by_name() {
        let mut service = PricingService::new();
        service.add_vegetable("Onion", 0.9, None).unwrap();
        service
            .add_vegetable("Carrot", 2.5, Some("kg".to_string()))
            .unwrap();

        let rows = service.listings();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Carrot");
        assert_eq!(rows[0].unit.as_deref(), Some("kg"));
        assert_eq!(rows[1].name, "Onion");
    }
}

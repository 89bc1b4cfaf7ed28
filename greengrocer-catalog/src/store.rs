use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use greengrocer_core::{CoreError, CoreResult};

/// Listed price for a single vegetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub price: f64,
    /// Optional unit-of-measure label ("kg", "bunch"). Carried verbatim,
    /// never interpreted.
    pub unit: Option<String>,
}

/// In-memory price book mapping vegetable names to unit prices.
///
/// Names are case-sensitive and hold at most one entry each. The book is
/// created empty and mutated only through [`crate::PricingService`].
pub struct PriceBook {
    entries: HashMap<String, PriceEntry>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or overwrite the entry for `name`.
    pub fn set(&mut self, name: &str, entry: PriceEntry) -> CoreResult<()> {
        if entry.price < 0.0 {
            return Err(CoreError::InvalidArgument(format!(
                "price must be non-negative, got {}",
                entry.price
            )));
        }
        self.entries.insert(name.to_string(), entry);
        Ok(())
    }

    /// Pure lookup. Absence is a valid outcome, not an error.
    pub fn get(&self, name: &str) -> Option<&PriceEntry> {
        self.entries.get(name)
    }

    /// Delete the entry if present; reports whether one existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Snapshot of the names present at call time. Order unspecified.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PriceBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(price: f64) -> PriceEntry {
        PriceEntry { price, unit: None }
    }

    #[test]
    fn test_set_then_get() {
        let mut book = PriceBook::new();
        book.set("Carrot", entry(2.5)).unwrap();

        assert_eq!(book.get("Carrot").unwrap().price, 2.5);
        assert!(book.get("carrot").is_none()); // case-sensitive
    }

    #[test]
    fn test_set_overwrites() {
        let mut book = PriceBook::new();
        book.set("Leek", entry(1.0)).unwrap();
        book.set("Leek", entry(1.8)).unwrap();

        assert_eq!(book.get("Leek").unwrap().price, 1.8);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut book = PriceBook::new();
        let err = book.set("Carrot", entry(-0.5)).unwrap_err();

        assert!(matches!(err, CoreError::InvalidArgument(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut book = PriceBook::new();
        book.set("Onion", entry(0.9)).unwrap();

        assert!(book.remove("Onion"));
        assert!(!book.remove("Onion"));
    }

    #[test]
    fn test_names_snapshot() {
        let mut book = PriceBook::new();
        book.set("Carrot", entry(2.5)).unwrap();
        book.set("Onion", entry(0.9)).unwrap();

        let mut names = book.names();
        names.sort();
        assert_eq!(names, vec!["Carrot", "Onion"]);
    }
}

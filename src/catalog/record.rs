//! The on-disk and in-memory shape of one catalog row.

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Column headers for row zero of the catalog file, in storage order.
pub const HEADERS: [&str; 3] = ["Product Name", "Price", "Quantity"];

/// One product row: three opaque text fields.
///
/// Price and quantity are stored untyped; the store never parses them as
/// numbers, so whatever text the caller supplies round-trips unchanged.
/// Nothing enforces name uniqueness, and lookups always resolve to the
/// first record in storage order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Product Name")]
    pub name: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Quantity")]
    pub quantity: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// Case-insensitive substring match on the product name.
    ///
    /// Callers pass the needle already lowercased so a scan over the catalog
    /// lowercases each name exactly once.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

/// Reject empty or whitespace-only input for a required field.
pub(crate) fn require_field(field: &str, value: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_reject_blank_input() {
        assert!(require_field("price", "9.99").is_ok());
        assert!(matches!(
            require_field("price", ""),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            require_field("price", "   \t"),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn name_matching_ignores_case() {
        let product = Product::new("Left-Handed Widget", "9.99", "10");
        assert!(product.name_contains("widget"));
        assert!(product.name_contains("left-h"));
        assert!(!product.name_contains("gadget"));
    }

    #[test]
    fn serde_field_names_mirror_the_header_row() {
        let product = Product::new("Widget", "9.99", "10");
        let json = serde_json::to_value(&product).unwrap();
        for header in HEADERS {
            assert!(json.get(header).is_some(), "missing column {header}");
        }
    }
}

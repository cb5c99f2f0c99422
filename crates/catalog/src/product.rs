use serde::{Deserialize, Serialize};

use urbanfood_core::{CategoryId, ProductId};

/// A catalog product as supplied by the listing collaborator.
///
/// Read-only from this crate's perspective: the query executor never mutates
/// products, it only decides membership. The boolean flags default to `false`
/// when the backend omits them, so an absent flag can never satisfy a flag
/// filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: CategoryId,
    /// Vendor location label, e.g. "Green Valley Farm".
    pub location: String,
    #[serde(default)]
    pub is_organic: bool,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub is_fresh_picked: bool,
    /// 0.0 to 5.0, fractional values allowed for half-star display.
    #[serde(default)]
    pub rating: f64,
}

/// Category reference pair served alongside the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flags_deserialize_as_false() {
        let json = r#"{
            "id": 7,
            "name": "Heirloom Tomatoes",
            "price": 4.5,
            "category": 2,
            "location": "Sunrise Orchard"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.is_organic);
        assert!(!product.is_local);
        assert!(!product.is_fresh_picked);
        assert_eq!(product.rating, 0.0);
    }
}

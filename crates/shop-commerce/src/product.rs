//! Catalogue products.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product as listed by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Decimal price as sent by the service.
    pub price: f64,
}

impl Product {
    /// Create a new product.
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
        }
    }

    /// Price as money in the given display currency.
    pub fn price_in(&self, currency: Currency) -> Money {
        Money::from_decimal(self.price, currency)
    }

    /// Format the price, e.g. "$29.99".
    pub fn price_display(&self, currency: Currency) -> String {
        self.price_in(currency).display()
    }
}

/// Demo catalogue shown when the service cannot be reached.
///
/// Always the same two products, in the same order.
pub fn fallback_products() -> Vec<Product> {
    vec![
        Product::new(1, "Sample Product 1", 29.99),
        Product::new(2, "Sample Product 2", 49.99),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_products() {
        let products = fallback_products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Sample Product 1");
        assert_eq!(products[0].price_display(Currency::USD), "$29.99");
        assert_eq!(products[1].name, "Sample Product 2");
        assert_eq!(products[1].price_display(Currency::USD), "$49.99");
        assert_eq!(fallback_products(), products);
    }

    #[test]
    fn test_deserialize_from_service_payload() {
        let json = r#"[
            {"id": 10, "name": "Kettle", "price": 19.5, "stock": 3},
            {"id": 11, "name": "Mug", "price": 4}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId::new(10));
        assert_eq!(products[0].price_display(Currency::USD), "$19.50");
        assert_eq!(products[1].price_display(Currency::USD), "$4.00");
    }

    #[test]
    fn test_deserialize_rejects_missing_price() {
        let json = r#"[{"id": 1, "name": "No price"}]"#;
        assert!(serde_json::from_str::<Vec<Product>>(json).is_err());
    }
}

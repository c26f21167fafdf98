//! Order submission types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderRequest {
    /// The storefront always orders a single unit.
    pub fn single(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity: 1,
        }
    }
}

/// The service's response to an order submission.
///
/// The payload is opaque to the storefront; it is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderConfirmation(serde_json::Value);

impl OrderConfirmation {
    /// Wrap a raw response payload.
    pub fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    /// The raw payload.
    pub fn payload(&self) -> &serde_json::Value {
        &self.0
    }

    /// The `id` field rendered as text, if the service sent one.
    pub fn order_id(&self) -> Option<String> {
        match self.0.get("id")? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_request_wire_format() {
        let body = serde_json::to_value(OrderRequest::single(ProductId::new(2))).unwrap();
        assert_eq!(body, json!({"productId": 2, "quantity": 1}));
    }

    #[test]
    fn test_confirmation_keeps_payload() {
        let confirmation: OrderConfirmation =
            serde_json::from_value(json!({"id": 99, "status": "created"})).unwrap();
        assert_eq!(confirmation.order_id().as_deref(), Some("99"));
        assert_eq!(confirmation.payload()["status"], "created");

        let confirmation = OrderConfirmation::new(json!({"id": "ord_1"}));
        assert_eq!(confirmation.order_id().as_deref(), Some("ord_1"));

        let confirmation = OrderConfirmation::new(json!([1, 2]));
        assert_eq!(confirmation.order_id(), None);
    }
}

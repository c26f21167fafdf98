//! Storefront service endpoints.

use shop_commerce::{OrderConfirmation, OrderRequest, Product, ProductId};
use shop_core::{ApiConfig, RequestKind};

use crate::client::FetchClient;
use crate::error::FetchError;
use crate::transport::Transport;

/// Typed access to the storefront service.
pub struct StoreApi<T> {
    client: FetchClient<T>,
}

impl<T: Transport> StoreApi<T> {
    /// Create an API handle over a transport.
    pub fn new(transport: T, api: ApiConfig) -> Self {
        Self {
            client: FetchClient::new(transport, api),
        }
    }

    /// `GET /api/products`.
    pub async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        self.client.get_json(RequestKind::Products.path()).await
    }

    /// `POST /api/orders` for one unit of `product_id`.
    pub async fn create_order(&self, product_id: ProductId) -> Result<OrderConfirmation, FetchError> {
        let order = OrderRequest::single(product_id);
        self.client
            .post_json(RequestKind::Order.path(), &order)
            .await
    }

    /// The API configuration in use.
    pub fn config(&self) -> &ApiConfig {
        self.client.api()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpRequest, HttpResponse, Method};
    use async_trait::async_trait;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        requests: RefCell<Vec<HttpRequest>>,
    }

    #[async_trait(?Send)]
    impl Transport for Recorder {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
            let response = match request.method {
                Method::Get => HttpResponse::new(
                    200,
                    r#"[{"id": 5, "name": "Lamp", "price": 12.5}]"#,
                ),
                Method::Post => HttpResponse::new(201, r#"{"id": 77, "productId": 5}"#),
            };
            self.requests.borrow_mut().push(request);
            Ok(response)
        }
    }

    #[tokio::test]
    async fn test_list_products() {
        let transport = Rc::new(Recorder::default());
        let api = StoreApi::new(transport.clone(), ApiConfig::default());

        let products = api.list_products().await.unwrap();
        assert_eq!(products, vec![Product::new(5, "Lamp", 12.5)]);

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].url, "http://localhost:3001/api/products");
    }

    #[tokio::test]
    async fn test_create_order_posts_single_unit() {
        let transport = Rc::new(Recorder::default());
        let api = StoreApi::new(transport.clone(), ApiConfig::new("http://shop:9000"));

        let confirmation = api.create_order(ProductId::new(5)).await.unwrap();
        assert_eq!(confirmation.order_id().as_deref(), Some("77"));

        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "http://shop:9000/api/orders");
        let body: serde_json::Value =
            serde_json::from_slice(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"productId": 5, "quantity": 1}));
    }
}

//! View state and its transitions.

use std::collections::BTreeSet;

use shop_commerce::{fallback_products, OrderConfirmation, Product, ProductId};
use shop_core::Lifecycle;

/// Lifecycle of the product listing request. Failures carry the message
/// shown in the warning banner.
pub type ProductsEvent = Lifecycle<Vec<Product>, String>;

/// What the product area of the view shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// The product request has not settled.
    #[default]
    Loading,
    /// The product request settled. `error` is set when `products` is the
    /// fallback catalogue.
    Ready {
        error: Option<String>,
        products: Vec<Product>,
    },
}

impl ViewState {
    /// Transition on a product request event.
    pub fn apply(self, event: ProductsEvent) -> ViewState {
        match event {
            Lifecycle::Started => ViewState::Loading,
            Lifecycle::Succeeded(products) => ViewState::Ready {
                error: None,
                products,
            },
            Lifecycle::Failed(message) => ViewState::Ready {
                error: Some(message),
                products: fallback_products(),
            },
        }
    }

    /// Check if still loading.
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Products to show (empty while loading).
    pub fn products(&self) -> &[Product] {
        match self {
            ViewState::Loading => &[],
            ViewState::Ready { products, .. } => products,
        }
    }

    /// The failure message, when showing fallback data.
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Loading => None,
            ViewState::Ready { error, .. } => error.as_deref(),
        }
    }
}

/// Orders placed during this session. Append-only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderLog {
    orders: Vec<OrderConfirmation>,
}

impl OrderLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a confirmation.
    pub fn record(&mut self, confirmation: OrderConfirmation) {
        self.orders.push(confirmation);
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Confirmations in the order they were placed.
    pub fn iter(&self) -> impl Iterator<Item = &OrderConfirmation> {
        self.orders.iter()
    }

    /// Most recent confirmation.
    pub fn last(&self) -> Option<&OrderConfirmation> {
        self.orders.last()
    }
}

/// Everything the view knows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreState {
    pub view: ViewState,
    pub orders: OrderLog,
    /// Products with an order submission in flight.
    pub pending: BTreeSet<ProductId>,
}

impl StoreState {
    /// Initial state: loading, no orders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a product request event to the view part.
    pub fn apply(&mut self, event: ProductsEvent) {
        let view = std::mem::take(&mut self.view);
        self.view = view.apply(event);
    }

    /// Check if an order for `product_id` is in flight.
    pub fn is_pending(&self, product_id: ProductId) -> bool {
        self.pending.contains(&product_id)
    }
}

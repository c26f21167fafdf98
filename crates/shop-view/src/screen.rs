//! Render-ready projection of the store state.
//!
//! The rendering host maps a `Screen` to markup one-to-one; every decision
//! about what is visible is made here.

use shop_commerce::{Currency, ProductId};

use crate::state::{StoreState, ViewState};

pub const LOADING_MESSAGE: &str = "Loading products...";
pub const STORE_TITLE: &str = "E-Commerce Store";
pub const PRODUCTS_HEADING: &str = "Products";
pub const BUY_LABEL: &str = "Buy Now";
pub const PENDING_LABEL: &str = "Ordering...";

/// One product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    /// Formatted price, e.g. "$29.99".
    pub price: String,
    /// An order for this product is in flight; the buy control is disabled.
    pub pending: bool,
}

impl ProductCard {
    /// Label for the price line.
    pub fn price_label(&self) -> String {
        format!("Price: {}", self.price)
    }

    /// Label for the buy control.
    pub fn button_label(&self) -> &'static str {
        if self.pending {
            PENDING_LABEL
        } else {
            BUY_LABEL
        }
    }
}

/// The settled storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storefront {
    pub title: &'static str,
    pub heading: &'static str,
    /// Banner text, present only when showing fallback data.
    pub warning: Option<String>,
    pub cards: Vec<ProductCard>,
    /// Number of orders placed, present only when at least one exists.
    pub recent_orders: Option<usize>,
}

impl Storefront {
    /// Text of the recent orders line, if shown.
    pub fn recent_orders_label(&self) -> Option<String> {
        self.recent_orders
            .map(|count| format!("Recent Orders: {}", count))
    }
}

/// What the host should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Only a loading indicator; nothing else is rendered.
    Loading { message: &'static str },
    Ready(Storefront),
}

impl Screen {
    /// Project the state into a screen.
    pub fn project(state: &StoreState, currency: Currency) -> Screen {
        let (error, products) = match &state.view {
            ViewState::Loading => {
                return Screen::Loading {
                    message: LOADING_MESSAGE,
                }
            }
            ViewState::Ready { error, products } => (error, products),
        };

        let cards = products
            .iter()
            .map(|p| ProductCard {
                id: p.id,
                name: p.name.clone(),
                price: p.price_display(currency),
                pending: state.is_pending(p.id),
            })
            .collect();

        Screen::Ready(Storefront {
            title: STORE_TITLE,
            heading: PRODUCTS_HEADING,
            warning: error
                .as_ref()
                .map(|e| format!("Warning: {}. Showing demo data.", e)),
            cards,
            recent_orders: (!state.orders.is_empty()).then(|| state.orders.len()),
        })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Screen::Loading { .. })
    }

    /// The storefront, once settled.
    pub fn storefront(&self) -> Option<&Storefront> {
        match self {
            Screen::Loading { .. } => None,
            Screen::Ready(storefront) => Some(storefront),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shop_commerce::{OrderConfirmation, Product};
    use shop_core::Lifecycle;

    fn ready(products: Vec<Product>) -> StoreState {
        let mut state = StoreState::new();
        state.apply(Lifecycle::Succeeded(products));
        state
    }

    #[test]
    fn test_loading_suppresses_everything() {
        let screen = Screen::project(&StoreState::new(), Currency::USD);
        assert_eq!(
            screen,
            Screen::Loading {
                message: "Loading products..."
            }
        );
        assert!(screen.storefront().is_none());
    }

    #[test]
    fn test_one_card_per_product() {
        let state = ready(vec![
            Product::new(1, "Chair", 45.0),
            Product::new(2, "Table", 199.5),
            Product::new(3, "Lamp", 12.349),
        ]);
        let screen = Screen::project(&state, Currency::USD);
        let store = screen.storefront().unwrap();

        assert_eq!(store.title, "E-Commerce Store");
        assert_eq!(store.heading, "Products");
        assert_eq!(store.warning, None);
        assert_eq!(store.recent_orders, None);
        assert_eq!(store.recent_orders_label(), None);

        let rendered: Vec<(&str, &str)> = store
            .cards
            .iter()
            .map(|c| (c.name.as_str(), c.price.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![("Chair", "$45.00"), ("Table", "$199.50"), ("Lamp", "$12.35")]
        );
        assert_eq!(store.cards[0].price_label(), "Price: $45.00");
        assert_eq!(store.cards[0].button_label(), "Buy Now");
    }

    #[test]
    fn test_fallback_shows_warning_banner() {
        let mut state = StoreState::new();
        state.apply(Lifecycle::Failed("API is down".to_string()));
        let screen = Screen::project(&state, Currency::USD);
        let store = screen.storefront().unwrap();

        assert_eq!(
            store.warning.as_deref(),
            Some("Warning: API is down. Showing demo data.")
        );
        let names: Vec<&str> = store.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Sample Product 1", "Sample Product 2"]);
    }

    #[test]
    fn test_recent_orders_only_when_present() {
        let mut state = ready(vec![Product::new(1, "Chair", 45.0)]);
        state.orders.record(OrderConfirmation::new(json!({"id": 1})));
        state.orders.record(OrderConfirmation::new(json!({"id": 2})));

        let screen = Screen::project(&state, Currency::USD);
        let store = screen.storefront().unwrap();
        assert_eq!(store.recent_orders, Some(2));
        assert_eq!(store.recent_orders_label().as_deref(), Some("Recent Orders: 2"));
    }

    #[test]
    fn test_pending_card_is_disabled() {
        let mut state = ready(vec![Product::new(1, "Chair", 45.0), Product::new(2, "Desk", 80.0)]);
        state.pending.insert(ProductId::new(2));

        let screen = Screen::project(&state, Currency::USD);
        let store = screen.storefront().unwrap();
        assert!(!store.cards[0].pending);
        assert!(store.cards[1].pending);
        assert_eq!(store.cards[1].button_label(), "Ordering...");
    }

    #[test]
    fn test_currency_from_config() {
        let state = ready(vec![Product::new(1, "Chair", 45.0)]);
        let screen = Screen::project(&state, Currency::GBP);
        assert_eq!(screen.storefront().unwrap().cards[0].price, "\u{00a3}45.00");
    }

    #[test]
    fn test_every_currency_shows_two_decimals() {
        let state = ready(vec![Product::new(1, "Lamp", 29.99), Product::new(2, "Rug", 120.0)]);
        for currency in Currency::ALL {
            let screen = Screen::project(&state, currency);
            let cards = &screen.storefront().unwrap().cards;
            assert_eq!(cards[0].price, format!("{}29.99", currency.symbol()));
            assert_eq!(cards[1].price, format!("{}120.00", currency.symbol()));
        }
    }
}

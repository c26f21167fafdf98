//! Single-page storefront.
//!
//! The browser host for `shop_view::StoreView`: mounts [`App`] once, renders
//! the view's `Screen`, and wires buy buttons back into the controller.

mod app;
mod host;

pub use app::App;
pub use host::{load_config, AlertNotifier, ConsoleSink};

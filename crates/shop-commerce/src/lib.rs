//! Storefront domain types.
//!
//! - **Catalog**: `Product`, `ProductId` and the demo fallback catalogue
//! - **Money**: `Money` / `Currency` for price display
//! - **Orders**: `OrderRequest` sent to the service, `OrderConfirmation` received back

pub mod ids;
pub mod money;
pub mod order;
pub mod product;

pub use ids::ProductId;
pub use money::{Currency, Money};
pub use order::{OrderConfirmation, OrderRequest};
pub use product::{fallback_products, Product};

//! Failure kinds surfaced by the view.

use shop_commerce::ProductId;
use shop_data::FetchError;

/// A failed request, tagged with what the view was doing.
///
/// Neither kind is fatal: the view keeps working in a degraded mode. The
/// message is the user-facing summary; the cause is reached through
/// `source()` / `fetch_error()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreFailure {
    /// The product listing could not be loaded.
    #[error("Failed to fetch products")]
    Fetch(#[source] FetchError),

    /// An order submission failed.
    #[error("Failed to create order for product {product_id}")]
    Order {
        product_id: ProductId,
        #[source]
        source: FetchError,
    },
}

impl StoreFailure {
    /// The underlying fetch error.
    pub fn fetch_error(&self) -> &FetchError {
        match self {
            Self::Fetch(err) => err,
            Self::Order { source, .. } => source,
        }
    }
}

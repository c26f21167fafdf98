//! Request lifecycle tracking.

use std::fmt;

/// Outbound request kinds issued by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// `GET /api/products`.
    Products,
    /// `POST /api/orders`.
    Order,
}

impl RequestKind {
    /// Get the name of this request kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Order => "order",
        }
    }

    /// Path of the endpoint, relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Products => "/api/products",
            Self::Order => "/api/orders",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A request lifecycle event.
///
/// Every request goes `Started` then exactly one of `Succeeded` / `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle<T, E> {
    /// Request issued, not yet settled.
    Started,
    /// Request settled successfully.
    Succeeded(T),
    /// Request settled with an error.
    Failed(E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_kind_paths() {
        assert_eq!(RequestKind::Products.path(), "/api/products");
        assert_eq!(RequestKind::Order.path(), "/api/orders");
        assert_eq!(RequestKind::Order.to_string(), "order");
    }
}

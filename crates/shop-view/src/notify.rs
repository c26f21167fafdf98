//! User notifications.

use shop_commerce::ProductId;

/// Message shown after a successful order.
pub const ORDER_PLACED_MESSAGE: &str = "Order created successfully!";
/// Message shown after a failed order.
pub const ORDER_FAILED_MESSAGE: &str = "Failed to create order. Please try again.";

/// Something the user must be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    OrderPlaced { product_id: ProductId },
    OrderFailed { product_id: ProductId },
}

impl Notification {
    /// Text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::OrderPlaced { .. } => ORDER_PLACED_MESSAGE,
            Self::OrderFailed { .. } => ORDER_FAILED_MESSAGE,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::OrderFailed { .. })
    }

    pub fn product_id(&self) -> ProductId {
        match self {
            Self::OrderPlaced { product_id } | Self::OrderFailed { product_id } => *product_id,
        }
    }
}

/// Presents notifications to the user.
///
/// A blocking implementation (e.g. `window.alert`) returns only once the user
/// has dismissed the message; a toast implementation returns immediately.
/// The view does not depend on which.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for std::rc::Rc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_messages() {
        let placed = Notification::OrderPlaced {
            product_id: ProductId::new(1),
        };
        assert_eq!(placed.message(), "Order created successfully!");
        assert!(!placed.is_error());

        let failed = Notification::OrderFailed {
            product_id: ProductId::new(2),
        };
        assert_eq!(failed.message(), "Failed to create order. Please try again.");
        assert!(failed.is_error());
        assert_eq!(failed.product_id(), ProductId::new(2));
    }
}

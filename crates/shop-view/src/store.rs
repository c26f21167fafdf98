//! The StoreView controller.

use std::cell::RefCell;

use shop_commerce::{Currency, OrderConfirmation, ProductId};
use shop_core::{Lifecycle, RequestKind, StoreConfig};
use shop_data::{StoreApi, Transport};
use shop_observability::StructuredLogger;

use crate::error::StoreFailure;
use crate::notify::{Notification, Notifier};
use crate::screen::Screen;
use crate::state::StoreState;

/// Where the view is in its mount lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPhase {
    /// Created, `mount` not yet called.
    Fresh,
    Mounted,
    /// Torn down; late completions are discarded.
    Unmounted,
}

/// Result of `StoreView::mount`.
#[derive(Debug, Clone, PartialEq)]
pub enum MountOutcome {
    /// Live products are shown.
    Loaded { count: usize },
    /// The fetch failed; fallback products are shown.
    Fallback(StoreFailure),
    /// `mount` was already called on this view; no request was made.
    AlreadyMounted,
    /// The view was unmounted before the fetch settled.
    Discarded,
}

/// Result of `StoreView::buy`.
#[derive(Debug, Clone, PartialEq)]
pub enum BuyOutcome {
    Placed(OrderConfirmation),
    Failed(StoreFailure),
    /// An order for the same product is still in flight; no request was made.
    AlreadyPending,
    /// The view was unmounted; the result (if any) was dropped.
    Discarded,
}

struct Inner {
    phase: MountPhase,
    state: StoreState,
}

type Listener = Box<dyn Fn(&StoreState)>;

/// The storefront view.
///
/// Single-threaded: state lives in a `RefCell` and is never borrowed across
/// an `.await`, so completions from concurrent requests apply one at a time.
/// Share it with `Rc` to drive `mount` and `buy` from spawned tasks.
pub struct StoreView<T, N> {
    api: StoreApi<T>,
    notifier: N,
    logger: StructuredLogger,
    currency: Currency,
    inner: RefCell<Inner>,
    listeners: RefCell<Vec<Listener>>,
}

impl<T: Transport, N: Notifier> StoreView<T, N> {
    /// Create a view that talks to `config.api` through `transport`.
    pub fn new(transport: T, notifier: N, config: &StoreConfig, logger: StructuredLogger) -> Self {
        Self {
            api: StoreApi::new(transport, config.api.clone()),
            notifier,
            logger,
            currency: config.display.currency,
            inner: RefCell::new(Inner {
                phase: MountPhase::Fresh,
                state: StoreState::new(),
            }),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Register a callback run after every state change.
    pub fn subscribe(&self, listener: impl Fn(&StoreState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Current state.
    pub fn snapshot(&self) -> StoreState {
        self.inner.borrow().state.clone()
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        Screen::project(&self.inner.borrow().state, self.currency)
    }

    pub fn phase(&self) -> MountPhase {
        self.inner.borrow().phase
    }

    /// Load the product list.
    ///
    /// Issues exactly one request per view. On failure the fallback catalogue
    /// is shown with a warning; the view never stays in loading because of
    /// an error.
    pub async fn mount(&self) -> MountOutcome {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.phase != MountPhase::Fresh {
                self.logger.debug("Mount ignored: view already mounted");
                return MountOutcome::AlreadyMounted;
            }
            inner.phase = MountPhase::Mounted;
            inner.state.apply(Lifecycle::Started);
        }
        self.emit();

        let url = self.api.config().endpoint(RequestKind::Products.path());
        self.logger
            .info_builder("Fetching products")
            .field("url", url)
            .emit();

        let result = self.api.list_products().await;

        if self.phase() == MountPhase::Unmounted {
            self.logger
                .debug_builder("Discarding settled request after unmount")
                .field("request", RequestKind::Products.name())
                .emit();
            return MountOutcome::Discarded;
        }

        let (event, outcome) = match result {
            Ok(products) => {
                self.logger
                    .info_builder("Products loaded")
                    .field_i64("count", products.len() as i64)
                    .emit();
                let count = products.len();
                (Lifecycle::Succeeded(products), MountOutcome::Loaded { count })
            }
            Err(err) => {
                let cause = err.to_string();
                let failure = StoreFailure::Fetch(err);
                let message = failure.to_string();
                self.logger
                    .error_builder("Error fetching products")
                    .field("error", message.clone())
                    .field("cause", cause)
                    .field_bool("fallback", true)
                    .emit();
                (Lifecycle::Failed(message), MountOutcome::Fallback(failure))
            }
        };

        self.inner.borrow_mut().state.apply(event);
        self.emit();
        outcome
    }

    /// Order one unit of `product_id`.
    ///
    /// At most one submission per product is in flight; a repeated call while
    /// one is pending returns `AlreadyPending` without a request. Submissions
    /// for different products may interleave.
    pub async fn buy(&self, product_id: ProductId) -> BuyOutcome {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.phase == MountPhase::Unmounted {
                return BuyOutcome::Discarded;
            }
            if !inner.state.pending.insert(product_id) {
                self.logger
                    .warn_builder("Order already in flight")
                    .field_i64("product_id", product_id.get())
                    .emit();
                return BuyOutcome::AlreadyPending;
            }
        }
        self.emit();

        self.logger
            .info_builder("Submitting order")
            .field_i64("product_id", product_id.get())
            .emit();

        let result = self.api.create_order(product_id).await;

        let unmounted = {
            let mut inner = self.inner.borrow_mut();
            inner.state.pending.remove(&product_id);
            inner.phase == MountPhase::Unmounted
        };
        if unmounted {
            self.logger
                .debug_builder("Discarding settled request after unmount")
                .field("request", RequestKind::Order.name())
                .field_i64("product_id", product_id.get())
                .emit();
            return BuyOutcome::Discarded;
        }

        match result {
            Ok(confirmation) => {
                self.logger
                    .info_builder("Order created")
                    .field_i64("product_id", product_id.get())
                    .field("order_id", confirmation.order_id().unwrap_or_default())
                    .emit();
                self.notifier.notify(Notification::OrderPlaced { product_id });
                self.inner
                    .borrow_mut()
                    .state
                    .orders
                    .record(confirmation.clone());
                self.emit();
                BuyOutcome::Placed(confirmation)
            }
            Err(err) => {
                let failure = StoreFailure::Order {
                    product_id,
                    source: err,
                };
                self.logger
                    .error_builder("Error creating order")
                    .field_i64("product_id", product_id.get())
                    .field("error", failure.to_string())
                    .field("cause", failure.fetch_error().to_string())
                    .emit();
                self.notifier.notify(Notification::OrderFailed { product_id });
                self.emit();
                BuyOutcome::Failed(failure)
            }
        }
    }

    /// Tear the view down. Requests still in flight are left to settle but
    /// their results are dropped, and listeners are released.
    pub fn unmount(&self) {
        self.inner.borrow_mut().phase = MountPhase::Unmounted;
        self.listeners.borrow_mut().clear();
        self.logger.debug("View unmounted");
    }

    fn emit(&self) {
        let state = self.snapshot();
        for listener in self.listeners.borrow().iter() {
            listener(&state);
        }
    }
}

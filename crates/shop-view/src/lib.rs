//! StoreView: the storefront's single view.
//!
//! Loads the product list once on mount (falling back to demo data when the
//! service is unreachable) and submits single-unit orders on demand.
//!
//! - `ViewState` / `StoreState` - Explicit state, changed only by lifecycle events
//! - `Notifier` - Blocking user notifications, swappable per host
//! - `Screen` - Render-ready projection consumed by the rendering host
//! - `StoreView` - Controller tying the API, state and notifier together

mod error;
mod notify;
mod screen;
mod state;
mod store;

pub use error::*;
pub use notify::*;
pub use screen::*;
pub use state::*;
pub use store::*;

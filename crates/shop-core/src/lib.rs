//! Core abstractions for the storefront.
//!
//! This crate provides the fundamental types shared by every layer:
//! - `StoreConfig` - Layered configuration (defaults, file, environment)
//! - `SessionId` - Identifier used to correlate log lines
//! - `Lifecycle` - Request lifecycle events driving view transitions

mod config;
mod context;
mod lifecycle;

pub use config::*;
pub use context::*;
pub use lifecycle::*;

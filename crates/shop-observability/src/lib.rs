//! Observability infrastructure for the storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with session context
//! - `LogSink` - Where rendered log lines go (stderr, memory, browser console)

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;

// Re-export level/format/session types from shop-core for convenience
pub use shop_core::{LogFormat, LogLevel, SessionId};

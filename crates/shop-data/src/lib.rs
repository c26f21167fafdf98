//! Data access layer for the storefront service.
//!
//! This crate provides:
//! - `Transport` - The seam where HTTP requests leave the process
//! - `FetchClient` - JSON request/response handling over a transport
//! - `StoreApi` - The two calls the storefront makes (`products`, `orders`)

mod api;
mod client;
mod error;
mod transport;

pub use api::*;
pub use client::*;
pub use error::*;
pub use transport::*;

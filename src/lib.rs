//! # backmarket-rs
//!
//! An async Rust client for the BackMarket seller API.
//!
//! Every operation performs a single HTTP request and returns an
//! [`ApiResult`]: either the raw response body of a 2xx response, or an
//! error message with a status code. Nothing is ever returned as `Err` and
//! nothing panics, so callers branch on the result instead of handling
//! errors.
//!
//! ## Services
//!
//! - **Categories**: the catalog tree and its branches
//! - **Listings**: list, read and update offers
//! - **Orders**: list, read and update orders and their invoices
//! - **Tasks**: poll asynchronous task status
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use backmarket_rs::{ApiConfig, BackMarketClient, ListingId, Query};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> backmarket_rs::Result<()> {
//!     let config = ApiConfig::new("base64-encoded-token", "https://www.backmarket.fr")
//!         .with_user_agent("acme-erp")
//!         .with_language("fr-fr");
//!     let client = BackMarketClient::new(config)?;
//!
//!     // New orders, first page
//!     let orders = client
//!         .orders()
//!         .list(Some(&Query::new().param("state", 1).param("page", 1)))
//!         .await;
//!     let orders: serde_json::Value = orders.json()?;
//!     println!("{}", orders["count"]);
//!
//!     // Set a listing out of stock
//!     let result = client
//!         .listings()
//!         .update(&ListingId::new("4183951"), &json!({"quantity": 0}), None)
//!         .await;
//!     if result.is_error() {
//!         eprintln!("{}: {:?}", result.status_code(), result.message());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{ApiConfig, BackMarketClient, HttpMethod, Transport};
pub use error::{Error, Result};
pub use models::{ApiResult, CategoryId, ListingId, OrderId, Query, TaskId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use backmarket_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{CategoriesService, ListingsService, OrdersService, TasksService};
    pub use crate::client::{ApiConfig, BackMarketClient, HttpMethod};
    pub use crate::error::{Error, Result};
    pub use crate::models::{ApiResult, CategoryId, ListingId, OrderId, Query, TaskId};
}

//! HTTP client and request executor for the BackMarket API.
//!
//! This module provides the main entry point [`BackMarketClient`], its
//! configuration [`ApiConfig`], and the [`Transport`] seam the executor
//! sends requests through.
//!
//! # Example
//!
//! ```no_run
//! use backmarket_rs::{ApiConfig, BackMarketClient};
//!
//! # async fn example() -> backmarket_rs::Result<()> {
//! let client = BackMarketClient::new(ApiConfig::from_env()?)?;
//!
//! let listings = client.listings().list(None).await;
//! println!("{:?}", listings);
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
#[cfg(test)]
pub(crate) mod mock;
mod transport;

pub use config::{ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_LANGUAGE};
pub use http::BackMarketClient;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub(crate) use http::{is_empty_payload, ClientInner};

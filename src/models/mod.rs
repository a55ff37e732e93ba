//! Data models for the BackMarket API.
//!
//! - [`primitives`] - Identifier newtypes used in endpoint paths
//! - [`query`] - Query string parameters
//! - [`result`] - The normalized [`ApiResult`] returned by every call
//!
//! Response bodies are not modelled: they are handed back raw and decoded
//! by the caller, optionally through [`ApiResult::json`].

pub mod primitives;
pub mod query;
pub mod result;

pub use primitives::*;
pub use query::Query;
pub use result::{ApiResult, SUCCESS_STATUS, VALIDATION_STATUS};

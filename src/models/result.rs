//! The normalized outcome of every API call.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Error, Result};

/// Status code reported on every successful response.
///
/// The upstream 2xx code (201, 204, ...) is not passed through.
pub const SUCCESS_STATUS: u16 = 200;

/// Status code reported when a required identifier or payload is missing.
pub const VALIDATION_STATUS: u16 = 400;

/// Result of a BackMarket API call.
///
/// Every public operation returns this instead of a `Result`: transport
/// faults, upstream errors and local validation failures all end up in
/// [`ApiResult::Failure`]. Serializes to
/// `{"status":"success","data":...,"status_code":200}` or
/// `{"status":"error","message":...,"status_code":...}`.
///
/// # Example
///
/// ```
/// use backmarket_rs::ApiResult;
///
/// let result = ApiResult::success(r#"{"id":1}"#);
/// assert!(result.is_success());
/// assert_eq!(result.status_code(), 200);
///
/// let value: serde_json::Value = result.json().unwrap();
/// assert_eq!(value["id"], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum ApiResult {
    /// The upstream returned a 2xx response.
    #[serde(rename = "success")]
    Success {
        /// Raw, undecoded response body
        data: String,
        /// Always [`SUCCESS_STATUS`]
        status_code: u16,
    },

    /// Validation failed, the upstream returned a non-2xx response, or the
    /// request could not be performed.
    #[serde(rename = "error")]
    Failure {
        /// Raw response body or fault description
        message: String,
        /// Upstream status code, 400 for validation, 500 for plain faults
        status_code: u16,
    },
}

impl ApiResult {
    /// A successful result carrying the raw body.
    pub fn success(data: impl Into<String>) -> Self {
        ApiResult::Success {
            data: data.into(),
            status_code: SUCCESS_STATUS,
        }
    }

    /// A failed result.
    pub fn failure(message: impl Into<String>, status_code: u16) -> Self {
        ApiResult::Failure {
            message: message.into(),
            status_code,
        }
    }

    /// A 400 failure produced before any request is sent.
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::failure(message, VALIDATION_STATUS)
    }

    /// Returns `true` for [`ApiResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    /// Returns `true` for [`ApiResult::Failure`].
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// The reported status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiResult::Success { status_code, .. } | ApiResult::Failure { status_code, .. } => {
                *status_code
            }
        }
    }

    /// The raw response body of a successful call.
    pub fn data(&self) -> Option<&str> {
        match self {
            ApiResult::Success { data, .. } => Some(data),
            ApiResult::Failure { .. } => None,
        }
    }

    /// The error message of a failed call.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure { message, .. } => Some(message),
        }
    }

    /// Decode the body of a successful call as JSON.
    ///
    /// A failed call is returned as [`Error::Api`].
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match self {
            ApiResult::Success { data, .. } => Ok(serde_json::from_str(data)?),
            ApiResult::Failure {
                message,
                status_code,
            } => Err(Error::Api {
                status: *status_code,
                message: message.clone(),
            }),
        }
    }

    /// Convert into a `Result` holding the raw body.
    pub fn into_result(self) -> Result<String> {
        match self {
            ApiResult::Success { data, .. } => Ok(data),
            ApiResult::Failure {
                message,
                status_code,
            } => Err(Error::Api {
                status: status_code,
                message,
            }),
        }
    }
}

impl From<Error> for ApiResult {
    fn from(err: Error) -> Self {
        ApiResult::failure(err.fault_message(), err.status_code())
    }
}

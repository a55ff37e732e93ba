//! Request executor for the BackMarket API.

use std::sync::Arc;

use reqwest::header::HeaderValue;
use serde_json::Value;

use crate::api::{CategoriesService, ListingsService, OrdersService, TasksService};
use crate::models::{ApiResult, Query};
use crate::{Error, Result};

use super::config::ApiConfig;
use super::transport::{HttpMethod, HttpRequest, ReqwestTransport, Transport};

/// The main client for interacting with the BackMarket seller API.
///
/// Cheap to clone: clones share the same configuration and connection pool.
/// Every call returns an [`ApiResult`] and never panics or returns `Err`.
///
/// # Example
///
/// ```no_run
/// use backmarket_rs::{ApiConfig, BackMarketClient, OrderId};
///
/// # async fn example() -> backmarket_rs::Result<()> {
/// let config = ApiConfig::new("base64-token", "https://www.backmarket.fr")
///     .with_user_agent("acme-erp");
/// let client = BackMarketClient::new(config)?;
///
/// let result = client.orders().get(&OrderId::new("12345"), None).await;
/// match result.data() {
///     Some(body) => println!("order: {body}"),
///     None => eprintln!("failed ({}): {:?}", result.status_code(), result.message()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BackMarketClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) config: ApiConfig,
}

impl BackMarketClient {
    /// Create a client backed by `reqwest`.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client from `BACKMARKET_*` environment variables.
    ///
    /// See [`ApiConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    /// Create a client with a custom transport.
    pub fn with_transport(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(ClientInner { transport, config }),
        }
    }

    /// Get the categories service.
    pub fn categories(&self) -> CategoriesService {
        CategoriesService::new(self.inner.clone())
    }

    /// Get the listings service.
    pub fn listings(&self) -> ListingsService {
        ListingsService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the tasks service.
    pub fn tasks(&self) -> TasksService {
        TasksService::new(self.inner.clone())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Send a request to an arbitrary endpoint.
    ///
    /// `path` is appended to the base URL as-is, followed by `?` and the
    /// encoded `query` (the `?` is present even when `query` is empty).
    /// `body` is sent as JSON unless it is `None` or empty (`null`, `{}`,
    /// `[]`, `""`), in which case the request has no body.
    pub async fn make_request(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<&Value>,
        query: Option<&Query>,
    ) -> ApiResult {
        self.inner.make_request(path, method, body, query).await
    }
}

impl ClientInner {
    /// Perform one request and normalize the outcome.
    pub(crate) async fn make_request(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<&Value>,
        query: Option<&Query>,
    ) -> ApiResult {
        let request = match self.build_request(path, method, body, query) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(%method, path, error = %err, "failed to build request");
                return err.into();
            }
        };

        tracing::debug!(%method, path, has_body = request.body.is_some(), "sending request");

        match self.transport.send(request).await {
            Ok(response) if response.is_success() => {
                tracing::debug!(%method, path, status = response.status, "request succeeded");
                ApiResult::success(response.body)
            }
            Ok(response) => {
                tracing::debug!(%method, path, status = response.status, "request failed");
                ApiResult::failure(response.body, response.status)
            }
            Err(err) => {
                tracing::warn!(%method, path, error = %err, "transport fault");
                err.into()
            }
        }
    }

    fn build_request(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<&Value>,
        query: Option<&Query>,
    ) -> Result<HttpRequest> {
        let query = query.map(Query::encode).unwrap_or_default();
        let url = format!("{}{}?{}", self.config.api_base_url(), path, query);

        let body = match body {
            Some(payload) if !is_empty_payload(payload) => Some(serde_json::to_string(payload)?),
            _ => None,
        };

        Ok(HttpRequest {
            method,
            url,
            headers: self.build_headers()?,
            body,
        })
    }

    /// Headers sent on every request.
    fn build_headers(&self) -> Result<Vec<(String, String)>> {
        let headers = [
            ("Content-Type", "application/json".to_string()),
            ("Accept", "application/json".to_string()),
            ("Accept-Language", self.config.language_tag().to_string()),
            ("Authorization", self.config.authorization()),
            ("User-Agent", self.config.user_agent().to_string()),
        ];

        headers
            .into_iter()
            .map(|(name, value)| {
                HeaderValue::from_str(&value)
                    .map_err(|_| Error::InvalidInput(format!("Invalid {name} header value")))?;
                Ok((name.to_string(), value))
            })
            .collect()
    }
}

/// `null`, `{}`, `[]` and `""` count as no payload.
pub(crate) fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

impl std::fmt::Debug for BackMarketClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackMarketClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

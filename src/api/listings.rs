//! Listings service for seller offers.

use std::sync::Arc;

use serde::Serialize;

use crate::client::{is_empty_payload, ClientInner, HttpMethod};
use crate::models::{ApiResult, ListingId, Query};
use crate::Error;

use super::endpoint;

const LISTINGS: &str = "/ws/listings";
const LISTING: &str = "/ws/listings/{listingId}";

const MISSING_LISTING_ID: &str = "Listing ID is missing. Please provide a valid listing ID.";
const MISSING_PAYLOAD: &str = "Request parameters are missing.";

/// Service for listing operations.
///
/// # Example
///
/// ```no_run
/// use backmarket_rs::ListingId;
/// use serde_json::json;
///
/// # async fn example(client: backmarket_rs::BackMarketClient) {
/// let listing = ListingId::new("4183951");
///
/// let current = client.listings().get(&listing, None).await;
///
/// let update = json!({"quantity": 5, "price": "199.00"});
/// let result = client.listings().update(&listing, &update, None).await;
/// if result.is_error() {
///     eprintln!("update rejected: {:?}", result.message());
/// }
/// # }
/// ```
pub struct ListingsService {
    inner: Arc<ClientInner>,
}

impl ListingsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the seller's listings.
    pub async fn list(&self, query: Option<&Query>) -> ApiResult {
        self.inner
            .make_request(LISTINGS, HttpMethod::Get, None, query)
            .await
    }

    /// Get a single listing.
    pub async fn get(&self, listing_id: &ListingId, query: Option<&Query>) -> ApiResult {
        if listing_id.is_empty() {
            return ApiResult::invalid(MISSING_LISTING_ID);
        }

        let path = endpoint(LISTING, "{listingId}", listing_id.as_str());
        self.inner
            .make_request(&path, HttpMethod::Get, None, query)
            .await
    }

    /// Update a listing.
    ///
    /// `payload` is sent as the JSON body and must not serialize to an
    /// empty value.
    pub async fn update<B>(
        &self,
        listing_id: &ListingId,
        payload: &B,
        query: Option<&Query>,
    ) -> ApiResult
    where
        B: Serialize + ?Sized,
    {
        if listing_id.is_empty() {
            return ApiResult::invalid(MISSING_LISTING_ID);
        }

        let payload = match serde_json::to_value(payload) {
            Ok(value) => value,
            Err(err) => return Error::from(err).into(),
        };
        if is_empty_payload(&payload) {
            return ApiResult::invalid(MISSING_PAYLOAD);
        }

        let path = endpoint(LISTING, "{listingId}", listing_id.as_str());
        self.inner
            .make_request(&path, HttpMethod::Post, Some(&payload), query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{test_client, RecordingTransport};
    use serde_json::json;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_list() {
        let transport = RecordingTransport::responding(200, r#"{"results":[]}"#);
        let client = test_client(transport.clone());

        let query = Query::new().param("page", 3);
        let result = client.listings().list(Some(&query)).await;

        assert!(result.is_success());
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://api.test/ws/listings?page=3");
    }

    #[tokio::test]
    async fn test_get_requires_id() {
        let transport = RecordingTransport::responding(200, "{}");
        let client = test_client(transport.clone());

        let result = client.listings().get(&ListingId::new(""), None).await;

        assert_eq!(result, ApiResult::failure(MISSING_LISTING_ID, 400));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_update_sends_post_with_body() {
        let transport = RecordingTransport::responding(200, r#"{"id":1}"#);
        let client = test_client(transport.clone());

        let result = client
            .listings()
            .update(&ListingId::new("L1"), &json!({"name": "X"}), None)
            .await;

        assert_eq!(result, ApiResult::success(r#"{"id":1}"#));
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://api.test/ws/listings/L1?");
        assert_eq!(request.body.as_deref(), Some(r#"{"name":"X"}"#));
    }

    #[tokio::test]
    async fn test_update_accepts_typed_payload() {
        #[derive(Serialize)]
        struct StockUpdate {
            quantity: u32,
        }

        let transport = RecordingTransport::responding(200, "{}");
        let client = test_client(transport.clone());

        client
            .listings()
            .update(&ListingId::new("L1"), &StockUpdate { quantity: 0 }, None)
            .await;

        assert_eq!(
            transport.last_request().unwrap().body.as_deref(),
            Some(r#"{"quantity":0}"#)
        );
    }

    #[tokio::test]
    async fn test_update_rejects_empty_payload() {
        let transport = RecordingTransport::responding(200, "{}");
        let client = test_client(transport.clone());

        let empty: HashMap<String, String> = HashMap::new();
        let result = client
            .listings()
            .update(&ListingId::new("L1"), &empty, None)
            .await;

        assert_eq!(result, ApiResult::failure(MISSING_PAYLOAD, 400));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_update_checks_id_before_payload() {
        let transport = RecordingTransport::responding(200, "{}");
        let client = test_client(transport.clone());

        let result = client
            .listings()
            .update(&ListingId::new(""), &json!({}), None)
            .await;

        assert_eq!(result.message(), Some(MISSING_LISTING_ID));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_update_unserializable_payload_is_500() {
        // JSON object keys must be strings.
        let mut payload: HashMap<(u8, u8), u8> = HashMap::new();
        payload.insert((1, 2), 3);

        let transport = RecordingTransport::responding(200, "{}");
        let client = test_client(transport.clone());

        let result = client
            .listings()
            .update(&ListingId::new("L1"), &payload, None)
            .await;

        assert_eq!(result.status_code(), 500);
        assert_eq!(transport.calls(), 0);
    }
}

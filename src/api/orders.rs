//! Orders service for order retrieval and updates.

use std::sync::Arc;

use crate::client::{ClientInner, HttpMethod};
use crate::models::{ApiResult, OrderId, Query};

use super::endpoint;

const ORDERS: &str = "/ws/orders";
const ORDER: &str = "/ws/orders/{order_id}";
const ORDER_INVOICE: &str = "/ws/orders/{order_id}/invoice";

const MISSING_ORDER_ID: &str = "Order ID is missing. Please provide a valid order ID.";

/// Service for order operations.
///
/// The update operations send their parameters in the query string and
/// post no body.
///
/// # Example
///
/// ```no_run
/// use backmarket_rs::{OrderId, Query};
///
/// # async fn example(client: backmarket_rs::BackMarketClient) {
/// let pending = client
///     .orders()
///     .list(Some(&Query::new().param("state", 1)))
///     .await;
///
/// let order = OrderId::new("A123");
/// let accept = Query::new().param("new_state", 2).param("sku", "IPH12-64-BLK");
/// let result = client.orders().update(&order, Some(&accept)).await;
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List orders, optionally filtered by `query`.
    pub async fn list(&self, query: Option<&Query>) -> ApiResult {
        self.inner
            .make_request(ORDERS, HttpMethod::Get, None, query)
            .await
    }

    /// Get a specific order.
    pub async fn get(&self, order_id: &OrderId, query: Option<&Query>) -> ApiResult {
        self.by_id(ORDER, HttpMethod::Get, order_id, query).await
    }

    /// Update a specific order (accept, ship, ...).
    pub async fn update(&self, order_id: &OrderId, query: Option<&Query>) -> ApiResult {
        self.by_id(ORDER, HttpMethod::Post, order_id, query).await
    }

    /// Update the customer invoice attached to an order.
    pub async fn update_invoice(&self, order_id: &OrderId, query: Option<&Query>) -> ApiResult {
        self.by_id(ORDER_INVOICE, HttpMethod::Post, order_id, query).await
    }

    async fn by_id(
        &self,
        template: &str,
        method: HttpMethod,
        order_id: &OrderId,
        query: Option<&Query>,
    ) -> ApiResult {
        if order_id.is_empty() {
            return ApiResult::invalid(MISSING_ORDER_ID);
        }

        let path = endpoint(template, "{order_id}", order_id.as_str());
        self.inner.make_request(&path, method, None, query).await
    }
}

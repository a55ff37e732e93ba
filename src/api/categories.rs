//! Categories service for the catalog tree.

use std::sync::Arc;

use crate::client::{ClientInner, HttpMethod};
use crate::models::{ApiResult, CategoryId, Query};

use super::endpoint;

const CATEGORY_TREE: &str = "/ws/category/tree";
const CATEGORY_BRANCH: &str = "/ws/category/tree/{categoryId}";

/// Service for catalog category operations.
///
/// # Example
///
/// ```no_run
/// use backmarket_rs::CategoryId;
///
/// # async fn example(client: backmarket_rs::BackMarketClient) {
/// let tree = client.categories().tree(None).await;
/// let phones = client.categories().branch(&CategoryId::from(2u64), None).await;
/// # }
/// ```
pub struct CategoriesService {
    inner: Arc<ClientInner>,
}

impl CategoriesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the full category tree.
    pub async fn tree(&self, query: Option<&Query>) -> ApiResult {
        self.inner
            .make_request(CATEGORY_TREE, HttpMethod::Get, None, query)
            .await
    }

    /// Get the branch of the tree rooted at `category_id`.
    pub async fn branch(&self, category_id: &CategoryId, query: Option<&Query>) -> ApiResult {
        if category_id.is_empty() {
            return ApiResult::invalid("Category Id is missing.");
        }

        let path = endpoint(CATEGORY_BRANCH, "{categoryId}", category_id.as_str());
        self.inner
            .make_request(&path, HttpMethod::Get, None, query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::mock::{test_client, RecordingTransport};
    use crate::models::{ApiResult, CategoryId, Query};

    #[tokio::test]
    async fn test_tree() {
        let transport = RecordingTransport::responding(200, "[]");
        let client = test_client(transport.clone());

        let result = client.categories().tree(None).await;

        assert_eq!(result, ApiResult::success("[]"));
        assert_eq!(
            transport.last_request().unwrap().url,
            "https://api.test/ws/category/tree?"
        );
    }

    #[tokio::test]
    async fn test_branch_path_and_query() {
        let transport = RecordingTransport::responding(200, "{}");
        let client = test_client(transport.clone());
        let query = Query::new().param("depth", 1);

        client
            .categories()
            .branch(&CategoryId::from(12u64), Some(&query))
            .await;

        assert_eq!(
            transport.last_request().unwrap().url,
            "https://api.test/ws/category/tree/12?depth=1"
        );
    }

    #[tokio::test]
    async fn test_branch_requires_id() {
        let transport = RecordingTransport::responding(200, "{}");
        let client = test_client(transport.clone());

        let result = client.categories().branch(&CategoryId::new(""), None).await;

        assert_eq!(result, ApiResult::failure("Category Id is missing.", 400));
        assert_eq!(transport.calls(), 0);
    }
}

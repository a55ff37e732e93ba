//! Tasks service.

use std::sync::Arc;

use crate::client::{ClientInner, HttpMethod};
use crate::models::{ApiResult, Query, TaskId};

use super::endpoint;

const TASK: &str = "/ws/tasks/{taskId}";

/// Service for polling asynchronous tasks.
pub struct TasksService {
    inner: Arc<ClientInner>,
}

impl TasksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the status of a task.
    pub async fn status(&self, task_id: &TaskId, query: Option<&Query>) -> ApiResult {
        if task_id.is_empty() {
            return ApiResult::invalid("Task ID is missing. Please provide a valid task ID.");
        }

        let path = endpoint(TASK, "{taskId}", task_id.as_str());
        self.inner
            .make_request(&path, HttpMethod::Get, None, query)
            .await
    }
}

//! Recording transport used by unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::config::ApiConfig;
use super::http::BackMarketClient;
use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::{Error, Result};

enum Reply {
    Respond(HttpResponse),
    Fail { status: Option<u16>, message: String },
}

/// Records every request and answers each one the same way.
pub(crate) struct RecordingTransport {
    reply: Reply,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub(crate) fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Respond(HttpResponse {
                status,
                body: body.to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing(status: Option<u16>, message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail {
                status,
                message: message.to_string(),
            },
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail { status, message } => Err(Error::Transport {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

pub(crate) fn test_client(transport: Arc<RecordingTransport>) -> BackMarketClient {
    let config = ApiConfig::new("dGVzdDp0ZXN0", "https://api.test")
        .with_user_agent("backmarket-rs-tests");
    BackMarketClient::with_transport(config, transport)
}

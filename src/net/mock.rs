//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::api::{ApiClient, ApiError, ApiRequest, ApiResponse, HttpTransport};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: serde_json::Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
    }

    pub fn fail(&self, reason: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Network(reason.to_owned())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request sent")
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

/// Client pointed at a fake host, backed by `transport`.
pub fn client(transport: &Arc<ScriptedTransport>) -> ApiClient {
    ApiClient::new("http://api.test", transport.clone())
}

//! REST client shared by every page that talks to the backend.
//!
//! DESIGN
//! ======
//! `ApiClient` owns the base URL and a set of default headers shared by all
//! of its clones, so setting `Authorization` once after sign-in
//! authenticates every later request. The wire itself sits behind
//! [`HttpTransport`]: browser builds use `gloo-net` through
//! [`FetchTransport`], tests plug in scripted transports.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies are distinct
//! [`ApiError`] variants. Nothing is retried here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ErrorBody;
#[cfg(feature = "csr")]
use super::types::User;

pub const AUTHORIZATION: &str = "Authorization";

/// HTTP verbs used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// A fully resolved request handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code and body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors produced by [`ApiClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// A 2xx body could not be decoded into the expected type.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

/// Sends a resolved request and returns the raw response.
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `fetch`-backed transport. Outside the browser every request fails with
/// [`ApiError::Network`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let req = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}

/// Shared handle to the backend API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    default_headers: Arc<RwLock<BTreeMap<String, String>>>,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.header_names())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').into(),
            default_headers: Arc::new(RwLock::new(BTreeMap::new())),
            transport,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `path` against the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }

    /// Send `Authorization: Bearer <token>` on every later request.
    pub fn set_authorization(&self, token: &str) {
        self.set_default_header(AUTHORIZATION, &bearer(token));
    }

    pub fn clear_authorization(&self) {
        self.remove_default_header(AUTHORIZATION);
    }

    /// Current `Authorization` default header, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.default_headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(AUTHORIZATION)
            .cloned()
    }

    pub fn set_default_header(&self, name: &str, value: &str) {
        self.default_headers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_owned(), value.to_owned());
    }

    pub fn remove_default_header(&self, name: &str) {
        self.default_headers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }

    fn header_names(&self) -> Vec<String> {
        self.default_headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    fn default_header_pairs(&self) -> Vec<(String, String)> {
        self.default_headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Build a request carrying the default headers, plus a JSON content
    /// type when there is a body.
    #[must_use]
    pub fn request(&self, method: Method, path: &str, body: Option<String>) -> ApiRequest {
        let mut headers = self.default_header_pairs();
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        ApiRequest { method, url: self.url(path), headers, body }
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let resp = self.transport.send(request).await.inspect_err(|e| {
            log::warn!("{method:?} {url} failed: {e}");
        })?;
        log::debug!("{method:?} {url} -> {}", resp.status);
        check_status(resp)
    }

    async fn send_json<B, R>(&self, method: Method, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let resp = self.execute(self.request(method, path, Some(encoded))).await?;
        decode_body(&resp.body)
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send_json(Method::Post, path, body).await
    }

    /// `PUT` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::post_json`].
    pub async fn put_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send_json(Method::Put, path, body).await
    }

    /// `POST` a JSON body, ignoring whatever a 2xx response carries.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-2xx status.
    pub async fn post_empty<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(self.request(Method::Post, path, Some(encoded))).await?;
        Ok(())
    }

    /// Upload a new avatar via `PATCH /users/avatar` as multipart field
    /// `avatar`, returning the updated user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the form cannot be built, the request
    /// fails, or the response is not a user.
    #[cfg(feature = "csr")]
    pub async fn upload_avatar(&self, file: &web_sys::File) -> Result<User, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{e:?}")))?;
        form.append_with_blob("avatar", file)
            .map_err(|e| ApiError::Encode(format!("{e:?}")))?;

        let url = self.url("/users/avatar");
        let mut builder = gloo_net::http::Request::patch(&url);
        for (name, value) in self.default_header_pairs() {
            builder = builder.header(&name, &value);
        }
        let resp = builder
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        log::debug!("PATCH {url} -> {status}");
        let resp = check_status(ApiResponse { status, body })?;
        decode_body(&resp.body)
    }
}

/// Format a bearer authorization value.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn check_status(resp: ApiResponse) -> Result<ApiResponse, ApiError> {
    if resp.is_success() {
        return Ok(resp);
    }
    let message = serde_json::from_str::<ErrorBody>(&resp.body).ok().map(|b| b.message);
    Err(ApiError::Status { status: resp.status, message })
}

fn decode_body<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

//! Request pipeline.
//!
//! Every remote call made by a store goes through [`Transport::send`]:
//!
//! 1. outgoing: attach `Authorization: Bearer <credential>` when the
//!    session is authenticated;
//! 2. incoming: a 401 or 403 terminates the session, then the failure is
//!    returned to the caller unchanged;
//! 3. any failure is normalized exactly once into a [`ClientError`].

use std::sync::Arc;

use flightdeck_core::{ClientError, Envelope, Failure};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::backend::{HttpBackend, HttpRequest, HttpResponse, Method};
use crate::session::AuthSession;

// ── Call ────────────────────────────────────────────────────────────

/// A request relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    encode_error: Option<String>,
}

impl Call {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            encode_error: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter only when a value is given.
    pub fn query_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// JSON body. An encoding failure surfaces when the call is sent.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(value),
            Err(e) => self.encode_error = Some(format!("failed to encode request body: {}", e)),
        }
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

// ── Transport ───────────────────────────────────────────────────────

pub struct Transport {
    backend: Arc<dyn HttpBackend>,
    session: Arc<AuthSession>,
    base_url: String,
}

impl Transport {
    pub fn new(backend: Arc<dyn HttpBackend>, session: Arc<AuthSession>, base_url: &str) -> Self {
        Self {
            backend,
            session,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Same backend and session, different API root.
    pub fn with_base_url(&self, base_url: &str) -> Self {
        Self::new(self.backend.clone(), self.session.clone(), base_url)
    }

    pub fn session(&self) -> &Arc<AuthSession> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a call. Non-2xx responses come back as `Err`.
    pub async fn send(&self, call: Call) -> Result<HttpResponse, ClientError> {
        if let Some(message) = call.encode_error {
            return Err(ClientError::from_failure(&Failure::Native(message)));
        }

        let mut request = HttpRequest::new(call.method, format!("{}{}", self.base_url, call.path));
        request.query = call.query;
        request.headers = call.headers;
        request.body = call.body;
        if let Some(credential) = self.session.credential() {
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {}", credential)));
        }

        debug!("{} {}", request.method.as_str(), request.url);
        let method = request.method;
        let url = request.url.clone();

        let resp = match self.backend.send(request).await {
            Ok(resp) => resp,
            Err(failure) => {
                let err = ClientError::from_failure(&failure);
                warn!("{} {} failed: {}", method.as_str(), url, err);
                return Err(err);
            }
        };

        if resp.is_success() {
            return Ok(resp);
        }

        let err = ClientError::from_failure(&Failure::Response {
            status: resp.status,
            body: resp.body,
        });
        if err.is_authorization_failure() {
            warn!(
                "{} {} answered {}, terminating session",
                method.as_str(),
                url,
                resp.status
            );
            self.session.terminate();
        } else {
            debug!("{} {} answered {}: {}", method.as_str(), url, resp.status, err);
        }
        Err(err)
    }

    /// Issue a call and decode the envelope's `data`.
    pub async fn fetch<R: DeserializeOwned>(&self, call: Call) -> Result<R, ClientError> {
        let resp = self.send(call).await?;
        let envelope: Envelope<R> = serde_json::from_slice(&resp.body).map_err(|e| {
            ClientError::from_failure(&Failure::Native(format!("invalid response body: {}", e)))
        })?;
        Ok(envelope.data)
    }

    /// Issue a call and ignore the response body.
    pub async fn execute(&self, call: Call) -> Result<(), ClientError> {
        self.send(call).await.map(|_| ())
    }
}

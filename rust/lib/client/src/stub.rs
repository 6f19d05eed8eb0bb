//! Scripted [`HttpBackend`] for tests and offline runs.

use std::collections::VecDeque;
use std::sync::Mutex;

use flightdeck_core::{Envelope, Failure};
use serde::Serialize;

use crate::backend::{HttpBackend, HttpRequest, HttpResponse, Method};

struct Route {
    method: Method,
    /// Suffix matched against the request URL (query excluded).
    path: String,
    reply: Result<HttpResponse, Failure>,
}

/// Answers requests from a queue of scripted replies and records every
/// request it sees.
///
/// Routes are matched by method and URL suffix, first match wins, and are
/// consumed on use. An unmatched request answers 404.
#[derive(Default)]
pub struct StubBackend {
    routes: Mutex<VecDeque<Route>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a raw reply.
    pub fn reply(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.push(
            method,
            path,
            Ok(HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
        )
    }

    /// Script a JSON value as a raw reply body.
    pub fn reply_json<T: Serialize>(&self, method: Method, path: &str, status: u16, body: &T) -> &Self {
        let body = serde_json::to_string(body).unwrap_or_default();
        self.reply(method, path, status, &body)
    }

    /// Script a 200 wrapped in the standard envelope.
    pub fn ok<T: Serialize>(&self, method: Method, path: &str, data: &T) -> &Self {
        self.reply_json(method, path, 200, &Envelope::ok(data))
    }

    /// Script an API error body `{status, message}`.
    pub fn error(&self, method: Method, path: &str, status: u16, message: &str) -> &Self {
        self.reply_json(
            method,
            path,
            status,
            &serde_json::json!({ "status": status, "message": message }),
        )
    }

    /// Script a failure without a response.
    pub fn fail(&self, method: Method, path: &str, failure: Failure) -> &Self {
        self.push(method, path, Err(failure))
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Scripted replies not yet consumed.
    pub fn pending(&self) -> usize {
        self.routes.lock().unwrap().len()
    }

    fn push(&self, method: Method, path: &str, reply: Result<HttpResponse, Failure>) -> &Self {
        self.routes.lock().unwrap().push_back(Route {
            method,
            path: path.to_string(),
            reply,
        });
        self
    }
}

#[async_trait::async_trait]
impl HttpBackend for StubBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Failure> {
        tracing::debug!("stub {} {}", request.method.as_str(), request.url);
        self.requests.lock().unwrap().push(request.clone());

        let mut routes = self.routes.lock().unwrap();
        let pos = routes
            .iter()
            .position(|r| r.method == request.method && request.url.ends_with(&r.path));
        match pos.and_then(|i| routes.remove(i)) {
            Some(route) => route.reply,
            None => Ok(HttpResponse {
                status: 404,
                body: br#"{"status":404,"message":"Not Found"}"#.to_vec(),
            }),
        }
    }
}

//! Error normalization.
//!
//! Failures reach the client in three shapes: a server response with a
//! structured body, a native error from the HTTP stack, or nothing usable.
//! [`normalize`] turns any of them into one human-readable message:
//!
//! 1. the API error body's `message` field,
//! 2. the native error's message,
//! 3. [`UNKNOWN_ERROR`].

use serde::Deserialize;

/// Last-resort message when a failure carries no description.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A failure as observed at the wire, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// The server answered with a non-success status.
    Response { status: u16, body: Vec<u8> },
    /// No usable response: connect error, timeout, undecodable body.
    Native(String),
    /// Nothing describable.
    Opaque,
}

impl Failure {
    /// HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Failure::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Produce the single user-facing message for a failure. Never panics.
pub fn normalize(failure: &Failure) -> String {
    match failure {
        Failure::Response { status, body } => body_message(body)
            .unwrap_or_else(|| format!("Request failed with status code {}", status)),
        Failure::Native(message) if !message.trim().is_empty() => message.clone(),
        Failure::Native(_) | Failure::Opaque => UNKNOWN_ERROR.to_string(),
    }
}

/// The `message` field of a structured API error body, if non-empty.
pub fn body_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    parsed.message.filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> Failure {
        Failure::Response {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn body_message_wins() {
        let f = response(400, r#"{"status":400,"message":"seat capacity must be positive","data":null}"#);
        assert_eq!(normalize(&f), "seat capacity must be positive");
    }

    #[test]
    fn status_line_when_body_has_no_message() {
        assert_eq!(
            normalize(&response(500, "<html>oops</html>")),
            "Request failed with status code 500"
        );
        assert_eq!(
            normalize(&response(404, r#"{"message":""}"#)),
            "Request failed with status code 404"
        );
        assert_eq!(
            normalize(&response(409, r#"{"message":42}"#)),
            "Request failed with status code 409"
        );
    }

    #[test]
    fn native_message_second() {
        let f = Failure::Native("error sending request: connection refused".into());
        assert_eq!(normalize(&f), "error sending request: connection refused");
    }

    #[test]
    fn fallback_last() {
        assert_eq!(normalize(&Failure::Opaque), UNKNOWN_ERROR);
        assert_eq!(normalize(&Failure::Native("   ".into())), UNKNOWN_ERROR);
    }

    #[test]
    fn status_accessor() {
        assert_eq!(response(403, "").status(), Some(403));
        assert_eq!(Failure::Opaque.status(), None);
    }
}

//! Buffered responses and how they are shown.

use http::{HeaderMap, StatusCode};
use hyper::body::Bytes;

/// A fully read response.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl FetchedResponse {
    /// Body as text; JSON bodies are pretty-printed.
    pub fn render_body(&self) -> String {
        match serde_json::from_slice::<serde_json::Value>(&self.body) {
            Ok(json) => serde_json::to_string_pretty(&json)
                .unwrap_or_else(|_| String::from_utf8_lossy(&self.body).into_owned()),
            Err(_) => String::from_utf8_lossy(&self.body).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &'static str) -> FetchedResponse {
        FetchedResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn test_pretty_json() {
        assert_eq!(response(r#"{"kind":"Pod"}"#).render_body(), "{\n  \"kind\": \"Pod\"\n}");
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(response("ok").render_body(), "ok");
    }
}

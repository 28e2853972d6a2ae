//! The request-issuing capability used by [`crate::client::DonationsClient`].
//!
//! Components never talk to `reqwest` directly; they go through
//! [`HttpTransport`] so tests can substitute a fake.

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::config::ApiConfig;

/// Failure to obtain a usable JSON response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status. `body` holds the parsed
    /// JSON body when there was one.
    #[error("server responded with status {status}")]
    Status { status: u16, body: Option<Value> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// The `error` string of a JSON error body, if the server supplied one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                body: Some(body), ..
            } => body.get("error").and_then(Value::as_str),
            _ => None,
        }
    }
}

/// Issues JSON reads and writes against paths relative to the API root.
///
/// Not `Send`: in the browser the underlying fetch futures are local.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError>;

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, TransportError>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url().clone(),
            auth_token: config.auth_token().map(str::to_owned),
        }
    }

    fn url(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportError::Network(format!("bad request path {path}: {e}")))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, TransportError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !status.is_success() {
            dioxus_logger::tracing::debug!("HTTP {} body: {}", status, text);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: serde_json::from_str(&text).ok(),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.url(path)?;
        self.send(self.client.get(url)).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, TransportError> {
        let url = self.url(path)?;
        let request = self.client.post(url);
        let request = match body {
            Some(body) => request.json(&body),
            None => request,
        };
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn server_message_comes_from_error_field() {
        let err = TransportError::Status {
            status: 400,
            body: Some(json!({"error": "Blood type mismatch"})),
        };
        assert_eq!(err.server_message(), Some("Blood type mismatch"));

        let no_field = TransportError::Status {
            status: 400,
            body: Some(json!({"detail": "nope"})),
        };
        assert_eq!(no_field.server_message(), None);

        let not_a_string = TransportError::Status {
            status: 400,
            body: Some(json!({"error": 12})),
        };
        assert_eq!(not_a_string.server_message(), None);

        let no_body = TransportError::Status {
            status: 500,
            body: None,
        };
        assert_eq!(no_body.server_message(), None);
        assert_eq!(TransportError::Network("reset".into()).server_message(), None);
    }

    #[test]
    fn paths_join_under_base_url() {
        let config = ApiConfig::new("http://localhost:8000/", None).unwrap();
        let transport = ReqwestTransport::new(&config);
        assert_eq!(
            transport.url("/api/donations/5/donor-info/").unwrap().as_str(),
            "http://localhost:8000/api/donations/5/donor-info/"
        );
    }
}

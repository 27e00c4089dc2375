// system-tests/tests/helpers/client.rs
// ============================================================================
// Module: Survey HTTP Client
// Description: Thin reqwest wrapper for the REST survey API.
// Purpose: Issue requests and capture status plus decoded body.
// Dependencies: reqwest, serde_json
// ============================================================================

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

/// Captured HTTP response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Response status code.
    pub status: u16,
    /// Decoded JSON body, or the raw text as a JSON string.
    pub body: Value,
}

impl ApiResponse {
    /// Returns the `message` field of an error envelope.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

/// HTTP client bound to a single server.
#[derive(Clone)]
pub struct SurveyClient {
    base_url: String,
    client: reqwest::Client,
}

impl SurveyClient {
    /// Creates a client with the given request timeout.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| format!("failed to build http client: {err}"))?;
        Ok(Self {
            base_url,
            client,
        })
    }

    /// Issues a `GET`.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, String> {
        self.send(Method::GET, path, None).await
    }

    /// Issues a `POST` with a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse, String> {
        self.send(Method::POST, path, Some(body.to_string())).await
    }

    /// Issues a `PUT` with a JSON body.
    pub async fn put(&self, path: &str, body: &Value) -> Result<ApiResponse, String> {
        self.send(Method::PUT, path, Some(body.to_string())).await
    }

    /// Issues a `PATCH` with a JSON body.
    pub async fn patch(&self, path: &str, body: &Value) -> Result<ApiResponse, String> {
        self.send(Method::PATCH, path, Some(body.to_string())).await
    }

    /// Issues a `DELETE`.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, String> {
        self.send(Method::DELETE, path, None).await
    }

    /// Issues a request with an arbitrary raw body.
    pub async fn send_raw(
        &self,
        method: Method,
        path: &str,
        body: &str,
    ) -> Result<ApiResponse, String> {
        self.send(method, path, Some(body.to_string())).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, String> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.header("content-type", "application/json").body(body);
        }
        let response =
            request.send().await.map_err(|err| format!("request to {url} failed: {err}"))?;
        let status = response.status().as_u16();
        let text =
            response.text().await.map_err(|err| format!("failed to read response body: {err}"))?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Ok(ApiResponse {
            status,
            body,
        })
    }
}

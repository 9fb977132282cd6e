//! HTTP transport behind the execution client.
//!
//! The client only needs `get`/`post` returning terminal responses; paging,
//! 204 interpretation, and merge logic live above this layer. The bundled
//! [`HttpTransport`] handles base-URL joining, bearer auth, timeouts, and
//! 202 poll-again responses. Retry and backoff beyond poll-again are not
//! this crate's concern.

use async_trait::async_trait;
use reqwest::{header, Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// A terminal HTTP response: a status in `[200, 399]` plus the raw body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Whether the service answered 204, the "result is empty" signal.
    pub fn is_no_content(&self) -> bool {
        self.status == 204
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Minimal fetch abstraction the execution client is written against.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, uri: &str) -> Result<ApiResponse>;
    async fn post(&self, uri: &str, body: &Value) -> Result<ApiResponse>;
}

/// `reqwest`-backed transport.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    token: Option<String>,
    poll_delay: std::time::Duration,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| Error::Http(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            poll_delay: config.poll_delay,
        })
    }

    fn url(&self, uri: &str) -> String {
        format!("{}{}", self.base_url, uri)
    }

    async fn send(&self, method: Method, uri: &str, body: Option<&Value>) -> Result<ApiResponse> {
        let mut next_uri = uri.to_string();
        let mut next_method = method;
        let mut next_body = body.cloned();

        loop {
            let mut request = self
                .client
                .request(next_method.clone(), self.url(&next_uri))
                .header(header::ACCEPT, "application/json");
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }
            if let Some(body) = &next_body {
                request = request.json(body);
            }

            let response = request
                .send()
                .await
                .map_err(|err| Error::Http(err.to_string()))?;

            if response.status().as_u16() == 202 {
                // result still being computed; poll the Location header when
                // provided, the same URI otherwise, always as a plain GET
                if let Some(location) = response
                    .headers()
                    .get(header::LOCATION)
                    .and_then(|value| value.to_str().ok())
                {
                    next_uri = location.to_string();
                }
                next_method = Method::GET;
                next_body = None;
                debug!(uri = %next_uri, "result not ready, polling again");
                sleep(self.poll_delay).await;
                continue;
            }

            return Self::into_api_response(response).await;
        }
    }

    async fn into_api_response(response: Response) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| Error::Http(err.to_string()))?;

        if (200..400).contains(&status) {
            Ok(ApiResponse { status, body })
        } else {
            Err(Error::Api {
                status,
                message: body,
            })
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, uri: &str) -> Result<ApiResponse> {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: &Value) -> Result<ApiResponse> {
        self.send(Method::POST, uri, Some(body)).await
    }
}

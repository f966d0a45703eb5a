use anyhow::Context;
use log::{debug, warn};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ApiSettings;
use crate::errors::{fetch_context, parse_context, Error, Result};

/// JSON-over-HTTP client bound to one API base URL.
/// Every request shares the client timeout; nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(settings.timeout_secs);
        Self::with_timeout(&settings.base_url, settings.user_agent, timeout)
    }

    pub fn with_timeout(base_url: &str, user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Self::build_client(user_agent, timeout)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::transport_error(&url, e))?;

        Self::decode(response, &url, what).await
    }

    /// POST a JSON body to `{base_url}{path}` and decode the JSON reply
    pub async fn post_json<B, T>(&self, path: &str, body: &B, what: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| Self::transport_error(&url, e))?;

        Self::decode(response, &url, what).await
    }

    fn build_client(user_agent: &str, timeout: Duration) -> anyhow::Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response, url: &str, what: &str) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status {}", url, status);
            return Err(Error::retrieval(
                &fetch_context(url),
                format!("API returned status: {}", status),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Self::transport_error(url, e))?;

        serde_json::from_str(&text).map_err(|e| {
            warn!("Malformed payload from {}: {}", url, e);
            Error::retrieval(&parse_context(what), e)
        })
    }

    fn transport_error(url: &str, err: reqwest::Error) -> Error {
        let reason = if err.is_timeout() {
            "request timed out".to_string()
        } else {
            err.to_string()
        };
        warn!("Request to {} failed: {}", url, reason);
        Error::retrieval(&fetch_context(url), reason)
    }
}

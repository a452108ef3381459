use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use teamroles_core::{AppError, AppResult};

/// Shared GET plumbing for the read-only Teams and Users services.
///
/// A 404 on a single-entity lookup is reported as absence. Every other
/// non-success status, connection error, timeout or undecodable body is an
/// `AppError::Transport`. Requests are never retried.
#[derive(Clone)]
pub struct HttpDirectoryClient {
    http_client: reqwest::Client,
    base_url: Url,
    service_name: &'static str,
}

impl HttpDirectoryClient {
    /// Creates a client rooted at the service base URL.
    #[must_use]
    pub fn new(
        http_client: reqwest::Client,
        mut base_url: Url,
        service_name: &'static str,
    ) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(path.as_str());
        }

        Self {
            http_client,
            base_url,
            service_name,
        }
    }

    /// Builds the HTTP client shared by directory adapters.
    pub fn build_http_client(timeout: Duration) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))
    }

    /// Returns the service base URL with a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) async fn fetch_optional<T>(&self, path: &str) -> AppResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(service = self.service_name, %url, "directory lookup");

        let response = self.send(&url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        self.decode(&url, response).await.map(Some)
    }

    pub(crate) async fn fetch_all<T>(&self, path: &str) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(service = self.service_name, %url, "directory listing");

        let response = self.send(&url).await?;
        self.decode(&url, response).await
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url.join(path).map_err(|error| {
            AppError::Internal(format!(
                "invalid {} path '{path}': {error}",
                self.service_name
            ))
        })
    }

    async fn send(&self, url: &Url) -> AppResult<reqwest::Response> {
        self.http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|error| {
                warn!(service = self.service_name, %url, %error, "directory request failed");
                AppError::Transport(format!("{} request failed: {error}", self.service_name))
            })
    }

    async fn decode<T>(&self, url: &Url, response: reqwest::Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            warn!(service = self.service_name, %url, %status, "directory answered with failure");
            return Err(AppError::Transport(format!(
                "{} answered with status {status}",
                self.service_name
            )));
        }

        response.json::<T>().await.map_err(|error| {
            AppError::Transport(format!(
                "{} returned an undecodable body: {error}",
                self.service_name
            ))
        })
    }
}

use async_trait::async_trait;
use reqwest::{header, Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::source::ProfileSource;
use crate::models::{Profile, Repository};

pub struct GitHubClient {
    client: Client,
    base_url: Url,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&format!("gitfolio/{}", env!("CARGO_PKG_VERSION")))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            Error::Config(format!("Invalid API URL '{}': {}", config.api_base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "API URL '{}' cannot hold a path",
                config.api_base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            per_page: config.repos_per_page,
        })
    }

    pub async fn get_user(&self, username: &str) -> Result<Profile> {
        let url = self.endpoint(&["users", username]);
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(url).send().await?;
        self.read_json(username, "user", response).await
    }

    /// Only the first page is requested; accounts with more repositories
    /// than `per_page` are scored on their most recently updated ones.
    pub async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let mut url = self.endpoint(&["users", username, "repos"]);
        url.query_pairs_mut()
            .append_pair("type", "owner")
            .append_pair("sort", "updated")
            .append_pair("per_page", &self.per_page.to_string());
        tracing::info!("Fetching repositories for: {}", username);

        let response = self.client.get(url).send().await?;
        let repos: Vec<Repository> = self.read_json(username, "repositories", response).await?;
        tracing::debug!("Received {} repositories for {}", repos.len(), username);
        Ok(repos)
    }

    /// Appends each segment percent-encoded, so an identifier can never
    /// leave the `/users/` namespace.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        username: &str,
        what: &str,
        response: Response,
    ) -> Result<T> {
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch {} for {}: {} - {}",
                what, username, status, body
            )));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn fetch_profile(&self, identifier: &str) -> Result<Profile> {
        self.get_user(identifier).await
    }

    async fn fetch_repositories(&self, identifier: &str) -> Result<Vec<Repository>> {
        self.get_user_repos(identifier).await
    }

    fn name(&self) -> &str {
        "github"
    }
}

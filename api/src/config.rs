//! Connection settings for the donations backend.

use std::env;

use anyhow::Context;
use reqwest::Url;

/// Where the backend lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    auth_token: Option<String>,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    /// Builds a config, validating the base URL.
    ///
    /// A trailing slash is added when missing so that request paths join
    /// beneath any path prefix instead of replacing it.
    pub fn new(base_url: &str, auth_token: Option<String>) -> anyhow::Result<Self> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized)
            .with_context(|| format!("invalid donations API base URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("donations API base URL cannot be a base: {base_url}");
        }
        let auth_token = auth_token.filter(|t| !t.trim().is_empty());
        Ok(Self {
            base_url,
            auth_token,
        })
    }

    /// Creates a config from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `DONATIONS_API_URL`: base URL of the backend.
    ///   defaults to `http://localhost:8000`
    /// - `DONATIONS_API_TOKEN`: bearer token sent with every request.
    ///
    /// Browser builds have no process environment, so the values captured at
    /// compile time are used as the fallback.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = env::var("DONATIONS_API_URL")
            .ok()
            .or_else(|| option_env!("DONATIONS_API_URL").map(str::to_owned))
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let auth_token = env::var("DONATIONS_API_TOKEN")
            .ok()
            .or_else(|| option_env!("DONATIONS_API_TOKEN").map(str::to_owned));

        Self::new(&base_url, auth_token)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

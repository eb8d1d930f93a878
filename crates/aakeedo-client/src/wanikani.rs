use aakeedo_config::Config;
use aakeedo_config::http::HttpConfig;
use aakeedo_config::wanikani::WaniKaniConfig;
use aakeedo_types::{UserData, UserResponse};
use anyhow::{Context, Result};
use reqwest::Url;

use crate::error::FetchError;
use crate::http::{endpoint, get_json, parse, settle};

const REVISION_HEADER: &str = "Wanikani-Revision";

/// Client for the authenticated WaniKani v2 API
#[derive(Clone)]
pub struct WaniKaniClient {
    base_url: Url,
    revision: String,
    client: reqwest::Client,
}

impl WaniKaniClient {
    pub fn new(api: &WaniKaniConfig, http: &HttpConfig) -> Result<Self> {
        let base_url = Url::parse(&api.base_url)
            .with_context(|| format!("Invalid WaniKani base URL: {}", api.base_url))?;

        let client = reqwest::Client::builder()
            .timeout(http.timeout())
            .build()
            .context("Failed to build WaniKani HTTP client")?;

        Ok(Self {
            base_url,
            revision: api.revision.clone(),
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.wanikani, &config.http)
    }

    /// Username and level of the token's owner
    pub async fn user_info(&self, api_token: &str) -> Option<UserData> {
        // Never log the token itself
        settle("user_info", "<token>", self.try_user_info(api_token).await)
    }

    pub(crate) async fn try_user_info(&self, api_token: &str) -> Result<UserData, FetchError> {
        if api_token.is_empty() {
            return Err(FetchError::invalid_input("API token", ""));
        }

        let url = endpoint(&self.base_url, &["user"])?;
        tracing::debug!("GET {url}");

        let request = self
            .client
            .get(url)
            .bearer_auth(api_token)
            .header(REVISION_HEADER, &self.revision);

        let value = get_json(request).await.inspect_err(|e| {
            if let FetchError::ResponseStatus { status, body } = e {
                tracing::warn!("WaniKani /user returned {status}; body: {body}");
            }
        })?;

        let response: UserResponse = parse(value)?;
        tracing::debug!(
            "WaniKani {} resource, updated {:?}",
            response.object,
            response.data_updated_at
        );
        Ok(response.data)
    }
}

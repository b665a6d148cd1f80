//! Microsoft Graph client.
//!
//! Brokers two calls on behalf of the add-in: the OAuth2 client-credentials
//! token exchange against the tenant's token endpoint, and the user-profile
//! lookup. The app token is reused until shortly before expiry; profile
//! responses are cached with `moka` (5-minute TTL) so repeated compose events
//! from one user do not fan out to Graph.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::GraphConfig;

/// Attributes requested from the Graph user resource.
const PROFILE_SELECT: &str = "displayName,mail,userPrincipalName,mobilePhone,businessPhones,\
jobTitle,department,officeLocation,country,companyName";

/// Seconds before nominal expiry at which a token is considered dead.
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

/// Errors that can occur when talking to Graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Graph returned an error response.
    #[error("Graph error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Token endpoint returned an error response.
    #[error("token exchange failed: {status} - {message}")]
    TokenExchange { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Directory profile as returned to the add-in.
///
/// Mirrors the Graph user resource attributes the resolver maps into a
/// signature; everything optional because Graph omits unpopulated ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryProfile {
    pub display_name: Option<String>,
    pub mail: Option<String>,
    pub user_principal_name: Option<String>,
    pub mobile_phone: Option<String>,
    pub business_phones: Vec<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub office_location: Option<String>,
    pub country: Option<String>,
    pub company_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at_ms: i64,
}

impl CachedToken {
    fn is_live(&self, now_ms: i64) -> bool {
        now_ms < self.expires_at_ms - TOKEN_EXPIRY_MARGIN_SECS * 1000
    }
}

/// Client for Microsoft Graph user-profile lookups.
///
/// Cheap to clone; the HTTP client, token slot, and response cache are
/// shared behind an `Arc`.
#[derive(Clone)]
pub struct GraphClient {
    inner: Arc<GraphClientInner>,
}

struct GraphClientInner {
    client: reqwest::Client,
    config: GraphConfig,
    token: tokio::sync::Mutex<Option<CachedToken>>,
    profiles: Cache<String, DirectoryProfile>,
}

impl GraphClient {
    /// Create a new Graph client.
    #[must_use]
    pub fn new(config: GraphConfig) -> Self {
        let profiles = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(GraphClientInner {
                client: reqwest::Client::new(),
                config,
                token: tokio::sync::Mutex::new(None),
                profiles,
            }),
        }
    }

    /// Acquire an app-only access token, reusing the cached one while live.
    ///
    /// # Errors
    ///
    /// Returns an error if the token exchange fails or the response cannot
    /// be parsed.
    pub async fn app_token(&self) -> Result<String, GraphError> {
        let mut slot = self.inner.token.lock().await;
        let now_ms = chrono::Utc::now().timestamp_millis();

        if let Some(token) = slot.as_ref()
            && token.is_live(now_ms)
        {
            return Ok(token.access_token.clone());
        }

        let config = &self.inner.config;
        let params = [
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.expose_secret()),
            ("scope", "https://graph.microsoft.com/.default"),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .inner
            .client
            .post(&config.token_url)
            .form(&params)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GraphError::TokenExchange {
                status: status.as_u16(),
                message,
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| GraphError::Parse(e.to_string()))?;

        debug!(expires_in = token.expires_in, "app token refreshed");

        let cached = CachedToken {
            access_token: token.access_token.clone(),
            expires_at_ms: now_ms + token.expires_in * 1000,
        };
        *slot = Some(cached);

        Ok(token.access_token)
    }

    /// Look up a user's directory profile by email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the token exchange or the Graph request fails.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn user_profile(&self, email: &str) -> Result<DirectoryProfile, GraphError> {
        let cache_key = email.to_ascii_lowercase();

        // Check cache
        if let Some(profile) = self.inner.profiles.get(&cache_key).await {
            debug!("Cache hit for profile");
            return Ok(profile);
        }

        let token = self.app_token().await?;
        let url = format!(
            "{}/v1.0/users/{}?$select={}",
            self.inner.config.base_url,
            urlencoding::encode(email),
            PROFILE_SELECT
        );

        let response = self.inner.client.get(&url).bearer_auth(token).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GraphError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let profile: DirectoryProfile = response
            .json()
            .await
            .map_err(|e| GraphError::Parse(e.to_string()))?;

        // Cache the result
        self.inner.profiles.insert(cache_key, profile.clone()).await;

        Ok(profile)
    }
}

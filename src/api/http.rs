use crate::api::error::ApiError;
use crate::api::traits::PropertySource;
use crate::api::types::{LoginRequest, LoginResponse, PropertyDraft, PropertyQuery};
use crate::config::AppConfig;
use crate::models::{LocationRecord, RawProperty, User};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

/// Listings backend over HTTP
pub struct HttpPropertySource {
    client: Client,
    base_url: String,
}

impl HttpPropertySource {
    /// Create a client against the configured backend
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("letscout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            warn!("backend returned status: {status}");
            return Err(ApiError::Status(status));
        }
        Ok(response)
    }

    /// Fetch the county catalog from `GET /meta/locations`
    pub async fn locations(&self) -> Result<Vec<LocationRecord>, ApiError> {
        let response = self.client.get(self.url("/meta/locations")).send().await?;
        Ok(Self::check(response)?.json().await?)
    }

    /// Post a new listing on behalf of the signed-in user
    pub async fn create_property(
        &self,
        token: &str,
        draft: &PropertyDraft,
    ) -> Result<RawProperty, ApiError> {
        let response = self
            .client
            .post(self.url("/properties"))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }

    /// Update an existing listing owned by the signed-in user
    pub async fn update_property(
        &self,
        token: &str,
        id: &str,
        draft: &PropertyDraft,
    ) -> Result<RawProperty, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/properties/{id}")))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }

    /// List the signed-in user's own listings
    pub async fn my_properties(&self, token: &str) -> Result<Vec<RawProperty>, ApiError> {
        let response = self
            .client
            .get(self.url("/properties/me"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }

    /// Exchange credentials for a session token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&payload)
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }

    /// Validate a stored token and fetch its owner's profile
    pub async fn me(&self, token: &str) -> Result<User, ApiError> {
        let response = self
            .client
            .get(self.url("/auth/me"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }
}

#[async_trait]
impl PropertySource for HttpPropertySource {
    async fn fetch(&self, query: &PropertyQuery) -> Result<Vec<RawProperty>, ApiError> {
        debug!("fetching /properties with {query:?}");

        let response = self
            .client
            .get(self.url("/properties"))
            .query(query)
            .send()
            .await?;

        Ok(Self::check(response)?.json().await?)
    }

    async fn fetch_one(&self, id: &str) -> Result<RawProperty, ApiError> {
        debug!("fetching /properties/{id}");

        let response = self
            .client
            .get(self.url(&format!("/properties/{id}")))
            .send()
            .await?;

        Ok(Self::check(response)?.json().await?)
    }

    fn source_name(&self) -> &'static str {
        "backend"
    }
}

//! HubSpot HTTP client (reqwest-based).
//!
//! Covers the handful of endpoints the sync needs: the identity lookup used
//! to verify a credential, and list/create for property groups and properties.

use super::error::{HubSpotError, HubSpotResult};
use super::types::{
    AccountDetails, ApiErrorBody, CollectionResponse, ObjectType, Property, PropertyCreate,
    PropertyGroup, PropertyGroupCreate,
};
use super::SchemaApi;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How the credential is attached to each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthScheme {
    /// Legacy API key sent as the `hapikey` query parameter.
    #[default]
    ApiKey,
    /// Private app access token sent as `Authorization: Bearer`.
    Bearer,
}

/// Authenticated client bound to one portal.
#[derive(Clone)]
pub struct HubSpotClient {
    base_url: String,
    credential: String,
    auth: AuthScheme,
    http_client: Client,
}

impl fmt::Debug for HubSpotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubSpotClient")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

impl HubSpotClient {
    pub fn new(
        base_url: &str,
        credential: &str,
        auth: AuthScheme,
        timeout: Duration,
    ) -> HubSpotResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("portal-schema-sync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HubSpotError::InvalidConfig(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_http_client(base_url, credential, auth, http_client))
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_http_client(
        base_url: &str,
        credential: &str,
        auth: AuthScheme,
        http_client: Client,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credential: credential.to_string(),
            auth,
            http_client,
        }
    }

    /// Look up the account the credential belongs to (GET /integrations/v1/me).
    pub async fn account_details(&self) -> HubSpotResult<AccountDetails> {
        let url = format!("{}/integrations/v1/me", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP Methods ─────────────────────────────────────────

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.auth {
            AuthScheme::ApiKey => builder.query(&[("hapikey", self.credential.as_str())]),
            AuthScheme::Bearer => builder.bearer_auth(&self.credential),
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> HubSpotResult<T> {
        debug!("HubSpot GET {}", url);
        let response = self.authorize(self.http_client.get(url)).send().await?;
        self.handle_response(response).await
    }

    async fn post<B: Serialize>(&self, url: &str, body: &B) -> HubSpotResult<()> {
        debug!("HubSpot POST {}", url);
        let response = self
            .authorize(self.http_client.post(url))
            .json(body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            self.handle_error_response(response).await
        }
    }

    // ── Response Handling ─────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> HubSpotResult<T> {
        if response.status().is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| HubSpotError::Parse(e.to_string()))
        } else {
            self.handle_error_response(response).await
        }
    }

    async fn handle_error_response<T>(&self, response: reqwest::Response) -> HubSpotResult<T> {
        let status = response.status();

        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());
        let message = error_message(status, &body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(HubSpotError::Auth {
                status: status.as_u16(),
                message,
            }),
            StatusCode::CONFLICT => Err(HubSpotError::Conflict(message)),
            StatusCode::TOO_MANY_REQUESTS => {
                warn!(retry_after_secs = ?retry_after, "HubSpot rate limited");
                Err(HubSpotError::RateLimited {
                    retry_after_secs: retry_after,
                })
            }
            _ => Err(HubSpotError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

/// Pull the human message out of an error body, falling back to the raw text.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if !parsed.message.is_empty() {
            return match parsed.category {
                Some(category) => format!("{} ({category})", parsed.message),
                None => parsed.message,
            };
        }
    }

    if body.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        body.to_string()
    }
}

#[async_trait]
impl SchemaApi for HubSpotClient {
    async fn list_property_groups(
        &self,
        object_type: &ObjectType,
    ) -> HubSpotResult<Vec<PropertyGroup>> {
        let url = format!("{}/crm/v3/properties/{}/groups", self.base_url, object_type);
        let response: CollectionResponse<PropertyGroup> = self.get(&url).await?;
        Ok(response.results)
    }

    async fn list_properties(&self, object_type: &ObjectType) -> HubSpotResult<Vec<Property>> {
        let url = format!("{}/crm/v3/properties/{}", self.base_url, object_type);
        let response: CollectionResponse<Property> = self.get(&url).await?;
        Ok(response.results)
    }

    async fn create_property_group(
        &self,
        object_type: &ObjectType,
        group: &PropertyGroupCreate,
    ) -> HubSpotResult<()> {
        let url = format!("{}/crm/v3/properties/{}/groups", self.base_url, object_type);
        self.post(&url, group).await
    }

    async fn create_property(
        &self,
        object_type: &ObjectType,
        property: &PropertyCreate,
    ) -> HubSpotResult<()> {
        let url = format!("{}/crm/v3/properties/{}", self.base_url, object_type);
        self.post(&url, property).await
    }
}

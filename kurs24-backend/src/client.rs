//! Concrete reqwest-backed backend client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{BackendError, Result};
use crate::http::HttpUtils;
use crate::traits::ProvisioningApi;
use crate::types::{
    CreateTenantRequest, RegisteredUser, RegisterUserRequest, SubdomainCheck, TenantCreated,
    TenantStatusResponse, UserIdResponse,
};

/// Environment variable selecting the backend base URL.
pub const BACKEND_API_URL_VAR: &str = "BACKEND_API_URL";
/// Default backend address inside the compose network.
pub const DEFAULT_BACKEND_API_URL: &str = "http://kurs24-api:8000";

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default per-request timeout (seconds). A hung status poll must not outlive
/// its tick schedule by much.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP client for the kurs24 provisioning backend.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client against an explicit base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: create_http_client(),
            base_url,
        }
    }

    /// Create a client from `BACKEND_API_URL`, falling back to the
    /// environment-specific default when unset.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(BACKEND_API_URL_VAR)
            .unwrap_or_else(|_| DEFAULT_BACKEND_API_URL.to_string());
        Self::new(base_url)
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }
}

/// Create the shared HTTP client with timeout configuration.
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_default()
}

#[async_trait]
impl ProvisioningApi for BackendClient {
    async fn create_tenant(&self, req: &CreateTenantRequest) -> Result<TenantCreated> {
        let url = self.url("/tenant/create");
        let (status, body) =
            HttpUtils::execute_request(self.client.post(&url).json(req), "POST", &url).await?;

        if !(200..300).contains(&status) {
            let detail = HttpUtils::error_detail(&body);
            log::error!("Tenant create failed (HTTP {status}): {detail}");
            return Err(BackendError::Upstream { status, detail });
        }

        HttpUtils::parse_json(&body)
    }

    async fn tenant_status(&self, user_id: i64) -> Result<Option<TenantStatusResponse>> {
        let url = self.url(&format!("/users/{user_id}/tenant/status"));
        let (status, body) =
            HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;

        match status {
            200..=299 => Ok(Some(HttpUtils::parse_json(&body)?)),
            // "No tenant yet" is a valid state, not an error
            404 => Ok(None),
            _ => Err(BackendError::Upstream {
                status,
                detail: HttpUtils::error_detail(&body),
            }),
        }
    }

    async fn user_id_by_email(&self, email: &str) -> Result<Option<i64>> {
        let url = self.url(&format!("/users/email/{}/id", urlencoding::encode(email)));
        let (status, body) =
            HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;

        match status {
            200..=299 => {
                let resp: UserIdResponse = HttpUtils::parse_json(&body)?;
                Ok(Some(resp.user_id))
            }
            404 => Ok(None),
            _ => Err(BackendError::Upstream {
                status,
                detail: HttpUtils::error_detail(&body),
            }),
        }
    }

    async fn register_user(&self, req: &RegisterUserRequest) -> Result<i64> {
        let url = self.url("/users/register");
        let (status, body) =
            HttpUtils::execute_request(self.client.post(&url).json(req), "POST", &url).await?;

        if !(200..300).contains(&status) {
            let detail = HttpUtils::error_detail(&body);
            log::error!("User registration failed (HTTP {status}): {detail}");
            return Err(BackendError::Upstream { status, detail });
        }

        let resp: RegisteredUser = HttpUtils::parse_json(&body)?;
        Ok(resp.id)
    }

    async fn check_subdomain(&self, subdomain: &str) -> Result<SubdomainCheck> {
        let url = self.url(&format!(
            "/check-subdomain?subdomain={}",
            urlencoding::encode(subdomain)
        ));
        let (status, body) =
            HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;

        if !(200..300).contains(&status) {
            return Err(BackendError::Upstream {
                status,
                detail: HttpUtils::error_detail(&body),
            });
        }

        HttpUtils::parse_json(&body)
    }
}

//! REST API helpers for communicating with the server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): every call fails with a network error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped onto `ApiError` so the session actions can store it;
//! nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use cerebrum::api::{ApiError, AuthApi, Credentials, LoginResponse};
use cerebrum::config::ClientConfig;
use serde_json::Value;

const LOGIN_PATH: &str = "login";
const ME_PATH: &str = "me";

#[cfg(any(test, feature = "csr"))]
fn bearer(auth_token: &str) -> String {
    format!("Bearer {auth_token}")
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Network { message: "not available outside the browser".to_owned() }
}

/// `AuthApi` over the browser fetch API.
#[derive(Clone, Debug)]
pub struct BrowserAuthApi {
    config: ClientConfig,
}

impl BrowserAuthApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn login_url(&self) -> String {
        self.config.endpoint(LOGIN_PATH)
    }

    pub fn me_url(&self) -> String {
        self.config.endpoint(ME_PATH)
    }
}

#[cfg(feature = "csr")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_response(resp.status(), &body))
}

#[async_trait::async_trait(?Send)]
impl AuthApi for BrowserAuthApi {
    /// `POST login` with a JSON credentials body.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.login_url())
                .header("Accept", &self.config.accept)
                .json(credentials)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network { message: e.to_string() })?;
            let resp = check_status(resp).await?;
            resp.json::<LoginResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(unavailable())
        }
    }

    /// `GET me` with the bearer token.
    async fn me(&self, auth_token: &str) -> Result<Value, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.me_url())
                .header("Accept", &self.config.accept)
                .header("Authorization", &bearer(auth_token))
                .send()
                .await
                .map_err(|e| ApiError::Network { message: e.to_string() })?;
            let resp = check_status(resp).await?;
            resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = auth_token;
            Err(unavailable())
        }
    }
}

//! Caller identity. Every protected route resolves the bearer token to a profile id here.
//!
//! Tokens are never decoded locally: they are handed to the hosted auth platform
//! (`GET {AUTH_URL}/auth/v1/user`) and the returned user id is trusted.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

const AUTH_TIMEOUT_SECS: u64 = 10;

#[async_trait]
pub trait AuthVerifier: Send + Sync {
    /// Resolves a bearer token to the caller's user id, which is also their profile id.
    async fn verify(&self, token: &str) -> Result<Uuid, AppError>;
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: Uuid,
}

/// Verifies tokens against the hosted auth platform's user endpoint.
#[derive(Clone)]
pub struct HostedAuthVerifier {
    client: Client,
    user_url: String,
    service_key: String,
}

impl HostedAuthVerifier {
    pub fn new(auth_url: &str, service_key: String) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(AUTH_TIMEOUT_SECS))
                .build()?,
            user_url: format!("{}/auth/v1/user", auth_url.trim_end_matches('/')),
            service_key,
        })
    }
}

#[async_trait]
impl AuthVerifier for HostedAuthVerifier {
    async fn verify(&self, token: &str) -> Result<Uuid, AppError> {
        let response = self
            .client
            .get(&self.user_url)
            .bearer_auth(token)
            .header("apikey", &self.service_key)
            .send()
            .await
            .map_err(|e| {
                warn!("Auth platform unreachable: {e}");
                AppError::Internal(anyhow!("auth platform unreachable: {e}"))
            })?;

        check_auth_status(response.status())?;

        let user: AuthUser = response.json().await.map_err(|e| {
            warn!("Auth platform returned an unreadable user: {e}");
            AppError::Unauthorized
        })?;

        Ok(user.id)
    }
}

/// A 4xx reply means the token was refused. Anything else unsuccessful is the
/// platform's fault and must not look like a signed-out session.
fn check_auth_status(status: StatusCode) -> Result<(), AppError> {
    if status.is_success() {
        Ok(())
    } else if status.is_client_error() {
        debug!("Auth platform rejected token with status {status}");
        Err(AppError::Unauthorized)
    } else {
        warn!("Auth platform failed with status {status}");
        Err(AppError::Internal(anyhow!(
            "auth platform returned status {status}"
        )))
    }
}

/// Extracts the token from `Authorization: Bearer <token>`. The scheme is case-insensitive.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// The verified caller. Add as a handler argument to require authentication.
#[derive(Debug, Clone, Copy)]
pub struct CallerIdentity {
    pub user_id: Uuid,
}

#[async_trait]
impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or(AppError::Unauthorized)?
            .to_string();
        let user_id = state.auth.verify(&token).await?;
        Ok(CallerIdentity { user_id })
    }
}

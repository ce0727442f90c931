use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::config::Config;
use crate::models::User;

mod error;

pub use error::AuthError;

/// Sign-in request payload
#[derive(Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Sign-up request payload
#[derive(Debug, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// HTTP client for the external authentication API
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client from the application configuration
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_seconds),
        )
    }

    /// Create a client against a specific endpoint
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Authenticate with existing credentials. Calls are never retried
    /// automatically; a timeout surfaces as `AuthError::Unreachable`.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        tracing::debug!("Signing in as {}", email);
        let user = self.post_credentials("/api/user/signin", &request).await?;
        tracing::info!("Signed in as {}", user.email);
        Ok(user)
    }

    /// Create an account and authenticate in one step
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let request = SignUpRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        tracing::debug!("Signing up as {}", email);
        let user = self.post_credentials("/api/user/signup", &request).await?;
        tracing::info!("Created account for {}", user.email);
        Ok(user)
    }

    async fn post_credentials<T: Serialize>(
        &self,
        path: &str,
        request: &T,
    ) -> Result<User, AuthError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(AuthError::from_transport)?;

        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(AuthError::RequestSetup)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(AuthError::from_rejection(status, error_text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_client_creation() {
        let config = Config::default();
        let client = AuthClient::new(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_rejection_falls_back_to_status_line() {
        let err = AuthError::from_rejection(reqwest::StatusCode::BAD_REQUEST, String::new());
        assert_eq!(err.to_string(), "Bad Request");
    }

    #[test]
    fn test_rejection_prefers_server_payload() {
        let err = AuthError::from_rejection(
            reqwest::StatusCode::BAD_REQUEST,
            "Invalid password".to_string(),
        );
        assert_eq!(err.to_string(), "Invalid password");
    }
}

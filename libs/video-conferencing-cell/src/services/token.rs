// libs/video-conferencing-cell/src/services/token.rs
use base64::{engine::general_purpose, Engine as _};
use chrono::{Duration, Utc};
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::models::{CachedToken, VideoConferencingError, ZoomTokenResponse};

/// Upper bound on `expires_in` so a bogus value cannot overflow the expiry.
const MAX_TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;

/// Single-slot cache for the Zoom server-to-server OAuth token.
///
/// The slot lock is held while a refresh is in flight, so callers that find
/// the token missing or expired at the same time share one upstream request.
pub struct ZoomTokenCache {
    client: Client,
    oauth_url: String,
    account_id: String,
    basic_credentials: String,
    slot: Mutex<Option<CachedToken>>,
}

impl ZoomTokenCache {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        let basic_credentials = general_purpose::STANDARD.encode(format!(
            "{}:{}",
            config.zoom_client_id, config.zoom_client_secret
        ));

        Self {
            client,
            oauth_url: config.zoom_oauth_url.clone(),
            account_id: config.zoom_account_id.clone(),
            basic_credentials,
            slot: Mutex::new(None),
        }
    }

    /// Returns the cached token, refreshing it first if it is missing or its
    /// expiry is at or before now.
    pub async fn get_valid_token(&self) -> Result<String, VideoConferencingError> {
        let mut slot = self.slot.lock().await;

        if let Some(token) = slot.as_ref().filter(|token| !token.is_expired_at(Utc::now())) {
            debug!("Zoom token still valid until {}", token.expires_at);
            return Ok(token.value.clone());
        }

        info!("Zoom token missing or expired, requesting a new one");
        let fresh = self.request_token().await?;
        let value = fresh.value.clone();
        *slot = Some(fresh);

        Ok(value)
    }

    /// Replaces whatever is in the slot.
    pub async fn store(&self, token: CachedToken) {
        *self.slot.lock().await = Some(token);
    }

    pub async fn current(&self) -> Option<CachedToken> {
        self.slot.lock().await.clone()
    }

    /// POST {oauth_url}?grant_type=account_credentials&account_id={account_id}
    async fn request_token(&self) -> Result<CachedToken, VideoConferencingError> {
        let response = self
            .client
            .post(&self.oauth_url)
            .query(&[
                ("grant_type", "account_credentials"),
                ("account_id", self.account_id.as_str()),
            ])
            .header("Authorization", format!("Basic {}", self.basic_credentials))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .send()
            .await
            .map_err(|e| {
                error!("Zoom token request could not be sent: {}", e);
                VideoConferencingError::TokenRequest {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| VideoConferencingError::TokenRequest {
                message: e.to_string(),
            })?;

        if !status.is_success() {
            error!("Zoom token request failed: {} - {}", status, response_text);
            return Err(VideoConferencingError::TokenRequest {
                message: format!("HTTP {}: {}", status, response_text),
            });
        }

        let token_response: ZoomTokenResponse = serde_json::from_str(&response_text)
            .map_err(|e| VideoConferencingError::TokenRequest {
                message: format!("Failed to parse token response: {}", e),
            })?;

        let value = token_response
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| VideoConferencingError::TokenRequest {
                message: "Token response did not include an access_token".to_string(),
            })?;

        let lifetime = token_response.expires_in.clamp(0, MAX_TOKEN_LIFETIME_SECS);
        let expires_at = Utc::now() + Duration::seconds(lifetime);

        info!("New Zoom token acquired, expires at {}", expires_at);
        Ok(CachedToken { value, expires_at })
    }
}

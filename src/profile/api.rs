//! The profile API collaborator — trait seam plus the HTTP implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::ProfileError;

use super::model::{RemoteProfile, UpdateAck};

/// Backend-agnostic profile collaborator.
///
/// The engine only ever reads one profile (at session start) and writes one
/// payload (at submission); transports and test doubles implement this.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch the profile for a user. `Ok(None)` means no profile exists yet
    /// (fresh session, all defaults) — only transport or decode problems are
    /// errors.
    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<RemoteProfile>, ProfileError>;

    /// Apply the assembled onboarding payload to the user's profile.
    async fn update_profile(
        &self,
        user_id: Uuid,
        payload: &serde_json::Value,
    ) -> Result<UpdateAck, ProfileError>;
}

/// HTTP implementation over the profile service.
pub struct HttpProfileApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpProfileApi {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn profile_url(&self, user_id: Uuid) -> String {
        format!("{}/api/v1/profiles/{user_id}", self.base_url)
    }

    fn onboarding_url(&self, user_id: Uuid) -> String {
        format!("{}/api/v1/onboarding/{user_id}", self.base_url)
    }

    /// Pull the server's error message out of a non-2xx body, falling back
    /// to the raw text.
    async fn error_message(response: reqwest::Response) -> String {
        let text = response.text().await.unwrap_or_default();
        serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .or_else(|| v.get("message"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or(text)
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<RemoteProfile>, ProfileError> {
        let response = self
            .client
            .get(self.profile_url(user_id))
            .send()
            .await
            .map_err(|e| ProfileError::Http(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = Self::error_message(response).await;
            return Err(ProfileError::Status { status, message });
        }

        let profile = response
            .json::<RemoteProfile>()
            .await
            .map_err(|e| ProfileError::Decode(e.to_string()))?;
        Ok(Some(profile))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        payload: &serde_json::Value,
    ) -> Result<UpdateAck, ProfileError> {
        let response = self
            .client
            .patch(self.onboarding_url(user_id))
            .json(payload)
            .send()
            .await
            .map_err(|e| ProfileError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = Self::error_message(response).await;
            return Err(ProfileError::Status { status, message });
        }

        response
            .json::<UpdateAck>()
            .await
            .map_err(|e| ProfileError::Decode(e.to_string()))
    }
}

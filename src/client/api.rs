use crate::GRAPHQL_URL;
use crate::client::graphql::{FreeBoostKind, Operation, UpgradeKind};
use crate::models::*;
use crate::{o_debug, o_warn};
use rand::Rng;
use serde::de::DeserializeOwned;
use std::sync::RwLock;
use std::time::Duration;
use thiserror::Error;

/// Failure taxonomy shared by every remote operation.
///
/// The client never auto-retries: a 429 gets exactly one backoff sleep and
/// then surfaces as `RateLimited`; the caller's next loop iteration is the
/// retry mechanism.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("rate limited, backed off {retry_after}s")]
    RateLimited { retry_after: u64 },
    #[error("unauthorized")]
    Unauthorized,
    #[error("transient request failure: {0}")]
    Transient(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Backoff duration for a 429: the server-supplied Retry-After when present,
/// a fixed 60s otherwise.
pub fn backoff_duration(retry_after: Option<u64>) -> Duration {
    Duration::from_secs(retry_after.unwrap_or(60))
}

/// Clamp a per-tap intensity vector to the inclusive range [1,4]. Out-of-range
/// elements are replaced with a uniform random draw so submitted batches keep
/// the organic variance the backend expects.
pub fn normalize_tap_vector(vector: &[i64]) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    vector
        .iter()
        .map(|&tap| {
            if (1..=4).contains(&tap) {
                tap
            } else {
                rng.gen_range(1..=4)
            }
        })
        .collect()
}

/// Typed wrapper over the game's single POST endpoint: one method per named
/// remote operation, one shared rate-limit policy.
pub struct GameApiClient {
    client: reqwest::Client,
    session_name: String,
    bearer: RwLock<Option<String>>,
}

impl GameApiClient {
    pub fn new(client: reqwest::Client, session_name: &str) -> Self {
        Self {
            client,
            session_name: session_name.to_string(),
            bearer: RwLock::new(None),
        }
    }

    /// Install the credential used as the default bearer for all subsequent
    /// calls. Replaces any previous credential wholesale.
    pub fn set_bearer(&self, token: &str) {
        *self.bearer.write().unwrap() = Some(token.to_string());
    }

    async fn post_operation(
        &self,
        operation: Operation,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let body = serde_json::json!({
            "operationName": operation.name(),
            "query": operation.query(),
            "variables": variables,
        });

        o_debug!("{} | -> {}", self.session_name, operation.name());

        let mut request = self.client.post(GRAPHQL_URL).json(&body);
        if let Some(token) = self.bearer.read().unwrap().as_deref() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transient(format!("{} failed: {}", operation.name(), e)))?;

        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            let backoff = backoff_duration(retry_after);
            o_warn!(
                "{} | Too many requests on {}. Sleeping for {}s",
                self.session_name,
                operation.name(),
                backoff.as_secs()
            );
            tokio::time::sleep(backoff).await;
            return Err(ApiError::RateLimited {
                retry_after: backoff.as_secs(),
            });
        }

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "could not read response".to_string());
            return Err(ApiError::Transient(format!(
                "{} failed with status {}: {}",
                operation.name(),
                status,
                error_body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Malformed(format!("{}: {}", operation.name(), e)))
    }

    async fn call<T: DeserializeOwned>(
        &self,
        operation: Operation,
        variables: serde_json::Value,
    ) -> Result<T, ApiError> {
        let value = self.post_operation(operation, variables).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::Malformed(format!("{}: {}", operation.name(), e)))
    }

    /// Exchange a signed web-app payload for an access token.
    pub async fn login(&self, web_app_data: serde_json::Value) -> Result<String, ApiError> {
        let variables = serde_json::json!({ "webAppData": web_app_data });
        let response: LoginResponse = self.call(Operation::TelegramUserLogin, variables).await?;
        Ok(response.data.telegram_user_login.access_token)
    }

    pub async fn fetch_profile(&self) -> Result<ProfileState, ApiError> {
        let response: ProfileResponse = self
            .call(Operation::GameConfig, serde_json::json!({}))
            .await?;
        Ok(response.data.telegram_game_get_config)
    }

    pub async fn fetch_user(&self) -> Result<UserState, ApiError> {
        let response: UserResponse = self.call(Operation::UserMe, serde_json::json!({})).await?;
        Ok(response.data.telegram_user_me)
    }

    pub async fn fetch_tapbot_config(&self) -> Result<TapbotState, ApiError> {
        let response: TapbotConfigResponse = self
            .call(Operation::TapbotConfig, serde_json::json!({}))
            .await?;
        Ok(response.data.telegram_game_tapbot_get_config)
    }

    pub async fn start_tapbot(&self) -> Result<(), ApiError> {
        self.post_operation(Operation::TapbotStart, serde_json::json!({}))
            .await?;
        Ok(())
    }

    /// Claim tapbot earnings. Errors keep their real classification here
    /// instead of collapsing into a claimed/not-claimed sentinel.
    pub async fn claim_tapbot(&self) -> Result<TapbotState, ApiError> {
        let response: TapbotClaimResponse = self
            .call(Operation::TapbotClaim, serde_json::json!({}))
            .await?;
        Ok(response.data.telegram_game_tapbot_claim_coins)
    }

    pub async fn set_next_boss(&self) -> Result<(), ApiError> {
        self.post_operation(Operation::SetNextBoss, serde_json::json!({}))
            .await?;
        Ok(())
    }

    pub async fn spin(&self) -> Result<SpinReward, ApiError> {
        let response: SpinResponse = self.call(Operation::Spin, serde_json::json!({})).await?;
        Ok(response.data.slot_machine_spin)
    }

    pub async fn claim_referral_bonus(&self) -> Result<(), ApiError> {
        self.post_operation(Operation::ReferralBonusClaim, serde_json::json!({}))
            .await?;
        Ok(())
    }

    pub async fn apply_free_boost(&self, kind: FreeBoostKind) -> Result<(), ApiError> {
        let variables = serde_json::json!({ "boosterType": kind.wire_name() });
        self.post_operation(Operation::ActivateBooster, variables)
            .await?;
        Ok(())
    }

    pub async fn purchase_upgrade(&self, kind: UpgradeKind) -> Result<(), ApiError> {
        let variables = serde_json::json!({ "upgradeType": kind.wire_name() });
        self.post_operation(Operation::PurchaseUpgrade, variables)
            .await?;
        Ok(())
    }

    /// Submit a tap batch against the profile's current nonce. The nonce is
    /// single-use; callers must re-fetch the profile before tapping again.
    pub async fn submit_taps(
        &self,
        nonce: &str,
        taps_count: u32,
        vector: &[i64],
    ) -> Result<ProfileState, ApiError> {
        let normalized = normalize_tap_vector(vector);
        let vector_str = normalized
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let variables = serde_json::json!({
            "payload": {
                "nonce": nonce,
                "tapsCount": taps_count,
                "vector": vector_str,
            },
        });

        let response: TapsBatchResponse =
            self.call(Operation::ProcessTapsBatch, variables).await?;
        Ok(response.data.telegram_game_process_taps_batch)
    }
}

use crate::auth::session::AuthError;
use crate::auth::webapp::{WebAppData, parse_launch_url};
use async_trait::async_trait;
use std::fs;

/// Boundary to the Telegram side of the handshake: whatever produces a signed
/// web-app payload for this account.
#[async_trait]
pub trait TelegramAuthProvider: Send + Sync {
    async fn web_app_payload(&self) -> Result<WebAppData, AuthError>;
}

/// Provider backed by a stored launch URL, captured once from the Telegram
/// client and kept in a file next to the other per-account state.
pub struct LaunchUrlProvider {
    path: String,
}

impl LaunchUrlProvider {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

#[async_trait]
impl TelegramAuthProvider for LaunchUrlProvider {
    async fn web_app_payload(&self) -> Result<WebAppData, AuthError> {
        // A missing launch URL can never recover on its own; treat it like a
        // revoked session so the loop stops instead of spinning.
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            AuthError::SessionRevoked(format!("cannot read {}: {}", self.path, e))
        })?;
        parse_launch_url(raw.trim())
    }
}

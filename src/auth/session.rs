use crate::auth::provider::TelegramAuthProvider;
use crate::auth::webapp::login_variables;
use crate::client::{ApiError, GameApiClient};
use crate::{o_info, o_success};
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Access tokens are renewed after this many seconds, never earlier.
pub const RENEWAL_INTERVAL_SECS: i64 = 3600;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The Telegram session itself is unusable. Terminates the account loop.
    #[error("telegram session rejected: {0}")]
    SessionRevoked(String),
    #[error("malformed launch url: {0}")]
    MalformedLaunchUrl(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AuthError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, AuthError::SessionRevoked(_))
    }
}

/// An issued access credential. Replaced wholesale on renewal, never mutated.
#[derive(Debug, Clone)]
pub struct Credential {
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

impl Credential {
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.issued_at) >= Duration::seconds(RENEWAL_INTERVAL_SECS)
    }
}

/// Credential lifecycle: Unauthenticated -> Authenticated -> Stale (after
/// 3600s) -> Authenticated again. `ensure_valid` is the single entry point.
pub struct AuthSession {
    provider: Box<dyn TelegramAuthProvider>,
    session_name: String,
    credential: Option<Credential>,
}

impl AuthSession {
    pub fn new(provider: Box<dyn TelegramAuthProvider>, session_name: &str) -> Self {
        Self {
            provider,
            session_name: session_name.to_string(),
            credential: None,
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// No-op while the current credential is younger than the renewal
    /// interval; otherwise drives the full handshake and installs the new
    /// token as the client's default bearer.
    pub async fn ensure_valid(&mut self, client: &GameApiClient) -> Result<(), AuthError> {
        if let Some(credential) = &self.credential {
            if !credential.is_stale(Utc::now()) {
                return Ok(());
            }
            o_info!("{} | Access token is stale, renewing", self.session_name);
        }

        let payload = self.provider.web_app_payload().await?;
        let variables = login_variables(&payload)?;
        let token = client.login(variables).await?;

        client.set_bearer(&token);
        self.credential = Some(Credential {
            token,
            issued_at: Utc::now(),
        });

        o_success!("{} | Logged in, access token installed", self.session_name);
        Ok(())
    }
}

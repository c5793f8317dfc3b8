pub mod provider;
pub mod session;
pub mod webapp;

pub use provider::{LaunchUrlProvider, TelegramAuthProvider};
pub use session::{AuthError, AuthSession, Credential, RENEWAL_INTERVAL_SECS};
pub use webapp::{WebAppData, login_variables, parse_launch_url};

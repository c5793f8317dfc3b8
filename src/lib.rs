// Tapfarmer - single-account automation agent for a Telegram-hosted clicker game
// Modular architecture: typed API client, auth session, pure action policy, control loop

pub mod agent;
pub mod auth;
pub mod client;
pub mod config;
pub mod models;
pub mod output_broker;
pub mod policy;
pub mod storage;
pub mod transport;

// Re-export commonly used types
pub use models::{
    profile::{BossState, FreeBoosts, ProfileState},
    tapbot::{TapbotPhase, TapbotState},
    user::UserState,
};

pub use agent::Agent;
pub use auth::session::AuthSession;
pub use client::{ApiError, GameApiClient};
pub use config::TapfarmerConfig;
pub use policy::{Action, CycleSnapshot, CycleVerdict, SleepPlan, TurboWindow};

// Constants
pub const GRAPHQL_URL: &str = "https://api-gw-tg.memefi.club/graphql";
pub const USER_AGENTS_FILE: &str = "session_user_agents.json";
pub const LAUNCH_URL_FILE: &str = "LAUNCH_URL";

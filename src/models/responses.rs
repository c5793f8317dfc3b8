// Response envelope types for the GraphQL endpoint.
// Every reply is {"data": {...}} keyed by the named operation's result field.
use serde::Deserialize;

use crate::models::profile::ProfileState;
use crate::models::spin::SpinReward;
use crate::models::tapbot::TapbotState;
use crate::models::user::UserState;

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    #[serde(rename = "telegramUserLogin")]
    pub telegram_user_login: LoginPayload,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub data: ProfileData,
}

#[derive(Debug, Deserialize)]
pub struct ProfileData {
    #[serde(rename = "telegramGameGetConfig")]
    pub telegram_game_get_config: ProfileState,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub data: UserData,
}

#[derive(Debug, Deserialize)]
pub struct UserData {
    #[serde(rename = "telegramUserMe")]
    pub telegram_user_me: UserState,
}

#[derive(Debug, Deserialize)]
pub struct TapbotConfigResponse {
    pub data: TapbotConfigData,
}

#[derive(Debug, Deserialize)]
pub struct TapbotConfigData {
    #[serde(rename = "telegramGameTapbotGetConfig")]
    pub telegram_game_tapbot_get_config: TapbotState,
}

#[derive(Debug, Deserialize)]
pub struct TapbotClaimResponse {
    pub data: TapbotClaimData,
}

#[derive(Debug, Deserialize)]
pub struct TapbotClaimData {
    #[serde(rename = "telegramGameTapbotClaimCoins")]
    pub telegram_game_tapbot_claim_coins: TapbotState,
}

#[derive(Debug, Deserialize)]
pub struct TapsBatchResponse {
    pub data: TapsBatchData,
}

#[derive(Debug, Deserialize)]
pub struct TapsBatchData {
    #[serde(rename = "telegramGameProcessTapsBatch")]
    pub telegram_game_process_taps_batch: ProfileState,
}

#[derive(Debug, Deserialize)]
pub struct SpinResponse {
    pub data: SpinData,
}

#[derive(Debug, Deserialize)]
pub struct SpinData {
    #[serde(rename = "slotMachineSpin")]
    pub slot_machine_spin: SpinReward,
}

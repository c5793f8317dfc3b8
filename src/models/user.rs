use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct UserState {
    #[serde(rename = "isReferralInitialJoinBonusAvailable")]
    pub is_referral_initial_join_bonus_available: bool,
}

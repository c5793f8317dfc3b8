use serde::Deserialize;

/// Outcome of one slot machine spin.
#[derive(Debug, Deserialize, Clone)]
pub struct SpinReward {
    #[serde(rename = "rewardAmount")]
    pub reward_amount: i64,
    #[serde(rename = "rewardType")]
    pub reward_type: String,
}

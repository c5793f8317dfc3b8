use serde::Deserialize;

/// Immutable game-state snapshot returned by the GameConfig query.
/// Never mutated locally; every state-changing action is followed by a
/// re-fetch when fresh truth is needed.
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileState {
    #[serde(rename = "coinsAmount")]
    pub coins_amount: i64,
    #[serde(rename = "currentEnergy")]
    pub current_energy: i64,
    /// One-time anti-replay token, consumed by the next tap submission.
    pub nonce: String,
    #[serde(rename = "weaponLevel")]
    pub weapon_level: i64,
    #[serde(rename = "energyLimitLevel")]
    pub energy_limit_level: i64,
    #[serde(rename = "energyRechargeLevel")]
    pub energy_recharge_level: i64,
    #[serde(rename = "freeBoosts")]
    pub free_boosts: FreeBoosts,
    #[serde(rename = "currentBoss")]
    pub current_boss: BossState,
    #[serde(rename = "spinEnergyTotal")]
    pub spin_energy_total: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FreeBoosts {
    #[serde(rename = "currentTurboAmount")]
    pub current_turbo_amount: i64,
    #[serde(rename = "currentRefillEnergyAmount")]
    pub current_refill_energy_amount: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BossState {
    pub level: i64,
    #[serde(rename = "maxHealth")]
    pub max_health: i64,
    #[serde(rename = "currentHealth")]
    pub current_health: i64,
}

impl ProfileState {
    pub fn next_tap_level(&self) -> i64 {
        self.weapon_level + 1
    }

    pub fn next_energy_level(&self) -> i64 {
        self.energy_limit_level + 1
    }

    pub fn next_charge_level(&self) -> i64 {
        self.energy_recharge_level + 1
    }
}

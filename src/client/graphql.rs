// Named-operation catalog for the game's GraphQL endpoint.
// The query text is opaque to the rest of the crate; the client only cares
// about the operation name, the variables, and the result field it parses.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    TelegramUserLogin,
    GameConfig,
    UserMe,
    SetNextBoss,
    TapbotConfig,
    TapbotStart,
    TapbotClaim,
    Spin,
    ReferralBonusClaim,
    ActivateBooster,
    PurchaseUpgrade,
    ProcessTapsBatch,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::TelegramUserLogin => "MutationTelegramUserLogin",
            Operation::GameConfig => "QUERY_GAME_CONFIG",
            Operation::UserMe => "QueryTelegramUserMe",
            Operation::SetNextBoss => "telegramGameSetNextBoss",
            Operation::TapbotConfig => "TapbotConfig",
            Operation::TapbotStart => "TapbotStart",
            Operation::TapbotClaim => "TapbotClaim",
            Operation::Spin => "Spinner",
            Operation::ReferralBonusClaim => "Mutation",
            Operation::ActivateBooster => "telegramGameActivateBooster",
            Operation::PurchaseUpgrade => "telegramGamePurchaseUpgrade",
            Operation::ProcessTapsBatch => "MutationGameProcessTapsBatch",
        }
    }

    pub fn query(&self) -> &'static str {
        match self {
            Operation::TelegramUserLogin => {
                "mutation MutationTelegramUserLogin($webAppData: TelegramWebAppDataInput!) { telegramUserLogin(webAppData: $webAppData) { access_token } }"
            }
            Operation::GameConfig => {
                "query QUERY_GAME_CONFIG { telegramGameGetConfig { coinsAmount currentEnergy nonce weaponLevel energyLimitLevel energyRechargeLevel spinEnergyTotal freeBoosts { currentTurboAmount currentRefillEnergyAmount } currentBoss { level maxHealth currentHealth } } }"
            }
            Operation::UserMe => {
                "query QueryTelegramUserMe { telegramUserMe { isReferralInitialJoinBonusAvailable } }"
            }
            Operation::SetNextBoss => {
                "mutation telegramGameSetNextBoss { telegramGameSetNextBoss { currentBoss { level } } }"
            }
            Operation::TapbotConfig => {
                "query TapbotConfig { telegramGameTapbotGetConfig { isPurchased usedAttempts totalAttempts endsAt } }"
            }
            Operation::TapbotStart => {
                "mutation TapbotStart { telegramGameTapbotStart { isPurchased usedAttempts totalAttempts endsAt } }"
            }
            Operation::TapbotClaim => {
                "mutation TapbotClaim { telegramGameTapbotClaimCoins { isPurchased usedAttempts totalAttempts endsAt } }"
            }
            Operation::Spin => {
                "mutation Spinner { slotMachineSpin { rewardAmount rewardType } }"
            }
            Operation::ReferralBonusClaim => {
                "mutation Mutation { telegramReferralInitialJoinBonusClaim { isClaimed } }"
            }
            Operation::ActivateBooster => {
                "mutation telegramGameActivateBooster($boosterType: BoosterType!) { telegramGameActivateBooster(boosterType: $boosterType) { currentEnergy } }"
            }
            Operation::PurchaseUpgrade => {
                "mutation telegramGamePurchaseUpgrade($upgradeType: UpgradeType!) { telegramGamePurchaseUpgrade(upgradeType: $upgradeType) { coinsAmount } }"
            }
            Operation::ProcessTapsBatch => {
                "mutation MutationGameProcessTapsBatch($payload: TelegramGameProcessTapsBatchInput!) { telegramGameProcessTapsBatch(payload: $payload) { coinsAmount currentEnergy nonce weaponLevel energyLimitLevel energyRechargeLevel spinEnergyTotal freeBoosts { currentTurboAmount currentRefillEnergyAmount } currentBoss { level maxHealth currentHealth } } }"
            }
        }
    }
}

/// No-cost periodically replenished boosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeBoostKind {
    Energy,
    Turbo,
}

impl FreeBoostKind {
    pub fn wire_name(&self) -> &'static str {
        match self {
            FreeBoostKind::Energy => "ENERGY",
            FreeBoostKind::Turbo => "TURBO",
        }
    }
}

/// Permanent paid level increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeKind {
    Tap,
    Energy,
    Charge,
    Tapbot,
}

impl UpgradeKind {
    pub fn wire_name(&self) -> &'static str {
        match self {
            UpgradeKind::Tap => "TAP",
            UpgradeKind::Energy => "ENERGY",
            UpgradeKind::Charge => "CHARGE",
            UpgradeKind::Tapbot => "TAPBOT",
        }
    }
}

// Action policy - decides what one loop cycle should do.
//
// `decide` is a pure function of the fetched snapshots, the local turbo
// window, and the configuration. All randomness (tap count draw) and the
// clock come in through the snapshot, so every branch is unit-testable
// without any network mocking. Anything that depends on call results
// (arming turbo on success, restarting a claimed tapbot, no-gain detection)
// belongs to the executing agent, not here.
use crate::client::graphql::{FreeBoostKind, UpgradeKind};
use crate::config::TapfarmerConfig;
use crate::models::profile::ProfileState;
use crate::models::tapbot::{TapbotPhase, TapbotState};
use crate::models::user::UserState;
use chrono::{DateTime, Duration, Utc};

/// Coin balance required before the tapbot purchase is attempted.
pub const TAPBOT_PRICE: i64 = 200_000;
/// Turbo amplification window after a successful turbo boost.
pub const TURBO_WINDOW_SECS: i64 = 10;
/// Fixed pause when there is not enough energy for the drawn tap batch.
pub const ENERGY_SHORTAGE_SLEEP_SECS: u64 = 50;
/// Long pause after a cycle whose tap submission gained no coins.
pub const NO_GAIN_SLEEP_SECS: u64 = 200;
/// Short pause between cycles while a turbo window is running.
pub const TURBO_CYCLE_SLEEP_SECS: u64 = 4;

/// Ephemeral local amplification state. Never derived from the server; armed
/// by the agent when a turbo boost application succeeds and self-expires
/// after `TURBO_WINDOW_SECS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurboWindow {
    pub activated_at: Option<DateTime<Utc>>,
}

impl TurboWindow {
    pub fn inactive() -> Self {
        Self { activated_at: None }
    }

    pub fn armed(at: DateTime<Utc>) -> Self {
        Self {
            activated_at: Some(at),
        }
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        match self.activated_at {
            Some(at) => now.signed_duration_since(at) < Duration::seconds(TURBO_WINDOW_SECS),
            None => false,
        }
    }
}

/// Everything one decision needs, fetched up front.
#[derive(Debug, Clone)]
pub struct CycleSnapshot {
    pub profile: ProfileState,
    pub tapbot: Option<TapbotState>,
    pub user: Option<UserState>,
    pub turbo: TurboWindow,
    /// Uniform draw from the configured tap-count range for this cycle.
    pub drawn_taps: u32,
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Spin,
    ApplyFreeBoost(FreeBoostKind),
    SubmitTaps { count: u32 },
    ClaimReferralBonus,
    PurchaseTapbot,
    StartTapbot,
    ClaimTapbot,
    AdvanceBoss { next_level: i64 },
    PurchaseUpgrade(UpgradeKind),
}

/// How long to pause once the cycle's actions have been executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepPlan {
    /// Brief pause, then re-enter the cycle (a boost was just applied).
    Restart,
    /// Not enough energy for the drawn batch and no refill available.
    EnergyShortage,
    /// Energy stayed below the configured minimum after the cascade.
    LowEnergy(u64),
    /// Normal pacing: a uniform draw from the inter-tap range. The agent
    /// overrides this to the turbo pace or the no-gain pause.
    BetweenTaps,
}

#[derive(Debug, Clone)]
pub struct CycleVerdict {
    /// Actions to execute, in order.
    pub actions: Vec<Action>,
    /// Turbo window carried into the next cycle (cleared when expired).
    pub turbo: TurboWindow,
    pub sleep: SleepPlan,
}

pub fn decide(snapshot: &CycleSnapshot, config: &TapfarmerConfig) -> CycleVerdict {
    let profile = &snapshot.profile;
    let mut actions = Vec::new();

    // 1. Spend accumulated spin energy first.
    if profile.spin_energy_total > 0 && config.spin.auto_spin {
        actions.push(Action::Spin);
    }

    let turbo_active = snapshot.turbo.is_active(snapshot.now);
    let turbo = if turbo_active {
        snapshot.turbo
    } else {
        TurboWindow::inactive()
    };

    // 2. Energy floor: the drawn batch must be coverable at the current
    //    weapon level, otherwise refill or wait - never tap.
    let min_energy_needed = snapshot.drawn_taps as i64 * profile.weapon_level;
    if profile.current_energy <= min_energy_needed {
        if profile.free_boosts.current_refill_energy_amount > 0 && config.boosts.apply_daily_energy
        {
            actions.push(Action::ApplyFreeBoost(FreeBoostKind::Energy));
            return CycleVerdict {
                actions,
                turbo,
                sleep: SleepPlan::Restart,
            };
        }
        return CycleVerdict {
            actions,
            turbo,
            sleep: SleepPlan::EnergyShortage,
        };
    }

    // 3. Turbo amplification while the local window is live.
    let mut count = snapshot.drawn_taps;
    if turbo_active {
        count += config.taps.add_taps_on_turbo;
    }

    // 4. The tap submission itself, against the profile's current nonce.
    actions.push(Action::SubmitTaps { count });

    // 5. One-time referral bonus.
    if snapshot
        .user
        .as_ref()
        .map(|u| u.is_referral_initial_join_bonus_available)
        .unwrap_or(false)
    {
        actions.push(Action::ClaimReferralBonus);
    }

    // 6. Tapbot lifecycle: purchase, start, or claim - one step per cycle.
    if let Some(tapbot) = &snapshot.tapbot {
        match tapbot.phase(snapshot.now) {
            TapbotPhase::NotPurchased => {
                if config.tapbot.auto_buy_tapbot && profile.coins_amount >= TAPBOT_PRICE {
                    actions.push(Action::PurchaseTapbot);
                }
            }
            TapbotPhase::Idle => actions.push(Action::StartTapbot),
            TapbotPhase::Claimable => actions.push(Action::ClaimTapbot),
            TapbotPhase::Running | TapbotPhase::Exhausted => {}
        }
    }

    // 7. Boss defeated: advance.
    if profile.current_boss.current_health <= 0 {
        actions.push(Action::AdvanceBoss {
            next_level: profile.current_boss.level + 1,
        });
    }

    // 8. Post-tap boost/upgrade cascade, suppressed while turbo runs.
    if !turbo_active {
        if profile.free_boosts.current_refill_energy_amount > 0
            && profile.current_energy < config.energy.min_available_energy
            && config.boosts.apply_daily_energy
        {
            actions.push(Action::ApplyFreeBoost(FreeBoostKind::Energy));
            return CycleVerdict {
                actions,
                turbo,
                sleep: SleepPlan::Restart,
            };
        }

        if profile.free_boosts.current_turbo_amount > 0 && config.boosts.apply_daily_turbo {
            actions.push(Action::ApplyFreeBoost(FreeBoostKind::Turbo));
            return CycleVerdict {
                actions,
                turbo,
                sleep: SleepPlan::Restart,
            };
        }

        if config.upgrades.auto_upgrade_tap
            && profile.next_tap_level() <= config.upgrades.max_tap_level
        {
            actions.push(Action::PurchaseUpgrade(UpgradeKind::Tap));
        }
        if config.upgrades.auto_upgrade_energy
            && profile.next_energy_level() <= config.upgrades.max_energy_level
        {
            actions.push(Action::PurchaseUpgrade(UpgradeKind::Energy));
        }
        if config.upgrades.auto_upgrade_charge
            && profile.next_charge_level() <= config.upgrades.max_charge_level
        {
            actions.push(Action::PurchaseUpgrade(UpgradeKind::Charge));
        }

        // 9. Still under the energy floor after the cascade: long pause.
        if profile.current_energy < config.energy.min_available_energy {
            return CycleVerdict {
                actions,
                turbo,
                sleep: SleepPlan::LowEnergy(config.energy.sleep_by_min_energy),
            };
        }
    }

    CycleVerdict {
        actions,
        turbo,
        sleep: SleepPlan::BetweenTaps,
    }
}

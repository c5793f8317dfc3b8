// Agent module - per-account control loop orchestration
use crate::auth::session::{AuthError, AuthSession};
use crate::client::GameApiClient;
use crate::client::graphql::{FreeBoostKind, UpgradeKind};
use crate::config::TapfarmerConfig;
use crate::models::profile::ProfileState;
use crate::policy::{
    self, Action, CycleSnapshot, NO_GAIN_SLEEP_SECS, SleepPlan, TURBO_CYCLE_SLEEP_SECS,
    TurboWindow,
};
use crate::{o_error, o_info, o_success, o_warn};
use chrono::Utc;
use rand::Rng;
use std::time::Duration;

/// Fixed delay after any recoverable cycle error.
const ERROR_RETRY_DELAY_SECS: u64 = 3;
/// Brief pause before re-entering the cycle after a boost application.
const RESTART_DELAY_SECS: u64 = 1;
/// Strategic pause before spending a free boost.
const PRE_BOOST_DELAY_SECS: u64 = 5;

/// Drives the unbounded play loop for one account: refresh the credential,
/// fetch state, let the policy decide, execute, sleep. Recoverable errors
/// never terminate the loop; only a rejected Telegram session does.
pub struct Agent {
    client: GameApiClient,
    auth: AuthSession,
    config: TapfarmerConfig,
    session_name: String,
    turbo: TurboWindow,
}

impl Agent {
    pub fn new(client: GameApiClient, auth: AuthSession, config: TapfarmerConfig) -> Self {
        let session_name = config.account.session_name.clone();
        Self {
            client,
            auth,
            config,
            session_name,
            turbo: TurboWindow::inactive(),
        }
    }

    pub async fn run(&mut self) -> Result<(), AuthError> {
        o_info!("{} | Starting play loop", self.session_name);
        let mut first_login_done = false;

        loop {
            if let Err(e) = self.auth.ensure_valid(&self.client).await {
                if e.is_fatal() {
                    o_error!("{} | Fatal session error: {}", self.session_name, e);
                    return Err(e);
                }
                o_error!("{} | Handshake failed: {}", self.session_name, e);
                tokio::time::sleep(Duration::from_secs(ERROR_RETRY_DELAY_SECS)).await;
                continue;
            }

            let profile = match self.client.fetch_profile().await {
                Ok(profile) => profile,
                Err(e) => {
                    o_error!("{} | Profile fetch failed: {}", self.session_name, e);
                    tokio::time::sleep(Duration::from_secs(ERROR_RETRY_DELAY_SECS)).await;
                    continue;
                }
            };

            if !first_login_done {
                let boss = &profile.current_boss;
                o_info!(
                    "{} | Current boss level: {} | Boss health: {} out of {}",
                    self.session_name,
                    boss.level,
                    boss.current_health,
                    boss.max_health
                );
                first_login_done = true;
            }

            // Secondary snapshots are advisory; a failed fetch skips the
            // actions that depend on them instead of skipping the cycle.
            let tapbot = match self.client.fetch_tapbot_config().await {
                Ok(tapbot) => Some(tapbot),
                Err(e) => {
                    o_warn!("{} | Tapbot config fetch failed: {}", self.session_name, e);
                    None
                }
            };
            let user = match self.client.fetch_user().await {
                Ok(user) => Some(user),
                Err(e) => {
                    o_warn!("{} | User fetch failed: {}", self.session_name, e);
                    None
                }
            };

            let drawn_taps = {
                let range = self.config.taps.random_taps_count;
                rand::thread_rng().gen_range(range[0]..=range[1])
            };

            let snapshot = CycleSnapshot {
                profile: profile.clone(),
                tapbot,
                user,
                turbo: self.turbo,
                drawn_taps,
                now: Utc::now(),
            };
            let verdict = policy::decide(&snapshot, &self.config);
            self.turbo = verdict.turbo;

            if matches!(verdict.sleep, SleepPlan::EnergyShortage) {
                let min_needed = drawn_taps as i64 * profile.weapon_level;
                o_warn!(
                    "{} | Not enough energy to send {} taps. Needed {} energy | Available: {}",
                    self.session_name,
                    drawn_taps,
                    min_needed + 1,
                    profile.current_energy
                );
            }

            let no_gain = self.execute_actions(&verdict.actions, profile).await;

            let sleep_secs = match verdict.sleep {
                SleepPlan::Restart => RESTART_DELAY_SECS,
                SleepPlan::EnergyShortage => policy::ENERGY_SHORTAGE_SLEEP_SECS,
                SleepPlan::LowEnergy(secs) => {
                    o_info!(
                        "{} | Minimum energy reached, sleeping {}s",
                        self.session_name,
                        secs
                    );
                    secs
                }
                SleepPlan::BetweenTaps => {
                    if self.turbo.is_active(Utc::now()) {
                        TURBO_CYCLE_SLEEP_SECS
                    } else if no_gain {
                        NO_GAIN_SLEEP_SECS
                    } else {
                        let range = self.config.taps.sleep_between_tap;
                        rand::thread_rng().gen_range(range[0]..=range[1])
                    }
                }
            };

            o_info!("{} | Sleep {}s", self.session_name, sleep_secs);
            tokio::time::sleep(Duration::from_secs(sleep_secs)).await;
        }
    }

    /// Execute the decided actions in order. Every failure here is
    /// recoverable: log, skip the action, keep going. Returns whether the
    /// tap submission produced no balance gain.
    async fn execute_actions(&mut self, actions: &[Action], mut profile: ProfileState) -> bool {
        let mut no_gain = false;

        for action in actions {
            match action {
                Action::Spin => {
                    match self.client.spin().await {
                        Ok(reward) => {
                            tokio::time::sleep(Duration::from_secs(1)).await;
                            // Re-fetch for the post-spin balance and a live nonce.
                            match self.client.fetch_profile().await {
                                Ok(fresh) => {
                                    o_success!(
                                        "{} | Reward amount: {} | Reward type: {} | Available spins: {}",
                                        self.session_name,
                                        reward.reward_amount,
                                        reward.reward_type,
                                        fresh.spin_energy_total
                                    );
                                    profile = fresh;
                                }
                                Err(e) => o_warn!(
                                    "{} | Profile refresh after spin failed: {}",
                                    self.session_name,
                                    e
                                ),
                            }
                        }
                        Err(e) => o_warn!("{} | Spin failed: {}", self.session_name, e),
                    }
                }
                Action::ApplyFreeBoost(kind) => {
                    o_info!(
                        "{} | Sleep {}s before activating the daily {:?} boost",
                        self.session_name,
                        PRE_BOOST_DELAY_SECS,
                        kind
                    );
                    tokio::time::sleep(Duration::from_secs(PRE_BOOST_DELAY_SECS)).await;
                    match self.client.apply_free_boost(*kind).await {
                        Ok(()) => {
                            o_success!("{} | {:?} boost applied", self.session_name, kind);
                            if *kind == FreeBoostKind::Turbo {
                                self.turbo = TurboWindow::armed(Utc::now());
                            }
                            tokio::time::sleep(Duration::from_secs(1)).await;
                        }
                        Err(e) => {
                            o_warn!("{} | {:?} boost failed: {}", self.session_name, kind, e)
                        }
                    }
                }
                Action::SubmitTaps { count } => {
                    let vector: Vec<i64> = {
                        let mut rng = rand::thread_rng();
                        (0..*count).map(|_| rng.gen_range(1..=4)).collect()
                    };
                    match self.client.submit_taps(&profile.nonce, *count, &vector).await {
                        Ok(after) => {
                            let delta = after.coins_amount - profile.coins_amount;
                            if delta > 0 {
                                o_success!(
                                    "{} | Successfully tapped! Balance: {} (+{}) | Boss health: {}",
                                    self.session_name,
                                    after.coins_amount,
                                    delta,
                                    after.current_boss.current_health
                                );
                            } else {
                                no_gain = true;
                            }
                            profile = after;
                        }
                        Err(e) => {
                            o_warn!("{} | Tap submission failed: {}", self.session_name, e);
                            no_gain = true;
                        }
                    }
                }
                Action::ClaimReferralBonus => match self.client.claim_referral_bonus().await {
                    Ok(()) => o_success!("{} | Referral bonus was claimed", self.session_name),
                    Err(e) => o_warn!("{} | Referral bonus claim failed: {}", self.session_name, e),
                },
                Action::PurchaseTapbot => {
                    match self.client.purchase_upgrade(UpgradeKind::Tapbot).await {
                        Ok(()) => {
                            o_success!("{} | Tapbot was purchased", self.session_name);
                            tokio::time::sleep(Duration::from_secs(3)).await;
                        }
                        Err(e) => {
                            o_warn!("{} | Tapbot purchase failed: {}", self.session_name, e)
                        }
                    }
                }
                Action::StartTapbot => match self.client.start_tapbot().await {
                    Ok(()) => o_success!("{} | Tapbot is started", self.session_name),
                    Err(e) => o_warn!("{} | Tapbot start failed: {}", self.session_name, e),
                },
                Action::ClaimTapbot => match self.client.claim_tapbot().await {
                    Ok(fresh) => {
                        o_success!("{} | Tapbot was claimed", self.session_name);
                        tokio::time::sleep(Duration::from_secs(3)).await;
                        // One immediate restart when attempts remain; the
                        // next cycle handles anything beyond that.
                        if fresh.attempts_remaining() {
                            match self.client.start_tapbot().await {
                                Ok(()) => {
                                    o_success!("{} | Tapbot is started", self.session_name)
                                }
                                Err(e) => o_warn!(
                                    "{} | Tapbot restart failed: {}",
                                    self.session_name,
                                    e
                                ),
                            }
                        }
                    }
                    Err(e) => o_warn!("{} | Tapbot claim failed: {}", self.session_name, e),
                },
                Action::AdvanceBoss { next_level } => {
                    o_info!(
                        "{} | Setting next boss: level {}",
                        self.session_name,
                        next_level
                    );
                    match self.client.set_next_boss().await {
                        Ok(()) => o_success!(
                            "{} | Successfully set next boss: level {}",
                            self.session_name,
                            next_level
                        ),
                        Err(e) => o_warn!("{} | Boss advance failed: {}", self.session_name, e),
                    }
                }
                Action::PurchaseUpgrade(kind) => {
                    match self.client.purchase_upgrade(*kind).await {
                        Ok(()) => {
                            o_success!("{} | {:?} upgrade purchased", self.session_name, kind);
                            tokio::time::sleep(Duration::from_secs(1)).await;
                        }
                        Err(e) => o_warn!(
                            "{} | {:?} upgrade failed: {}",
                            self.session_name,
                            kind,
                            e
                        ),
                    }
                }
            }
        }

        no_gain
    }
}

use crate::o_info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapfarmerConfig {
    pub account: AccountConfig,
    pub energy: EnergyConfig,
    pub taps: TapsConfig,
    pub tapbot: TapbotConfig,
    pub upgrades: UpgradesConfig,
    pub boosts: BoostsConfig,
    pub spin: SpinConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Session name used for logging and user-agent persistence
    pub session_name: String,
    /// Optional proxy URL (http/https/socks5) for all game traffic
    pub proxy: Option<String>,
    /// File holding the signed mini-app launch URL for this account
    pub launch_url_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Energy level below which the post-tap cascade pauses the loop
    pub min_available_energy: i64,
    /// Sleep duration in seconds when energy stays below the minimum
    pub sleep_by_min_energy: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapsConfig {
    /// Inclusive [min, max] range for the per-cycle tap count draw
    pub random_taps_count: [u32; 2],
    /// Inclusive [min, max] range in seconds for the inter-cycle sleep draw
    pub sleep_between_tap: [u64; 2],
    /// Flat tap bonus added to a submission while a turbo window is active
    pub add_taps_on_turbo: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapbotConfig {
    /// Purchase the tapbot automatically once the balance allows it
    pub auto_buy_tapbot: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradesConfig {
    pub auto_upgrade_tap: bool,
    /// Highest tap (weapon) level auto-upgrade will purchase
    pub max_tap_level: i64,
    pub auto_upgrade_energy: bool,
    /// Highest energy-limit level auto-upgrade will purchase
    pub max_energy_level: i64,
    pub auto_upgrade_charge: bool,
    /// Highest energy-recharge level auto-upgrade will purchase
    pub max_charge_level: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostsConfig {
    /// Spend the free daily energy refill when energy runs short
    pub apply_daily_energy: bool,
    /// Spend the free daily turbo boost when available
    pub apply_daily_turbo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinConfig {
    /// Spend accumulated spin energy on the slot machine each cycle
    pub auto_spin: bool,
}

impl Default for TapfarmerConfig {
    fn default() -> Self {
        Self {
            account: AccountConfig {
                session_name: "account1".to_string(),
                proxy: None,
                launch_url_file: None,
            },
            energy: EnergyConfig {
                min_available_energy: 100,
                sleep_by_min_energy: 200,
            },
            taps: TapsConfig {
                random_taps_count: [50, 200],
                sleep_between_tap: [15, 25],
                add_taps_on_turbo: 2500,
            },
            tapbot: TapbotConfig {
                auto_buy_tapbot: true,
            },
            upgrades: UpgradesConfig {
                auto_upgrade_tap: true,
                max_tap_level: 5,
                auto_upgrade_energy: true,
                max_energy_level: 5,
                auto_upgrade_charge: true,
                max_charge_level: 3,
            },
            boosts: BoostsConfig {
                apply_daily_energy: true,
                apply_daily_turbo: true,
            },
            spin: SpinConfig { auto_spin: true },
        }
    }
}

impl TapfarmerConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            o_info!("Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: TapfarmerConfig = toml::from_str(&config_str)?;
            Ok(config)
        } else {
            o_info!("Creating default configuration at {}", config_path);
            let config = TapfarmerConfig::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.account.session_name.is_empty() {
            return Err("session_name must not be empty".to_string());
        }
        if self.taps.random_taps_count[0] == 0 {
            return Err("random_taps_count minimum must be greater than 0".to_string());
        }
        if self.taps.random_taps_count[0] > self.taps.random_taps_count[1] {
            return Err("random_taps_count range is inverted".to_string());
        }
        if self.taps.sleep_between_tap[0] > self.taps.sleep_between_tap[1] {
            return Err("sleep_between_tap range is inverted".to_string());
        }
        if self.energy.min_available_energy < 0 {
            return Err("min_available_energy must be non-negative".to_string());
        }
        if self.upgrades.max_tap_level < 1
            || self.upgrades.max_energy_level < 1
            || self.upgrades.max_charge_level < 1
        {
            return Err("upgrade level caps must be at least 1".to_string());
        }

        Ok(())
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        o_info!("Configuration summary:");
        o_info!("   Session: {}", self.account.session_name);
        o_info!(
            "   Taps per cycle: {}-{}",
            self.taps.random_taps_count[0],
            self.taps.random_taps_count[1]
        );
        o_info!(
            "   Cycle sleep: {}-{}s",
            self.taps.sleep_between_tap[0],
            self.taps.sleep_between_tap[1]
        );
        o_info!(
            "   Min energy: {} (sleep {}s)",
            self.energy.min_available_energy,
            self.energy.sleep_by_min_energy
        );
        o_info!(
            "   Auto: spin={} tapbot={} upgrades={}/{}/{}",
            self.spin.auto_spin,
            self.tapbot.auto_buy_tapbot,
            self.upgrades.auto_upgrade_tap,
            self.upgrades.auto_upgrade_energy,
            self.upgrades.auto_upgrade_charge
        );
        if let Some(proxy) = &self.account.proxy {
            o_info!("   Proxy: {}", proxy);
        }
    }
}

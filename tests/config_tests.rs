use tapfarmer::config::TapfarmerConfig;

fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("tapfarmer_cfg_{}_{}.toml", name, std::process::id()))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn default_config_matches_documented_thresholds() {
    let config = TapfarmerConfig::default();
    assert_eq!(config.energy.min_available_energy, 100);
    assert_eq!(config.energy.sleep_by_min_energy, 200);
    assert_eq!(config.taps.random_taps_count, [50, 200]);
    assert_eq!(config.taps.sleep_between_tap, [15, 25]);
    assert_eq!(config.taps.add_taps_on_turbo, 2500);
    assert_eq!(config.upgrades.max_tap_level, 5);
    assert_eq!(config.upgrades.max_energy_level, 5);
    assert_eq!(config.upgrades.max_charge_level, 3);
    assert!(config.tapbot.auto_buy_tapbot);
    assert!(config.spin.auto_spin);
    assert!(config.boosts.apply_daily_energy);
    assert!(config.boosts.apply_daily_turbo);
}

#[test]
fn default_config_validates() {
    assert!(TapfarmerConfig::default().validate().is_ok());
}

#[test]
fn validation_rejects_inverted_ranges() {
    let mut config = TapfarmerConfig::default();
    config.taps.random_taps_count = [200, 50];
    assert!(config.validate().is_err());

    let mut config = TapfarmerConfig::default();
    config.taps.sleep_between_tap = [25, 15];
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_zero_tap_minimum() {
    let mut config = TapfarmerConfig::default();
    config.taps.random_taps_count = [0, 10];
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_empty_session_name() {
    let mut config = TapfarmerConfig::default();
    config.account.session_name = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = TapfarmerConfig::default();
    config.account.session_name = "roundtrip".to_string();
    config.account.proxy = Some("socks5://127.0.0.1:9050".to_string());
    config.taps.random_taps_count = [10, 20];

    let serialized = toml::to_string_pretty(&config).unwrap();
    let parsed: TapfarmerConfig = toml::from_str(&serialized).unwrap();
    assert_eq!(parsed.account.session_name, "roundtrip");
    assert_eq!(parsed.account.proxy.as_deref(), Some("socks5://127.0.0.1:9050"));
    assert_eq!(parsed.taps.random_taps_count, [10, 20]);
}

#[tokio::test]
async fn load_or_create_writes_default_then_reloads_it() {
    let path = temp_path("create");
    let _ = std::fs::remove_file(&path);

    let created = TapfarmerConfig::load_or_create(&path).expect("create default");
    assert_eq!(created.energy.min_available_energy, 100);
    assert!(std::path::Path::new(&path).exists());

    let reloaded = TapfarmerConfig::load_or_create(&path).expect("reload");
    assert_eq!(
        reloaded.taps.random_taps_count,
        created.taps.random_taps_count
    );

    let _ = std::fs::remove_file(&path);
}

use chrono::{Duration, TimeZone, Utc};
use tapfarmer::models::responses::{ProfileResponse, TapbotConfigResponse};
use tapfarmer::models::tapbot::{TapbotPhase, TapbotState};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn tapbot(purchased: bool, used: i64, total: i64, ends_at: Option<chrono::DateTime<Utc>>) -> TapbotState {
    TapbotState {
        is_purchased: purchased,
        used_attempts: used,
        total_attempts: total,
        ends_at,
    }
}

#[test]
fn tapbot_lifecycle_phases() {
    assert_eq!(
        tapbot(false, 0, 0, None).phase(now()),
        TapbotPhase::NotPurchased
    );
    assert_eq!(tapbot(true, 1, 5, None).phase(now()), TapbotPhase::Idle);
    assert_eq!(
        tapbot(true, 5, 5, None).phase(now()),
        TapbotPhase::Exhausted
    );
    assert_eq!(
        tapbot(true, 1, 5, Some(now() + Duration::hours(1))).phase(now()),
        TapbotPhase::Running
    );
    assert_eq!(
        tapbot(true, 1, 5, Some(now() - Duration::seconds(1))).phase(now()),
        TapbotPhase::Claimable
    );
    // An end time of exactly now is already claimable.
    assert_eq!(
        tapbot(true, 1, 5, Some(now())).phase(now()),
        TapbotPhase::Claimable
    );
}

#[test]
fn profile_snapshot_deserializes_from_wire_shape() {
    let body = r#"{
        "data": {
            "telegramGameGetConfig": {
                "coinsAmount": 123456,
                "currentEnergy": 742,
                "nonce": "a1b2c3",
                "weaponLevel": 4,
                "energyLimitLevel": 3,
                "energyRechargeLevel": 2,
                "spinEnergyTotal": 7,
                "freeBoosts": {
                    "currentTurboAmount": 1,
                    "currentRefillEnergyAmount": 2
                },
                "currentBoss": {
                    "level": 5,
                    "maxHealth": 2000000,
                    "currentHealth": 1337
                }
            }
        }
    }"#;

    let response: ProfileResponse = serde_json::from_str(body).expect("should deserialize");
    let profile = response.data.telegram_game_get_config;
    assert_eq!(profile.coins_amount, 123456);
    assert_eq!(profile.current_energy, 742);
    assert_eq!(profile.nonce, "a1b2c3");
    assert_eq!(profile.free_boosts.current_turbo_amount, 1);
    assert_eq!(profile.current_boss.level, 5);
    assert_eq!(profile.spin_energy_total, 7);
    assert_eq!(profile.next_tap_level(), 5);
    assert_eq!(profile.next_energy_level(), 4);
    assert_eq!(profile.next_charge_level(), 3);
}

#[test]
fn tapbot_config_deserializes_with_and_without_end_time() {
    let running = r#"{
        "data": {
            "telegramGameTapbotGetConfig": {
                "isPurchased": true,
                "usedAttempts": 2,
                "totalAttempts": 5,
                "endsAt": "2024-06-01T15:30:00Z"
            }
        }
    }"#;
    let response: TapbotConfigResponse = serde_json::from_str(running).unwrap();
    let state = response.data.telegram_game_tapbot_get_config;
    assert!(state.is_purchased);
    assert!(state.ends_at.is_some());
    assert!(state.attempts_remaining());

    let idle = r#"{
        "data": {
            "telegramGameTapbotGetConfig": {
                "isPurchased": true,
                "usedAttempts": 5,
                "totalAttempts": 5,
                "endsAt": null
            }
        }
    }"#;
    let response: TapbotConfigResponse = serde_json::from_str(idle).unwrap();
    let state = response.data.telegram_game_tapbot_get_config;
    assert!(state.ends_at.is_none());
    assert!(!state.attempts_remaining());
}

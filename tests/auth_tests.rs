use chrono::{Duration, TimeZone, Utc};
use tapfarmer::auth::session::{Credential, RENEWAL_INTERVAL_SECS};
use tapfarmer::auth::webapp::{login_variables, parse_launch_url};
use url::form_urlencoded;

#[test]
fn credential_is_fresh_below_renewal_interval() {
    let issued = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let credential = Credential {
        token: "tok".to_string(),
        issued_at: issued,
    };

    let just_before = issued + Duration::seconds(RENEWAL_INTERVAL_SECS - 1);
    assert!(!credential.is_stale(just_before), "never renews early");
}

#[test]
fn credential_is_stale_exactly_at_renewal_boundary() {
    let issued = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let credential = Credential {
        token: "tok".to_string(),
        issued_at: issued,
    };

    let boundary = issued + Duration::seconds(RENEWAL_INTERVAL_SECS);
    assert!(credential.is_stale(boundary));
    assert!(credential.is_stale(boundary + Duration::seconds(1)));
}

fn sample_launch_url(user_json: &str) -> String {
    // Build the doubly-encoded payload the way Telegram does: the inner
    // query string is percent-encoded field by field, then the whole thing
    // is encoded again as the tgWebAppData parameter value.
    let inner = form_urlencoded::Serializer::new(String::new())
        .append_pair("query_id", "AAHqwXUzAAAAAOrBdTM1test")
        .append_pair("user", user_json)
        .append_pair("auth_date", "1717243200")
        .append_pair("hash", "deadbeefcafe1234")
        .finish();
    let outer = form_urlencoded::Serializer::new(String::new())
        .append_pair("tgWebAppData", &inner)
        .finish();
    format!("https://tg-app.example/game#{outer}&tgWebAppVersion=7.2&tgWebAppPlatform=android")
}

#[test]
fn parse_launch_url_extracts_all_fields() {
    let user_json = r#"{"id":123456789,"first_name":"Test","username":"tester","language_code":"en"}"#;
    let url = sample_launch_url(user_json);

    let data = parse_launch_url(&url).expect("should parse");
    assert_eq!(data.query_id, "AAHqwXUzAAAAAOrBdTM1test");
    assert_eq!(data.user, user_json);
    assert_eq!(data.auth_date, 1717243200);
    assert_eq!(data.hash, "deadbeefcafe1234");
}

#[test]
fn check_data_string_is_newline_joined_in_fixed_order() {
    let user_json = r#"{"id":1,"first_name":"A"}"#;
    let url = sample_launch_url(user_json);
    let data = parse_launch_url(&url).unwrap();

    assert_eq!(
        data.check_data_string(),
        format!(
            "auth_date=1717243200\nquery_id=AAHqwXUzAAAAAOrBdTM1test\nuser={}",
            user_json
        )
    );
}

#[test]
fn parse_launch_url_rejects_missing_payload() {
    let err = parse_launch_url("https://tg-app.example/game#foo=bar").unwrap_err();
    assert!(err.to_string().contains("tgWebAppData"));
}

#[test]
fn parse_launch_url_rejects_missing_version_delimiter() {
    let err = parse_launch_url("https://tg-app.example/game#tgWebAppData=abc").unwrap_err();
    assert!(err.to_string().contains("tgWebAppVersion"));
}

#[test]
fn parse_launch_url_rejects_missing_fields() {
    let inner = form_urlencoded::Serializer::new(String::new())
        .append_pair("query_id", "q")
        .append_pair("auth_date", "1717243200")
        .finish();
    let outer = form_urlencoded::Serializer::new(String::new())
        .append_pair("tgWebAppData", &inner)
        .finish();
    let url = format!("https://tg-app.example/game#{outer}&tgWebAppVersion=7.2");

    assert!(parse_launch_url(&url).is_err());
}

#[test]
fn login_variables_carry_signed_fields_and_client_identity() {
    let user_json = r#"{"id":123456789,"first_name":"Test","username":"tester","language_code":"en"}"#;
    let url = sample_launch_url(user_json);
    let data = parse_launch_url(&url).unwrap();

    let variables = login_variables(&data).expect("should build");
    assert_eq!(variables["auth_date"], 1717243200);
    assert_eq!(variables["hash"], "deadbeefcafe1234");
    assert_eq!(variables["query_id"], "AAHqwXUzAAAAAOrBdTM1test");
    assert_eq!(variables["checkDataString"], data.check_data_string());
    assert_eq!(variables["user"]["id"], 123456789);
    assert_eq!(variables["user"]["platform"], "ios");
    assert_eq!(variables["user"]["version"], "7.2");
    assert_eq!(variables["user"]["allows_write_to_pm"], true);
}

#[test]
fn login_variables_reject_non_json_user() {
    let data = tapfarmer::auth::webapp::WebAppData {
        query_id: "q".to_string(),
        user: "not json".to_string(),
        auth_date: 1,
        hash: "h".to_string(),
    };
    assert!(login_variables(&data).is_err());
}

// Parsing of the embedded mini-app launch URL.
//
// The signed payload sits in the URL fragment between `tgWebAppData=` and
// `&tgWebAppVersion`, percent-encoded twice: once as a fragment parameter
// value, once more for the fields inside it. Decoding once yields a query
// string `query_id=...&user=...&auth_date=...&hash=...`; decoding each field
// of that query string yields the final values.
use crate::auth::session::AuthError;
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebAppData {
    pub query_id: String,
    /// Raw JSON object describing the Telegram user, exactly as signed.
    pub user: String,
    pub auth_date: i64,
    pub hash: String,
}

impl WebAppData {
    /// The newline-joined string the backend verifies the hash against.
    pub fn check_data_string(&self) -> String {
        format!(
            "auth_date={}\nquery_id={}\nuser={}",
            self.auth_date, self.query_id, self.user
        )
    }
}

fn decode_component(raw: &str) -> String {
    form_urlencoded::parse(format!("v={raw}").as_bytes())
        .next()
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default()
}

/// Extract the signed web-app payload from a launch URL.
pub fn parse_launch_url(launch_url: &str) -> Result<WebAppData, AuthError> {
    let after = launch_url
        .split_once("tgWebAppData=")
        .ok_or_else(|| AuthError::MalformedLaunchUrl("missing tgWebAppData=".to_string()))?
        .1;
    let encoded = after
        .split_once("&tgWebAppVersion")
        .ok_or_else(|| AuthError::MalformedLaunchUrl("missing &tgWebAppVersion".to_string()))?
        .0;

    let inner = decode_component(encoded);

    let mut query_id = None;
    let mut user = None;
    let mut auth_date = None;
    let mut hash = None;

    for (key, value) in form_urlencoded::parse(inner.as_bytes()) {
        match key.as_ref() {
            "query_id" => query_id = Some(value.into_owned()),
            "user" => user = Some(value.into_owned()),
            "auth_date" => auth_date = Some(value.into_owned()),
            "hash" => hash = Some(value.into_owned()),
            _ => {}
        }
    }

    let missing = |field: &str| AuthError::MalformedLaunchUrl(format!("missing {field} field"));
    let auth_date = auth_date
        .ok_or_else(|| missing("auth_date"))?
        .parse::<i64>()
        .map_err(|e| AuthError::MalformedLaunchUrl(format!("bad auth_date: {e}")))?;

    Ok(WebAppData {
        query_id: query_id.ok_or_else(|| missing("query_id"))?,
        user: user.ok_or_else(|| missing("user"))?,
        auth_date,
        hash: hash.ok_or_else(|| missing("hash"))?,
    })
}

/// Build the login mutation variables from a parsed payload.
pub fn login_variables(data: &WebAppData) -> Result<serde_json::Value, AuthError> {
    let mut user: serde_json::Value = serde_json::from_str(&data.user)
        .map_err(|e| AuthError::MalformedLaunchUrl(format!("user field is not JSON: {e}")))?;

    if let Some(map) = user.as_object_mut() {
        map.entry("allows_write_to_pm")
            .or_insert(serde_json::Value::Bool(true));
        map.insert("platform".to_string(), "ios".into());
        map.insert("version".to_string(), "7.2".into());
    } else {
        return Err(AuthError::MalformedLaunchUrl(
            "user field is not a JSON object".to_string(),
        ));
    }

    Ok(serde_json::json!({
        "auth_date": data.auth_date,
        "hash": data.hash,
        "query_id": data.query_id,
        "checkDataString": data.check_data_string(),
        "user": user,
    }))
}

// HTTP transport construction: default headers, stable user agent, proxy.
use crate::{o_error, o_info};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

/// Build the HTTP client every game call goes through. The user agent is the
/// stable per-account assignment from the user-agent store; the bearer header
/// is installed later by the auth session, per request.
pub fn build_client(
    user_agent: &str,
    proxy: Option<&str>,
) -> Result<reqwest::Client, Box<dyn std::error::Error>> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(user_agent);

    if let Some(proxy_url) = proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }

    Ok(builder.build()?)
}

/// Log the egress IP as seen through the configured proxy. Failures are
/// reported but never stop startup.
pub async fn check_proxy(client: &reqwest::Client, session_name: &str, proxy_url: &str) {
    let result = async {
        let response = client
            .get("https://api.ipify.org?format=json")
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await?;
        let body: serde_json::Value = response.json().await?;
        Ok::<_, reqwest::Error>(body["ip"].as_str().unwrap_or("unknown").to_string())
    }
    .await;

    match result {
        Ok(ip) => o_info!("{} | Proxy IP: {}", session_name, ip),
        Err(e) => o_error!("{} | Proxy: {} | Error: {}", session_name, proxy_url, e),
    }
}

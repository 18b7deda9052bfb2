//! HTTP plumbing shared by the provider clients.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::GeocodeError;

/// Builds a client that identifies itself with `user_agent`. Nominatim's
/// usage policy rejects anonymous requests.
pub(crate) fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client, GeocodeError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(5))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Parses `base_url` and joins `endpoint` onto it. The base may or may not
/// end with a slash; existing path segments are kept.
pub(crate) fn endpoint_url(base_url: &str, endpoint: &str) -> Result<Url, GeocodeError> {
    let invalid = |reason: String| GeocodeError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    base.join(endpoint).map_err(|e| invalid(e.to_string()))
}

/// GETs `url`, requires a 2xx status, and decodes the body as `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: Url,
    provider: &'static str,
) -> Result<T, GeocodeError> {
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GeocodeError::UnexpectedStatus {
            provider,
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
        context: format!("{provider} response"),
        source: e,
    })
}

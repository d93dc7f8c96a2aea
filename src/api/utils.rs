use anyhow::{Context, Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Sends a GET request and returns the status with the decoded JSON body.
///
/// Non-success statuses are returned rather than raised, since the body may
/// carry the provider's own error.
pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &[(&str, String)],
) -> Result<(StatusCode, Value)> {
    let url = format!("{}/{}", base_url, endpoint);
    debug!(%url, ?params, "sending request");

    let res = client.get(&url).query(params).send().await?;
    let status = res.status();
    let text = res.text().await?;

    let data = serde_json::from_str::<Value>(&text).with_context(|| {
        format!(
            "Unexpected API response ({}): {}",
            status,
            text.chars().take(200).collect::<String>()
        )
    })?;

    Ok((status, data))
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .with_context(|| error_msg.to_string()),
        _ => Err(Error::msg("Unexpected API response format: not an object")),
    }
}

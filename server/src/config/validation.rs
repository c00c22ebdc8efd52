//! Setting value validation.

use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static RE_LOGIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{1,25}$").expect("static regex"));

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "TWITCH_TOKEN_URL" | "TWITCH_API_BASE_URL" => validate_http_url(value)?,
        "TWITCH_CHANNEL_NAME" => {
            if !RE_LOGIN.is_match(value) {
                return Err("must be 1-25 letters, digits or underscores".into());
            }
        }
        "REQUEST_TIMEOUT_SECS" => validate_int_range(value, 1, 120)?,
        "SERVER_PORT" => validate_int_range(value, 1, 65535)?,
        "SERVER_HOST" => {
            value
                .parse::<IpAddr>()
                .map_err(|_| "must be an IP address")?;
        }
        _ => {}
    }
    Ok(())
}

fn validate_http_url(value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URL: {e}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err("must be an http or https URL".into());
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if !(min..=max).contains(&v) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

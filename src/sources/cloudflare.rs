//! Cloudflare published IP ranges.
//!
//! Fetches the ranges list and flattens it into newline-separated text (IPv4
//! list first, then IPv6) for the normal processing pipeline.

use crate::config;
use crate::error::{Result, SourceError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Response body of the ranges endpoint.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct IpsResponse {
    pub result: Option<IpsResult>,
    /// Absent in mirrors that serve only the `result` object.
    pub success: Option<bool>,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct IpsResult {
    pub ipv4_cidrs: Vec<String>,
    pub ipv6_cidrs: Vec<String>,
    pub etag: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiMessage {
    pub code: Option<i64>,
    pub message: String,
}

/// GET `url` and return its ranges as newline-separated text.
pub async fn fetch_ranges(url: &str) -> Result<String> {
    log::info!("Fetching ranges from {url}");
    let fetch_err = |e: reqwest::Error| SourceError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config::HTTP_TIMEOUT_SEC))
        .build()
        .map_err(fetch_err)?;
    let response = client.get(url).send().await.map_err(fetch_err)?;
    let status = response.status();
    log::debug!("GET {url} status={status}");
    let body = response.text().await.map_err(fetch_err)?;
    if !status.is_success() {
        return Err(SourceError::Fetch {
            url: url.to_string(),
            message: format!("HTTP status {status}"),
        });
    }

    ranges_to_text(url, &body)
}

/// Parse a ranges response body and join the v4 then v6 lists with newlines.
pub fn ranges_to_text(url: &str, body: &str) -> Result<String> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let parsed: IpsResponse =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            log::error!("BODY START:\n\n{body}\n\nBODY END\n");
            SourceError::Json {
                url: url.to_string(),
                path: e.path().to_string(),
                message: e.inner().to_string(),
            }
        })?;

    if parsed.success == Some(false) {
        let message = parsed
            .errors
            .iter()
            .map(|m| match m.code {
                Some(code) => format!("{code}: {}", m.message),
                None => m.message.clone(),
            })
            .collect::<Vec<String>>()
            .join("; ");
        return Err(SourceError::Api {
            url: url.to_string(),
            message,
        });
    }

    let result = parsed.result.ok_or_else(|| SourceError::Json {
        url: url.to_string(),
        path: "result".to_string(),
        message: "missing result object".to_string(),
    })?;
    log::info!(
        "Got {} IPv4 and {} IPv6 ranges from {url}",
        result.ipv4_cidrs.len(),
        result.ipv6_cidrs.len()
    );

    Ok(result
        .ipv4_cidrs
        .iter()
        .chain(result.ipv6_cidrs.iter())
        .map(String::as_str)
        .collect::<Vec<&str>>()
        .join("\n"))
}

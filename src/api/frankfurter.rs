//! Frankfurter (api.frankfurter.app) client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use super::{ApiError, RatesApi};
use crate::config::ApiConfig;
use crate::constants::{CURRENCIES_PATH, LATEST_PATH};
use crate::conversion::{normalize_codes, ConversionRequest, ConversionResult};

/// Body of `GET /latest`. `amount` and `base` are echoed back by the service
/// and not needed.
#[derive(Debug, Deserialize)]
struct LatestResponse {
    date: String,
    #[serde(default)]
    rates: HashMap<String, serde_json::Value>,
}

/// Error body the service sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// HTTP client for the Frankfurter exchange-rate service.
#[derive(Clone)]
pub struct FrankfurterClient {
    client: Client,
    base_url: String,
}

impl FrankfurterClient {
    /// Create a client for `base_url` whose requests fail after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(config.base_url.clone(), Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("GET {} failed with {}", url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string()),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl RatesApi for FrankfurterClient {
    async fn fetch_currencies(&self) -> Result<Vec<String>, ApiError> {
        let body = self.get(CURRENCIES_PATH, &[]).await?;
        let codes = parse_currencies(&body)?;
        log::info!("Fetched {} currencies", codes.len());
        Ok(codes)
    }

    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ApiError> {
        let query = [
            ("amount", request.amount.to_string()),
            ("from", request.from.clone()),
            ("to", request.to.clone()),
        ];
        let body = self.get(LATEST_PATH, &query).await?;
        parse_conversion(&body, request)
    }
}

/// Extract the sorted code list from a `/currencies` body.
///
/// Only the keys are used; display names may be any JSON value.
pub fn parse_currencies(body: &str) -> Result<Vec<String>, ApiError> {
    let map: HashMap<String, serde_json::Value> =
        serde_json::from_str(body).map_err(|e| ApiError::InvalidData(e.to_string()))?;

    Ok(normalize_codes(map.into_keys()))
}

/// Build a [`ConversionResult`] for `request` from a `/latest` body.
pub fn parse_conversion(body: &str, request: &ConversionRequest) -> Result<ConversionResult, ApiError> {
    let response: LatestResponse = serde_json::from_str(body).map_err(|e| ApiError::InvalidData(e.to_string()))?;

    // Only the target rate matters; other entries may be null or malformed
    let converted = response
        .rates
        .get(&request.to)
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| ApiError::MissingRate(request.to.clone()))?;

    Ok(ConversionResult {
        amount: request.amount,
        from: request.from.clone(),
        to: request.to.clone(),
        converted,
        date: response.date,
    })
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body).ok().map(|e| e.message)
}

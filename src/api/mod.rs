//! Exchange-rate API abstraction.
//!
//! This module defines the interface the UI uses to fetch the currency list
//! and conversions, along with the error type shared by implementations.

use async_trait::async_trait;

use crate::conversion::{ConversionRequest, ConversionResult};

pub mod frankfurter;

pub use frankfurter::FrankfurterClient;

/// Errors returned by exchange-rate API operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Conversion rate not returned by API")]
    MissingRate(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout
        } else if error.is_decode() {
            ApiError::InvalidData(error.to_string())
        } else {
            ApiError::Network(error.to_string())
        }
    }
}

/// Source of currency codes and conversion rates.
///
/// Implementations perform the network I/O; callers run them on background
/// tasks and never hold UI state across the await.
#[async_trait]
pub trait RatesApi: Send + Sync {
    /// Fetch the supported currency codes, sorted and without duplicates.
    async fn fetch_currencies(&self) -> Result<Vec<String>, ApiError>;

    /// Convert `request.amount` from `request.from` into `request.to`.
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ApiError>;
}

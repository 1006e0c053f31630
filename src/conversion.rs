//! Conversion domain types: amount parsing, requests, results and the
//! selection helpers the form relies on.

use crate::constants::{DEFAULT_FROM_CURRENCY, DEFAULT_TO_CURRENCY};
use std::fmt;

/// Why an amount string was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("amount must not be negative")]
    Negative,
}

/// Parse user input into a finite, non-negative amount.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are treated as
/// non-numeric input.
pub fn parse_amount(input: &str) -> Result<f64, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(AmountError::NotANumber(trimmed.to_string()));
    }
    if value < 0.0 {
        return Err(AmountError::Negative);
    }

    Ok(value)
}

/// A validated conversion request
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            amount,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Outcome of a successful conversion, display only
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub converted: f64,
    pub date: String,
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} {} = {:.4} {}  (date: {})",
            self.amount, self.from, self.converted, self.to, self.date
        )
    }
}

/// Exchange source and target
pub fn swap<T>(from: T, to: T) -> (T, T) {
    (to, from)
}

/// Sort and de-duplicate currency codes
pub fn normalize_codes<I, S>(codes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut codes: Vec<String> = codes.into_iter().map(Into::into).collect();
    codes.sort();
    codes.dedup();
    codes
}

/// Pick the initial (from, to) selection for a freshly loaded code list.
///
/// Preferred codes win when they are in the list; otherwise the first code
/// becomes the source and the second (or the first again) the target.
/// Returns `None` for an empty list.
pub fn default_selection(
    codes: &[String],
    preferred_from: Option<&str>,
    preferred_to: Option<&str>,
) -> Option<(String, String)> {
    let first = codes.first()?;
    let contains = |code: &str| codes.iter().any(|c| c == code);

    let from = [preferred_from, Some(DEFAULT_FROM_CURRENCY)]
        .into_iter()
        .flatten()
        .find(|code| contains(*code))
        .map(str::to_string)
        .unwrap_or_else(|| first.clone());

    let to = [preferred_to, Some(DEFAULT_TO_CURRENCY)]
        .into_iter()
        .flatten()
        .find(|code| contains(*code))
        .map(str::to_string)
        .unwrap_or_else(|| codes.get(1).unwrap_or(first).clone());

    Some((from, to))
}

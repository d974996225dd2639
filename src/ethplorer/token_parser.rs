use serde::Deserialize;
use serde_json::Value;

use crate::entity::{Token, WalletError};
use crate::ethplorer::models::{NativeRecord, TokenRecord, NATIVE_NAME, NATIVE_SYMBOL};
use crate::utils::format_amount;

/// Build the native ETH token from the `ETH` entry of a response.
pub fn parse_native_token(record: Option<&Value>) -> Result<Token, WalletError> {
    let record = record
        .ok_or_else(|| WalletError::MalformedNativeAsset("missing ETH entry".to_string()))?;

    let native = NativeRecord::deserialize(record)
        .map_err(|e| WalletError::MalformedNativeAsset(e.to_string()))?;

    build_token(
        NATIVE_NAME.to_string(),
        NATIVE_SYMBOL.to_string(),
        native.balance,
        native.price.rate,
    )
    .map_err(WalletError::MalformedNativeAsset)
}

/// Build a token from one element of the `tokens` array.
pub fn parse_token(record: &Value) -> Result<Token, WalletError> {
    let token = TokenRecord::deserialize(record)
        .map_err(|e| WalletError::MalformedToken(e.to_string()))?;

    let info = token.token_info;
    let balance = scale_raw_balance(&token.raw_balance, info.decimals);

    build_token(info.name, info.symbol, balance, info.price.rate)
        .map_err(WalletError::MalformedToken)
}

/// Divide an integer digit string by `10^decimals`.
///
/// The decimal point is placed textually so the only rounding is the final
/// string-to-f64 conversion.
pub fn scale_raw_balance(raw_balance: &str, decimals: u8) -> f64 {
    let (sign, digits) = match raw_balance.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw_balance),
    };
    let decimals = usize::from(decimals);

    let scaled = if decimals == 0 {
        raw_balance.to_string()
    } else if digits.len() > decimals {
        let (whole, fraction) = digits.split_at(digits.len() - decimals);
        format!("{}{}.{}", sign, whole, fraction)
    } else {
        format!("{}0.{}{}", sign, "0".repeat(decimals - digits.len()), digits)
    };

    scaled.parse::<f64>().unwrap_or(f64::NAN)
}

fn build_token(name: String, symbol: String, balance: f64, rate: f64) -> Result<Token, String> {
    let usd_value = balance * rate;

    if !balance.is_finite() || !usd_value.is_finite() {
        return Err(format!("{} balance or value is out of range", symbol));
    }

    Ok(Token {
        name,
        symbol,
        balance: format_amount(balance),
        usd_value: format_amount(usd_value),
        raw_usd_value: usd_value,
    })
}

// src/ethplorer/models.rs
use serde::Deserialize;

pub const NATIVE_NAME: &str = "Ethereum";
pub const NATIVE_SYMBOL: &str = "ETH";

/// `ETH` entry of a `getAddressInfo` response
#[derive(Debug, Deserialize)]
pub struct NativeRecord {
    #[serde(deserialize_with = "string_or_float::deserialize")]
    pub balance: f64,
    pub price: Price,
}

/// One element of the `tokens` array
#[derive(Debug, Deserialize)]
pub struct TokenRecord {
    #[serde(rename = "rawBalance", deserialize_with = "integer_string::deserialize")]
    pub raw_balance: String,
    #[serde(rename = "tokenInfo")]
    pub token_info: TokenInfo,
}

#[derive(Debug, Deserialize)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    #[serde(deserialize_with = "string_or_u8::deserialize")]
    pub decimals: u8,
    pub price: Price,
}

#[derive(Debug, Deserialize)]
pub struct Price {
    #[serde(deserialize_with = "string_or_float::deserialize")]
    pub rate: f64,
}

// Finite float given either as a JSON number or as a string
pub mod string_or_float {
    use serde::{self, Deserializer};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrFloat;

        impl<'de> serde::de::Visitor<'de> for StringOrFloat {
            type Value = f64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a finite float or a string containing one")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let parsed = value.trim().parse::<f64>().map_err(E::custom)?;
                self.visit_f64(parsed)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(E::custom("number is not finite"))
                }
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(value as f64)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(value as f64)
            }
        }

        deserializer.deserialize_any(StringOrFloat)
    }
}

// Integer quantity in the smallest on-chain unit, kept as its decimal digits
// (optional leading `-`, no leading zeros). Raw balances routinely exceed
// u64 and must only be rounded once, when scaled by `decimals`.
pub mod integer_string {
    use serde::{self, Deserializer};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IntegerString;

        impl<'de> serde::de::Visitor<'de> for IntegerString {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string containing an integer")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let value = value.trim();
                let (negative, digits) = match value.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, value.strip_prefix('+').unwrap_or(value)),
                };
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(E::custom(format!("invalid integer: {:?}", value)));
                }

                let digits = digits.trim_start_matches('0');
                Ok(match (negative, digits.is_empty()) {
                    (_, true) => "0".to_string(),
                    (true, false) => format!("-{}", digits),
                    (false, false) => digits.to_string(),
                })
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if value.is_finite() && value.fract() == 0.0 {
                    self.visit_str(&format!("{:.0}", value))
                } else {
                    Err(E::custom(format!("invalid integer: {}", value)))
                }
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(value.to_string())
            }
        }

        deserializer.deserialize_any(IntegerString)
    }
}

// Decimal places, given either as a JSON number or as a string
pub mod string_or_u8 {
    use serde::{self, Deserializer};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u8, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrU8;

        impl<'de> serde::de::Visitor<'de> for StringOrU8 {
            type Value = u8;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer in 0..=255 or a string containing one")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.trim().parse::<u8>().map_err(E::custom)
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u8::try_from(value).map_err(E::custom)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u8::try_from(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(StringOrU8)
    }
}

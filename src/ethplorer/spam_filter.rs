use serde_json::Value;

/// Substrings that mark a token name or symbol as an airdrop/phishing lure.
pub const SPAM_KEYWORDS: [&str; 7] = ["http", ".com", "claim", "gift", "visit", "earn", "free"];

/// The parts of a `tokenInfo` object the spam check looks at.
///
/// Missing or non-string `name`/`symbol` are read as empty strings.
#[derive(Debug, Clone, Copy)]
pub struct TokenMetadata<'a> {
    pub name: &'a str,
    pub symbol: &'a str,
    pub price: Option<&'a Value>,
    pub total_supply: Option<&'a Value>,
}

impl<'a> TokenMetadata<'a> {
    pub fn from_record(record: &'a Value) -> Self {
        let field = |key: &str| record.get("tokenInfo").and_then(|info| info.get(key));

        Self {
            name: field("name").and_then(Value::as_str).unwrap_or_default(),
            symbol: field("symbol").and_then(Value::as_str).unwrap_or_default(),
            price: field("price"),
            total_supply: field("totalSupply"),
        }
    }

    pub fn is_spam(&self) -> bool {
        if self.price.map_or(true, is_falsy) {
            return true;
        }

        if self.total_supply.and_then(Value::as_str) == Some("0") {
            return true;
        }

        SPAM_KEYWORDS
            .iter()
            .any(|keyword| self.name.contains(keyword) || self.symbol.contains(keyword))
    }
}

/// Check a raw `tokens[]` element.
pub fn is_spam_token(record: &Value) -> bool {
    TokenMetadata::from_record(record).is_spam()
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, symbol: &str, price: Value, total_supply: &str) -> Value {
        json!({
            "rawBalance": "1000",
            "tokenInfo": {
                "name": name,
                "symbol": symbol,
                "decimals": "0",
                "price": price,
                "totalSupply": total_supply
            }
        })
    }

    #[test]
    fn falsy_price_is_spam() {
        for price in [json!(false), json!(null), json!(0), json!({}), json!("")] {
            assert!(is_spam_token(&record("Tether", "USDT", price, "100")));
        }

        let mut missing = record("Tether", "USDT", json!(false), "100");
        missing["tokenInfo"].as_object_mut().unwrap().remove("price");
        assert!(is_spam_token(&missing));
    }

    #[test]
    fn zero_supply_is_spam() {
        assert!(is_spam_token(&record("Tether", "USDT", json!({"rate": 1}), "0")));
    }

    #[test]
    fn keywords_in_name_or_symbol_are_spam() {
        for keyword in SPAM_KEYWORDS {
            let name = format!("Token {}", keyword);
            assert!(is_spam_token(&record(&name, "TKN", json!({"rate": 1}), "100")));
            let symbol = format!("T{}", keyword);
            assert!(is_spam_token(&record("Token", &symbol, json!({"rate": 1}), "100")));
        }
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        assert!(!is_spam_token(&record("FREE Money", "FM", json!({"rate": 1}), "100")));
        assert!(is_spam_token(&record("free money", "FM", json!({"rate": 1}), "100")));
    }

    #[test]
    fn legitimate_token_is_not_spam() {
        assert!(!is_spam_token(&record(
            "Tether USD",
            "USDT",
            json!({"rate": "1.0001"}),
            "39823315802209040"
        )));
    }

    #[test]
    fn missing_name_and_symbol_do_not_match_keywords() {
        let token = json!({
            "rawBalance": "1000",
            "tokenInfo": { "price": { "rate": 1 }, "totalSupply": "100" }
        });
        assert!(!is_spam_token(&token));
    }

    #[test]
    fn missing_token_info_is_spam() {
        assert!(is_spam_token(&json!({ "rawBalance": "1000" })));
    }
}

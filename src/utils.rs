/// Format an amount for display.
///
/// Values below 0.01 keep 6 decimals, values below 1 keep 4, everything else
/// keeps 2. Trailing zeros and a dangling decimal point are removed.
/// Negative values fall into the 6-decimal tier.
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        return "0".to_string();
    }

    let fixed = if amount < 0.01 {
        format!("{:.6}", amount)
    } else if amount < 1.0 {
        format!("{:.4}", amount)
    } else {
        format!("{:.2}", amount)
    };

    strip_trailing_zeros(&fixed)
}

fn strip_trailing_zeros(fixed: &str) -> String {
    if !fixed.contains('.') {
        return fixed.to_string();
    }

    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

// Shorten address for display
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 12 || !address.is_ascii() {
        return address.to_string();
    }

    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Escape text for inclusion in HTML element content or quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

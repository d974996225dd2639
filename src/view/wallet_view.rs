use anyhow::Result;

use crate::entity::{WalletSnapshot, ADDRESS_LENGTH};
use crate::utils::{escape_html, shorten_address};

pub const ADDRESS_PLACEHOLDER: &str = "0x112532B200980Ddee8226023bEbBE2E6884C31e2";
pub const INVALID_ADDRESS_MESSAGE: &str = "Please enter valid Ethereum wallet address.";
pub const NO_DATA_MESSAGE: &str = "No data available";

pub trait WalletView: Send + Sync {
    fn render_index(&self, address: &str, error: Option<&str>) -> Result<String>;
    fn render_wallet(&self, snapshot: &WalletSnapshot) -> Result<String>;
    fn render_unavailable(&self, address: &str) -> Result<String>;
    fn render_invalid_address(&self, address: &str) -> Result<String>;
}

#[derive(Default)]
pub struct HtmlWalletView;

impl HtmlWalletView {
    pub fn new() -> Self {
        Self
    }

    fn layout(title: &str, content: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
            <html lang=\"en\">\n\
            <head>\n\
            <meta charset=\"utf-8\">\n\
            <title>{}</title>\n\
            </head>\n\
            <body>\n\
            <main class=\"container\">\n\
            {}\n\
            </main>\n\
            <footer>Updated: {} UTC</footer>\n\
            </body>\n\
            </html>\n",
            escape_html(title),
            content,
            chrono::Utc::now().format("%H:%M:%S")
        )
    }

    fn address_form(address: &str, error: Option<&str>) -> String {
        let error_text = error
            .map(|message| format!("<div class=\"invalid-feedback\">{}</div>\n", escape_html(message)))
            .unwrap_or_default();

        format!(
            "<form method=\"post\" action=\"/\">\n\
            <label for=\"id_address\">Enter wallet address</label>\n\
            <input type=\"text\" name=\"address\" id=\"id_address\" class=\"form-control\" \
            placeholder=\"{}\" autocomplete=\"off\" minlength=\"{}\" maxlength=\"{}\" value=\"{}\" required>\n\
            {}\
            <button type=\"submit\">Check</button>\n\
            </form>",
            ADDRESS_PLACEHOLDER,
            ADDRESS_LENGTH,
            ADDRESS_LENGTH,
            escape_html(address),
            error_text
        )
    }

    fn format_tokens_table(snapshot: &WalletSnapshot) -> String {
        let mut rows = String::new();

        for token in &snapshot.tokens {
            rows.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>${}</td></tr>\n",
                escape_html(&token.name),
                escape_html(&token.symbol),
                escape_html(&token.balance),
                escape_html(&token.usd_value)
            ));
        }

        format!(
            "<table class=\"tokens\">\n\
            <thead><tr><th>Name</th><th>Symbol</th><th>Balance</th><th>Value</th></tr></thead>\n\
            <tbody>\n{}</tbody>\n\
            </table>",
            rows
        )
    }
}

impl WalletView for HtmlWalletView {
    fn render_index(&self, address: &str, error: Option<&str>) -> Result<String> {
        let content = format!("<h1>Wallet checker</h1>\n{}", Self::address_form(address, error));

        Ok(Self::layout("Wallet checker", &content))
    }

    fn render_wallet(&self, snapshot: &WalletSnapshot) -> Result<String> {
        let mut content = format!(
            "<h1>Wallet <code>{}</code></h1>\n\
            <p class=\"total\">Total balance: <b>${}</b></p>\n\
            {}\n",
            escape_html(&snapshot.address),
            escape_html(&snapshot.total_usd_value),
            Self::format_tokens_table(snapshot)
        );

        if snapshot.spam_filtered > 0 {
            content.push_str(&format!(
                "<p class=\"hidden-tokens\">{} suspicious token(s) hidden</p>\n",
                snapshot.spam_filtered
            ));
        }

        content.push_str("<a href=\"/\">Check another wallet</a>");

        let title = format!("Wallet {}", shorten_address(&snapshot.address));
        Ok(Self::layout(&title, &content))
    }

    fn render_unavailable(&self, address: &str) -> Result<String> {
        let content = format!(
            "<h1>Wallet <code>{}</code></h1>\n\
            <p class=\"no-data\">{}</p>\n\
            <a href=\"/\">Check another wallet</a>",
            escape_html(address),
            NO_DATA_MESSAGE
        );

        let title = format!("Wallet {}", shorten_address(address));
        Ok(Self::layout(&title, &content))
    }

    fn render_invalid_address(&self, address: &str) -> Result<String> {
        let content = format!(
            "<h1>Wallet checker</h1>\n{}",
            Self::address_form(address, Some(INVALID_ADDRESS_MESSAGE))
        );

        Ok(Self::layout("Wallet checker", &content))
    }
}

use axum::http::StatusCode;

pub mod wallet_presenter;

pub use wallet_presenter::{WalletPresenter, WalletPresenterImpl};

/// What a presenter asks the router to send back
#[derive(Debug, Clone, PartialEq)]
pub enum PageResponse {
    Html(StatusCode, String),
    Redirect(String),
}

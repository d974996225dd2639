use crate::entity::{Address, WalletError};
use crate::interactor::wallet_interactor::WalletInteractor;
use crate::presenter::PageResponse;
use crate::view::wallet_view::{WalletView, INVALID_ADDRESS_MESSAGE};
use anyhow::Result;
use async_trait::async_trait;
use axum::http::StatusCode;
use log::{error, info};
use std::sync::Arc;

#[async_trait]
pub trait WalletPresenter: Send + Sync {
    async fn show_index(&self) -> Result<PageResponse>;
    async fn submit_address(&self, address: &str) -> Result<PageResponse>;
    async fn show_wallet(&self, address: &str) -> Result<PageResponse>;
}

pub struct WalletPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> WalletPresenterImpl<I, V>
where
    I: WalletInteractor,
    V: WalletView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> WalletPresenter for WalletPresenterImpl<I, V>
where
    I: WalletInteractor + Send + Sync,
    V: WalletView + Send + Sync,
{
    async fn show_index(&self) -> Result<PageResponse> {
        let body = self.view.render_index("", None)?;
        Ok(PageResponse::Html(StatusCode::OK, body))
    }

    async fn submit_address(&self, address: &str) -> Result<PageResponse> {
        if Address::is_valid(address) {
            info!("Address submitted: {}", address);
            return Ok(PageResponse::Redirect(format!("/wallet/{}/", address)));
        }

        let body = self
            .view
            .render_index(address, Some(INVALID_ADDRESS_MESSAGE))?;
        Ok(PageResponse::Html(StatusCode::OK, body))
    }

    async fn show_wallet(&self, address: &str) -> Result<PageResponse> {
        match self.interactor.get_wallet_data(address).await {
            Ok(snapshot) => {
                let body = self.view.render_wallet(&snapshot)?;
                Ok(PageResponse::Html(StatusCode::OK, body))
            }
            Err(WalletError::InvalidAddress(_)) => {
                let body = self.view.render_invalid_address(address)?;
                Ok(PageResponse::Html(StatusCode::BAD_REQUEST, body))
            }
            Err(e) => {
                error!("No wallet data for {}: {}", address, e);
                let body = self.view.render_unavailable(address)?;
                Ok(PageResponse::Html(StatusCode::OK, body))
            }
        }
    }
}

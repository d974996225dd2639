use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form,
};
use log::{error, info};
use serde::Deserialize;
use std::sync::Arc;

use crate::di::ServiceContainer;
use crate::interactor::wallet_interactor::WalletInteractorImpl;
use crate::presenter::wallet_presenter::{WalletPresenter, WalletPresenterImpl};
use crate::presenter::PageResponse;
use crate::view::wallet_view::HtmlWalletView;

// Base router trait
pub trait Router: Send + Sync {
    fn setup_routes(&self) -> axum::Router;
}

// HTTP router implementation
pub struct WebRouter {
    services: Arc<ServiceContainer>,
}

impl WebRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }
}

impl Router for WebRouter {
    fn setup_routes(&self) -> axum::Router {
        axum::Router::new()
            .route("/", get(index).post(submit_address))
            .route("/wallet/{address}/", get(wallet_detail))
            .with_state(self.services.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct AddressForm {
    #[serde(default)]
    pub address: String,
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> Response {
        match self {
            PageResponse::Html(status, body) => (status, Html(body)).into_response(),
            PageResponse::Redirect(location) => Redirect::to(&location).into_response(),
        }
    }
}

fn presenter(
    services: &ServiceContainer,
) -> WalletPresenterImpl<WalletInteractorImpl, HtmlWalletView> {
    WalletPresenterImpl::new(services.wallet_interactor(), services.wallet_view())
}

fn respond(result: anyhow::Result<PageResponse>) -> Response {
    match result {
        Ok(page) => page.into_response(),
        Err(e) => {
            error!("Failed to render page: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

async fn index(State(services): State<Arc<ServiceContainer>>) -> Response {
    respond(presenter(&services).show_index().await)
}

async fn submit_address(
    State(services): State<Arc<ServiceContainer>>,
    Form(form): Form<AddressForm>,
) -> Response {
    respond(presenter(&services).submit_address(&form.address).await)
}

async fn wallet_detail(
    State(services): State<Arc<ServiceContainer>>,
    Path(address): Path<String>,
) -> Response {
    info!("Wallet page requested for {}", address);
    respond(presenter(&services).show_wallet(&address).await)
}

use anyhow::Result;
use std::sync::Arc;

use crate::ethplorer::Config as EthplorerConfig;
use crate::ethplorer::EthplorerWalletFetcher;
use crate::ethplorer::WalletFetcher;
use crate::interactor::wallet_interactor::WalletInteractorImpl;
use crate::view::wallet_view::HtmlWalletView;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    wallet_fetcher: Arc<dyn WalletFetcher + Send + Sync>,
    wallet_view: Arc<HtmlWalletView>,
}

impl ServiceContainer {
    /// Create a container backed by the Ethplorer API
    pub fn new(ethplorer_config: EthplorerConfig) -> Result<Self> {
        let wallet_fetcher = Arc::new(EthplorerWalletFetcher::new(ethplorer_config)?)
            as Arc<dyn WalletFetcher + Send + Sync>;

        Ok(Self::with_fetcher(wallet_fetcher))
    }

    /// Create a container around an existing fetcher
    pub fn with_fetcher(wallet_fetcher: Arc<dyn WalletFetcher + Send + Sync>) -> Self {
        Self {
            wallet_fetcher,
            wallet_view: Arc::new(HtmlWalletView::new()),
        }
    }

    // Accessor methods

    pub fn wallet_fetcher(&self) -> Arc<dyn WalletFetcher + Send + Sync> {
        self.wallet_fetcher.clone()
    }

    pub fn wallet_interactor(&self) -> Arc<WalletInteractorImpl> {
        Arc::new(WalletInteractorImpl::new(self.wallet_fetcher()))
    }

    pub fn wallet_view(&self) -> Arc<HtmlWalletView> {
        self.wallet_view.clone()
    }
}

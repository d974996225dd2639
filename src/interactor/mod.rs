pub mod wallet_interactor;

pub use wallet_interactor::{parse_wallet_data, WalletInteractor, WalletInteractorImpl};

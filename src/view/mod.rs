pub mod wallet_view;

pub use wallet_view::{HtmlWalletView, WalletView};

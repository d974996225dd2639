use std::time::Duration;

use eth_wallet_viewer::{
    Address, Config, EthplorerWalletFetcher, WalletError, WalletFetcher, WalletInteractor,
    WalletInteractorImpl,
};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ADDRESS: &str = "0x112532B200980Ddee8226023bEbBE2E6884C31e2";
const API_KEY: &str = "test-key";

fn address_info_path() -> String {
    format!("/getAddressInfo/{}/", ADDRESS)
}

fn wallet_json() -> Value {
    json!({
        "address": ADDRESS.to_lowercase(),
        "ETH": { "balance": 2, "price": { "rate": 1000 } },
        "countTxs": 12,
        "tokens": [
            {
                "rawBalance": "1500000000000000000",
                "tokenInfo": {
                    "address": "0x0000000000000000000000000000000000000001",
                    "name": "Wrapped Test",
                    "symbol": "WTST",
                    "decimals": "18",
                    "price": { "rate": "2.5", "currency": "USD" },
                    "totalSupply": "1000000000000000000000"
                }
            },
            {
                "rawBalance": "1",
                "tokenInfo": {
                    "name": "Claim at gift.com",
                    "symbol": "GIFT",
                    "decimals": "0",
                    "price": { "rate": "100" },
                    "totalSupply": "1000"
                }
            },
            {
                "rawBalance": "1000",
                "tokenInfo": {
                    "name": "No Decimals",
                    "symbol": "NOD",
                    "price": { "rate": "1" },
                    "totalSupply": "1000"
                }
            }
        ]
    })
}

fn fetcher_for(server: &MockServer, timeout: Duration) -> Arc<EthplorerWalletFetcher> {
    let config = Config::new(&server.uri(), API_KEY, timeout);
    Arc::new(EthplorerWalletFetcher::new(config).unwrap())
}

#[tokio::test]
async fn fetches_address_info_with_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(address_info_path()))
        .and(query_param("apiKey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_json()))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, Duration::from_secs(5));
    let address: Address = ADDRESS.parse().unwrap();
    let body = fetcher.fetch_address_info(&address).await.unwrap();

    assert_eq!(body["ETH"]["balance"], 2);
}

#[tokio::test]
async fn pipeline_filters_spam_and_skips_malformed_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(address_info_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_json()))
        .mount(&server)
        .await;

    let interactor = WalletInteractorImpl::new(fetcher_for(&server, Duration::from_secs(5)));
    let snapshot = interactor.get_wallet_data(ADDRESS).await.unwrap();

    assert_eq!(snapshot.tokens.len(), 2);
    assert_eq!(snapshot.tokens[0].symbol, "ETH");
    assert_eq!(snapshot.tokens[0].usd_value, "2000");
    assert_eq!(snapshot.tokens[1].name, "Wrapped Test");
    assert_eq!(snapshot.tokens[1].balance, "1.5");
    assert_eq!(snapshot.tokens[1].usd_value, "3.75");
    assert_eq!(snapshot.total_usd_value, "2003.75");
    assert_eq!(snapshot.spam_filtered, 1);
    assert_eq!(snapshot.malformed_skipped, 1);
}

#[tokio::test]
async fn identical_responses_give_identical_snapshots() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(address_info_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_json()))
        .expect(2)
        .mount(&server)
        .await;

    let interactor = WalletInteractorImpl::new(fetcher_for(&server, Duration::from_secs(5)));
    let first = interactor.get_wallet_data(ADDRESS).await.unwrap();
    let second = interactor.get_wallet_data(ADDRESS).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn timeout_is_reported_as_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(address_info_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(wallet_json())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let interactor = WalletInteractorImpl::new(fetcher_for(&server, Duration::from_millis(200)));
    let err = interactor.get_wallet_data(ADDRESS).await.unwrap_err();

    assert!(matches!(err, WalletError::FetchUnavailable(_)));
}

#[tokio::test]
async fn error_status_is_reported_as_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(address_info_path()))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "code": 1, "message": "Invalid API key" }
        })))
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, Duration::from_secs(5));
    let address: Address = ADDRESS.parse().unwrap();
    let err = fetcher.fetch_address_info(&address).await.unwrap_err();

    assert!(matches!(err, WalletError::FetchUnavailable(_)));
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn error_payload_with_success_status_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(address_info_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "code": 104, "message": "Invalid address format" }
        })))
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, Duration::from_secs(5));
    let address: Address = ADDRESS.parse().unwrap();
    let err = fetcher.fetch_address_info(&address).await.unwrap_err();

    assert!(matches!(err, WalletError::FetchUnavailable(_)));
}

#[tokio::test]
async fn non_json_body_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(address_info_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, Duration::from_secs(5));
    let address: Address = ADDRESS.parse().unwrap();
    let err = fetcher.fetch_address_info(&address).await.unwrap_err();

    assert!(matches!(err, WalletError::FetchUnavailable(_)));
}

#[tokio::test]
async fn connection_failure_is_unavailable() {
    let config = Config::new("http://127.0.0.1:1/", API_KEY, Duration::from_secs(2));
    let fetcher = EthplorerWalletFetcher::new(config).unwrap();
    let address: Address = ADDRESS.parse().unwrap();

    let err = fetcher.fetch_address_info(&address).await.unwrap_err();
    assert!(matches!(err, WalletError::FetchUnavailable(_)));
}

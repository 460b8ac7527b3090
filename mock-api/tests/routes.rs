use std::net::SocketAddr;
use std::time::{Duration, Instant};

use revdash_common::api::decode;
use revdash_common::transaction::{Transaction, TransactionType};
use revdash_common::user::User;
use revdash_common::wallet::Wallet;
use revdash_mock_api::{router, AppState, Endpoint, Fixtures, ServeOptions};

/// Binds an ephemeral port and serves the router in the background.
async fn spawn_server(options: ServeOptions) -> String {
    let state = AppState::new(Fixtures::builtin().unwrap(), options);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn serves_wallet() {
    let base = spawn_server(ServeOptions::default()).await;
    let wallet: Wallet = reqwest::get(format!("{base}/wallet"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(wallet.balance, Some(750.56));
    assert_eq!(wallet.total_revenue, Some(1_200_000.0));
    assert_eq!(wallet.currency(), "USD");
}

#[tokio::test]
async fn serves_transactions_with_both_types() {
    let base = spawn_server(ServeOptions::default()).await;
    let body = reqwest::get(format!("{base}/transactions"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let txs: Vec<Transaction> = decode("transactions", &body).unwrap();
    assert!(txs.iter().any(|t| t.kind == TransactionType::Deposit));
    assert!(txs.iter().any(|t| t.kind == TransactionType::Withdrawal));
    assert!(txs.iter().all(|t| t.calendar_date().is_some()));
}

#[tokio::test]
async fn serves_user() {
    let base = spawn_server(ServeOptions::default()).await;
    let user: User = reqwest::get(format!("{base}/user"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(user.initials(), "OJ");
}

#[tokio::test]
async fn empty_mode_returns_empty_array() {
    let base = spawn_server(ServeOptions {
        empty: true,
        ..Default::default()
    })
    .await;
    let txs: Vec<Transaction> = reqwest::get(format!("{base}/transactions"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(txs.is_empty());
}

#[tokio::test]
async fn failing_endpoint_returns_500_and_others_still_work() {
    let base = spawn_server(ServeOptions {
        failing: [Endpoint::Wallet].into_iter().collect(),
        ..Default::default()
    })
    .await;

    let resp = reqwest::get(format!("{base}/wallet")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 500);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "/wallet is configured to fail");

    let resp = reqwest::get(format!("{base}/user")).await.unwrap();
    assert!(resp.status().is_success());
}

#[tokio::test]
async fn latency_delays_response() {
    let base = spawn_server(ServeOptions {
        latency: Duration::from_millis(150),
        ..Default::default()
    })
    .await;
    let started = Instant::now();
    let resp = reqwest::get(format!("{base}/user")).await.unwrap();
    assert!(resp.status().is_success());
    assert!(started.elapsed() >= Duration::from_millis(150));
}

#[tokio::test]
async fn health_reports_state() {
    let base = spawn_server(ServeOptions {
        empty: true,
        failing: [Endpoint::User].into_iter().collect(),
        ..Default::default()
    })
    .await;
    let health: serde_json::Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["transactions"], 0);
    assert_eq!(health["failing"][0], "/user");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let base = spawn_server(ServeOptions::default()).await;
    let resp = reqwest::Client::new()
        .get(format!("{base}/wallet"))
        .header("Origin", "http://localhost:8080")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

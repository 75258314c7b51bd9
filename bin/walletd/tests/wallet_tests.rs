mod common;

use axum_test::TestServer;
use common::fixtures;
use http::StatusCode;
use serde_json::json;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_balance_read_initializes_zero_row() {
    let state = common::create_test_app_state();
    {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);
        fixtures::seed_wallet(&mut conn, 7, 1);
        assert!(!fixtures::balance_row_exists(&mut conn, 7));
    }
    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server.get("/wallets/7/balance").await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["walletId"], json!(7));
    assert_eq!(body["balance"], json!(0));

    // the zero row was created lazily by the read
    let mut conn = state.db.get().expect("Failed to get DB connection");
    assert!(fixtures::balance_row_exists(&mut conn, 7));
}

#[tokio::test]
#[serial]
async fn test_balance_reflects_ledger_operations() {
    let state = common::create_test_app_state();
    {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);
        fixtures::seed_wallet(&mut conn, 7, 1);
    }
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    server
        .post("/wallets/7/topup")
        .json(&json!({"amount": 500, "referenceId": "top_1"}))
        .await
        .assert_status(StatusCode::OK);

    let response = server.get("/wallets/7/balance").await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["balance"], json!(500));
}

#[tokio::test]
#[serial]
async fn test_balance_unknown_wallet() {
    let state = common::create_test_app_state();
    {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);
    }
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/wallets/9999/balance").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn test_wallet_meta() {
    let state = common::create_test_app_state();
    {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);
        fixtures::seed_wallet(&mut conn, 7, 42);
    }
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/wallets/7").await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["walletId"], json!(7));
    assert_eq!(body["userId"], json!(42));
    assert_eq!(body["asset"]["code"], json!("USD"));
    assert_eq!(body["asset"]["name"], json!("US Dollar"));
}

#[tokio::test]
#[serial]
async fn test_wallet_meta_unknown_wallet() {
    let state = common::create_test_app_state();
    {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);
    }
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/wallets/9999").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn test_health_check() {
    let state = common::create_test_app_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], json!("API is healthy"));
}

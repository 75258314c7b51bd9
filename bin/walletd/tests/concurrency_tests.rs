mod common;

use common::fixtures;
use serial_test::serial;
use walletd_core::repositories::ledger_repository::LedgerRepository;
use walletd_core::services::ledger_service::LedgerService;
use walletd_primitives::error::ApiError;
use walletd_primitives::models::LedgerRequest;

fn request(amount: i64, reference_id: &str) -> LedgerRequest {
    LedgerRequest {
        amount,
        reference_id: reference_id.to_string(),
        note: None,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
#[serial]
async fn test_contended_spends_serialize() {
    let state = common::create_test_app_state();
    {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);
        fixtures::seed_wallet(&mut conn, 7, 1);
    }

    LedgerService::topup(&state, 7, request(500, "fund_1"))
        .await
        .expect("Funding topup failed");

    // 5 concurrent spends of 200 against a balance of 500: the wallet
    // row lock admits them one at a time, so exactly 2 can succeed.
    let mut handles = Vec::new();
    for i in 0..5 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            LedgerService::spend(&state, 7, request(200, &format!("spd_{i}"))).await
        }));
    }

    let mut succeeded = 0;
    let mut insufficient = 0;
    for handle in handles {
        match handle.await.expect("Spend task panicked") {
            Ok(_) => succeeded += 1,
            Err(ApiError::InsufficientBalance) => insufficient += 1,
            Err(e) => panic!("Unexpected error: {e}"),
        }
    }

    assert_eq!(succeeded, 2);
    assert_eq!(insufficient, 3);

    let mut conn = state.db.get().expect("Failed to get DB connection");
    assert_eq!(fixtures::stored_balance(&mut conn, 7), 100);
    assert_eq!(LedgerRepository::sum_for_wallet(&mut conn, 7).unwrap(), 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
#[serial]
async fn test_concurrent_retries_apply_once() {
    let state = common::create_test_app_state();
    {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);
        fixtures::seed_wallet(&mut conn, 7, 1);
    }

    // 6 racing requests with the same reference: the idempotency probe
    // runs under the wallet lock, so exactly one writes.
    let mut handles = Vec::new();
    for _ in 0..6 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            LedgerService::topup(&state, 7, request(500, "retry_1")).await
        }));
    }

    let mut applied = 0;
    let mut replayed = 0;
    for handle in handles {
        let response = handle
            .await
            .expect("Topup task panicked")
            .expect("Topup failed");
        if response.idempotent {
            replayed += 1;
        } else {
            applied += 1;
        }
        assert_eq!(response.balance, 500);
    }

    assert_eq!(applied, 1);
    assert_eq!(replayed, 5);

    let mut conn = state.db.get().expect("Failed to get DB connection");
    assert_eq!(fixtures::entry_count(&mut conn, 7, "retry_1"), 1);
    assert_eq!(fixtures::stored_balance(&mut conn, 7), 500);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
#[serial]
async fn test_operations_on_different_wallets_run_concurrently() {
    let state = common::create_test_app_state();
    {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);
        fixtures::seed_wallet(&mut conn, 7, 1);
        fixtures::seed_wallet(&mut conn, 8, 2);
    }

    let mut handles = Vec::new();
    for wallet_id in [7_i64, 8] {
        for i in 0..4 {
            let state = state.clone();
            handles.push(tokio::spawn(async move {
                LedgerService::topup(&state, wallet_id, request(100, &format!("w{wallet_id}_t{i}")))
                    .await
            }));
        }
    }
    for handle in handles {
        handle
            .await
            .expect("Topup task panicked")
            .expect("Topup failed");
    }

    let mut conn = state.db.get().expect("Failed to get DB connection");
    assert_eq!(fixtures::stored_balance(&mut conn, 7), 400);
    assert_eq!(fixtures::stored_balance(&mut conn, 8), 400);
    assert_eq!(LedgerRepository::sum_for_wallet(&mut conn, 7).unwrap(), 400);
    assert_eq!(LedgerRepository::sum_for_wallet(&mut conn, 8).unwrap(), 400);
}

use std::{
    collections::HashSet,
    sync::{Arc, Barrier},
    thread,
};

use chrono::{Duration, Utc};
use engine::{Engine, EngineError, Transaction, TransactionStatus};

fn owners(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn two_of_three_walkthrough() {
    let engine = Engine::builder().build();
    let wallet = engine
        .new_wallet("Household", &owners(&["A", "B", "C"]), 1000, 2)
        .unwrap();

    let tx = engine
        .create_transaction(&wallet.id, 500, "groceries", "A")
        .unwrap();
    assert_eq!(tx.approvers, vec!["A"]);
    assert_eq!(tx.status, TransactionStatus::Pending);

    let tx = engine.approve_transaction(&tx.id, "B").unwrap();
    assert_eq!(tx.approvers, vec!["A", "B"]);
    assert_eq!(tx.status, TransactionStatus::Approved);

    let tx = engine.approve_transaction(&tx.id, "C").unwrap();
    assert_eq!(tx.approvers, vec!["A", "B"]);
    assert_eq!(tx.status, TransactionStatus::Approved);

    assert_eq!(engine.transaction(&tx.id).unwrap(), tx);
}

#[test]
fn daily_limit_boundary_on_single_owner_wallet() {
    let engine = Engine::builder().build();
    let wallet = engine
        .new_wallet("Solo", &owners(&["alice"]), 2500, 1)
        .unwrap();

    let at_limit = engine
        .create_transaction(&wallet.id, 2500, "", "alice")
        .unwrap();
    assert_eq!(at_limit.status, TransactionStatus::Approved);

    let over_limit = engine
        .create_transaction(&wallet.id, 2501, "", "alice")
        .unwrap();
    assert_eq!(over_limit.status, TransactionStatus::Pending);
    assert!(over_limit.approvers.is_empty());

    let approved = engine.approve_transaction(&over_limit.id, "alice").unwrap();
    assert_eq!(approved.status, TransactionStatus::Approved);
}

#[test]
fn unknown_ids_are_not_found() {
    let engine = Engine::builder().build();
    assert!(matches!(engine.wallet("nope"), Err(EngineError::NotFound(_))));
    assert!(matches!(engine.transaction("nope"), Err(EngineError::NotFound(_))));
    assert!(matches!(
        engine.create_transaction("nope", 10, "", "alice"),
        Err(EngineError::NotFound(_))
    ));
    assert!(matches!(
        engine.approve_transaction("nope", "alice"),
        Err(EngineError::NotFound(_))
    ));
    assert!(engine.list_transactions("nope").is_empty());
}

#[test]
fn rejected_calls_leave_the_store_usable() {
    let engine = Engine::builder().build();
    let wallet = engine
        .new_wallet("Shared", &owners(&["alice", "bob"]), 0, 2)
        .unwrap();

    assert!(matches!(
        engine.create_transaction(&wallet.id, 0, "", "alice"),
        Err(EngineError::InvalidAmount(_))
    ));
    assert!(engine.list_transactions(&wallet.id).is_empty());

    let tx = engine
        .create_transaction(&wallet.id, 100, "", "alice")
        .unwrap();
    assert!(matches!(
        engine.approve_transaction(&tx.id, "mallory"),
        Err(EngineError::NotAuthorized(_))
    ));
    assert_eq!(engine.transaction(&tx.id).unwrap(), tx);

    let tx = engine.approve_transaction(&tx.id, "alice").unwrap();
    let tx = engine.approve_transaction(&tx.id, "bob").unwrap();
    assert_eq!(tx.status, TransactionStatus::Approved);
}

#[test]
fn executed_transactions_ignore_late_approvals() {
    let engine = Engine::builder().build();
    let wallet = engine
        .new_wallet("Shared", &owners(&["alice", "bob"]), 0, 1)
        .unwrap();
    let tx = engine
        .create_transaction(&wallet.id, 100, "", "alice")
        .unwrap();

    let mut executed = engine.approve_transaction(&tx.id, "alice").unwrap();
    executed.status = TransactionStatus::Executed;
    engine.store().update_transaction(executed.clone());

    let after = engine.approve_transaction(&tx.id, "bob").unwrap();
    assert_eq!(after, executed);
}

#[test]
fn transactions_are_listed_per_wallet_oldest_first() {
    let engine = Engine::builder().build();
    let first = engine
        .new_wallet("First", &owners(&["alice"]), 0, 1)
        .unwrap();
    let second = engine
        .new_wallet("Second", &owners(&["bob"]), 0, 1)
        .unwrap();

    let base = Utc::now();
    // Inserted out of order; the listing must follow created_at.
    for (label, offset) in [("b", 20), ("c", 30), ("a", 10)] {
        let mut tx =
            Transaction::new(first.id.clone(), 1, label.to_string(), "alice".to_string()).unwrap();
        tx.created_at = base + Duration::seconds(offset);
        engine.store().create_transaction(tx);
    }
    engine
        .create_transaction(&second.id, 10, "", "bob")
        .unwrap();

    let memos: Vec<String> = engine
        .list_transactions(&first.id)
        .into_iter()
        .map(|tx| tx.memo)
        .collect();
    assert_eq!(memos, vec!["a", "b", "c"]);
    assert_eq!(engine.list_wallets().len(), 2);
}

#[test]
fn memo_is_stored_verbatim() {
    let engine = Engine::builder().build();
    let wallet = engine
        .new_wallet("Flat", &owners(&["alice"]), 0, 1)
        .unwrap();

    let tx = engine
        .create_transaction(&wallet.id, 100, "  rent\n", "alice")
        .unwrap();
    assert_eq!(tx.memo, "  rent\n");
    assert_eq!(engine.transaction(&tx.id).unwrap().memo, "  rent\n");
}

#[test]
fn concurrent_approvals_are_not_lost() {
    const OWNERS: usize = 16;

    let names: Vec<String> = (0..OWNERS).map(|i| format!("owner-{i}")).collect();
    let engine = Engine::builder().build();
    let wallet = engine
        .new_wallet("Board", &names, 0, OWNERS as i64)
        .unwrap();
    let tx = engine
        .create_transaction(&wallet.id, 1_000_000, "acquisition", "owner-0")
        .unwrap();
    assert!(tx.approvers.is_empty());

    let barrier = Barrier::new(OWNERS);
    thread::scope(|scope| {
        for name in &names {
            let (engine, barrier, tx_id) = (&engine, &barrier, &tx.id);
            scope.spawn(move || {
                barrier.wait();
                engine.approve_transaction(tx_id, name).unwrap();
            });
        }
    });

    let tx = engine.transaction(&tx.id).unwrap();
    assert_eq!(tx.approvers.len(), OWNERS);
    assert_eq!(
        tx.approvers.iter().collect::<HashSet<_>>().len(),
        OWNERS,
        "approvers must be distinct"
    );
    assert_eq!(tx.status, TransactionStatus::Approved);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_approvals_from_tasks_are_serialized() {
    const OWNERS: usize = 8;

    let names: Vec<String> = (0..OWNERS).map(|i| format!("owner-{i}")).collect();
    let engine = Arc::new(Engine::builder().build());
    let wallet = engine
        .new_wallet("Board", &names, 0, OWNERS as i64)
        .unwrap();
    let tx = engine
        .create_transaction(&wallet.id, 42, "", "owner-0")
        .unwrap();

    let mut tasks = tokio::task::JoinSet::new();
    // Each owner approves twice to mix no-ops into the race.
    for name in names.iter().chain(names.iter()).cloned() {
        let engine = Arc::clone(&engine);
        let tx_id = tx.id.clone();
        tasks.spawn(async move { engine.approve_transaction(&tx_id, &name) });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    let tx = engine.transaction(&tx.id).unwrap();
    assert_eq!(tx.approvers.len(), OWNERS);
    assert_eq!(tx.status, TransactionStatus::Approved);
}

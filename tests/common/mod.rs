#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use copboard::environment::client::mock::MockClient;
use copboard::environment::{AppConfig, Environment, Session};
use copboard::store::{Action, AppState, Store};
use serde_json::{json, Value};

pub const EMAIL: &str = "officer@example.com";

pub fn environment(client: Arc<MockClient>) -> Environment {
    copboard::logging::init();
    Environment::new(
        client,
        AppConfig::new("http://workflow", "http://data", "http://forms"),
        Session::new("token-1", EMAIL),
    )
}

pub fn shift_entity() -> Value {
    json!([{
        "shiftminutes": 30,
        "shifthours": 8,
        "startdatetime": "2024-05-01T08:00:00Z",
        "teamid": "team-1",
        "locationid": "loc-1",
        "phone": "07700900000"
    }])
}

/// Polls the store until `predicate` holds. Run under paused tokio time so
/// pipeline delays are fast-forwarded instead of slept through.
pub async fn settle(store: &Store, mut predicate: impl FnMut(&AppState) -> bool) {
    for _ in 0..4000 {
        if predicate(&store.state()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("state never settled: {:#?}", store.state());
}

/// Waits for the next action matching `predicate` on a store subscription.
pub async fn await_action(
    actions: &flume::Receiver<Action>,
    mut predicate: impl FnMut(&Action) -> bool,
) -> Action {
    loop {
        let action = tokio::time::timeout(Duration::from_secs(120), actions.recv_async())
            .await
            .expect("timed out waiting for an action")
            .expect("store dropped");
        if predicate(&action) {
            return action;
        }
    }
}

//! Stub explorer backend for router and poller tests: an axum app on an
//! ephemeral port standing in for the real API.

use axum::Router;
use serde_json::{json, Value};

pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn block_json(height: i64) -> Value {
    json!({
        "hash": format!("hash{}", height),
        "height": height,
        "time": 1_495_000_000 + height,
        "num_transactions": 2,
        "size": 512,
        "difficulty": "1.5",
        "total": 12.5
    })
}

pub fn transaction_json(txid: &str) -> Value {
    json!({
        "txid": txid,
        "time": 1_495_000_000,
        "blocktime": 1_495_000_000,
        "blockhash": "hash1",
        "total": 3.25
    })
}

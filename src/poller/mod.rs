use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time;
use tracing::{error, info};

use crate::backend::{Block, ExplorerApi, NetworkStatus, Transaction};
use crate::metrics;

/// Everything the dashboard shows, as of the last successful poll of each
/// endpoint. Fetched data is replaced wholesale and the previous contents
/// discarded; nothing here is persisted.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub status: Option<NetworkStatus>,
    pub latest_blocks: Vec<Block>,
    pub latest_transactions: Vec<Transaction>,
}

pub type SharedSnapshot = Arc<RwLock<Snapshot>>;

impl Snapshot {
    pub fn shared() -> SharedSnapshot {
        Arc::new(RwLock::new(Self::default()))
    }
}

/// Periodic refresh of the display snapshot. The two timers run as
/// independent tasks and are not synchronized with each other or with
/// in-flight requests; a slow response can overwrite a newer one, which is
/// accepted for a best-effort dashboard.
pub struct DashboardPoller {
    client: ExplorerApi,
    snapshot: SharedSnapshot,
    blocks_interval: Duration,
    transactions_interval: Duration,
}

impl DashboardPoller {
    pub fn new(
        client: ExplorerApi,
        snapshot: SharedSnapshot,
        blocks_interval: Duration,
        transactions_interval: Duration,
    ) -> Self {
        Self {
            client,
            snapshot,
            blocks_interval,
            transactions_interval,
        }
    }

    pub fn start(self: Arc<Self>) {
        info!(
            "Starting dashboard pollers: blocks every {:?}, transactions every {:?}",
            self.blocks_interval, self.transactions_interval
        );

        let poller = Arc::clone(&self);
        tokio::spawn(async move {
            let mut interval = time::interval(poller.blocks_interval);
            loop {
                interval.tick().await;
                poller.refresh_latest_blocks().await;
            }
        });

        tokio::spawn(async move {
            let mut interval = time::interval(self.transactions_interval);
            loop {
                interval.tick().await;
                self.refresh_latest_transactions().await;
            }
        });
    }

    /// One latest-blocks tick. A failure only logs; the previous contents
    /// stay on display until a tick succeeds.
    pub async fn refresh_latest_blocks(&self) {
        match self.client.latest_blocks().await {
            Ok(blocks) => {
                metrics::record_poll_success("blocks_latest");
                self.snapshot.write().await.latest_blocks = blocks;
            }
            Err(e) => {
                metrics::record_poll_failure("blocks_latest");
                error!("Failed to refresh latest blocks: {:?}", e);
            }
        }
    }

    /// One latest-transactions tick, same replace-wholesale strategy.
    pub async fn refresh_latest_transactions(&self) {
        match self.client.latest_transactions().await {
            Ok(transactions) => {
                metrics::record_poll_success("transactions_latest");
                self.snapshot.write().await.latest_transactions = transactions;
            }
            Err(e) => {
                metrics::record_poll_failure("transactions_latest");
                error!("Failed to refresh latest transactions: {:?}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::test_helpers::{block_json, spawn_backend, transaction_json};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    fn stale_block(height: i64) -> Block {
        Block {
            hash: format!("stale{}", height),
            height,
            time: 1_400_000_000,
            num_transactions: 1,
            size: 300,
            difficulty: "1".to_string(),
            total: 1.0,
        }
    }

    async fn poller_against(backend: Router) -> (DashboardPoller, SharedSnapshot) {
        let base_url = spawn_backend(backend).await;
        let client = ExplorerApi::new(base_url, Duration::from_secs(2)).unwrap();
        let snapshot = Snapshot::shared();
        let poller = DashboardPoller::new(
            client,
            Arc::clone(&snapshot),
            Duration::from_secs(60),
            Duration::from_secs(1),
        );
        (poller, snapshot)
    }

    #[tokio::test]
    async fn blocks_tick_replaces_contents_wholesale() {
        let backend = Router::new().route(
            "/blocks/latest",
            get(|| async { Json(json!([block_json(2), block_json(3)])) }),
        );
        let (poller, snapshot) = poller_against(backend).await;
        snapshot.write().await.latest_blocks = vec![stale_block(1)];

        poller.refresh_latest_blocks().await;

        let heights: Vec<i64> = snapshot
            .read()
            .await
            .latest_blocks
            .iter()
            .map(|b| b.height)
            .collect();
        assert_eq!(heights, vec![2, 3]);
    }

    #[tokio::test]
    async fn transactions_tick_replaces_contents_wholesale() {
        let backend = Router::new().route(
            "/transactions/latest",
            get(|| async { Json(json!([transaction_json("aa"), transaction_json("bb")])) }),
        );
        let (poller, snapshot) = poller_against(backend).await;

        poller.refresh_latest_transactions().await;

        let txids: Vec<String> = snapshot
            .read()
            .await
            .latest_transactions
            .iter()
            .map(|t| t.txid.clone())
            .collect();
        assert_eq!(txids, vec!["aa", "bb"]);
    }

    #[tokio::test]
    async fn failed_tick_keeps_previous_contents() {
        // No routes: every request 404s.
        let (poller, snapshot) = poller_against(Router::new()).await;
        snapshot.write().await.latest_blocks = vec![stale_block(7)];

        poller.refresh_latest_blocks().await;

        assert_eq!(snapshot.read().await.latest_blocks[0].height, 7);
    }
}

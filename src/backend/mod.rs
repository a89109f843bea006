pub mod types;

pub use types::{Block, ClientInfo, NetworkStatus, SearchHit, Transaction};

use anyhow::Result;
use reqwest::Client;
use std::time::{Duration, Instant};

use crate::metrics;

/// Read-only client for the explorer backend API.
#[derive(Debug, Clone)]
pub struct ExplorerApi {
    client: Client,
    base_url: String,
}

impl ExplorerApi {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn network_status(&self) -> Result<NetworkStatus> {
        self.get_json("network_status", "/network/status", &[]).await
    }

    pub async fn latest_blocks(&self) -> Result<Vec<Block>> {
        self.get_json("blocks_latest", "/blocks/latest", &[]).await
    }

    pub async fn latest_transactions(&self) -> Result<Vec<Transaction>> {
        self.get_json("transactions_latest", "/transactions/latest", &[])
            .await
    }

    /// One page of the block listing, `num` blocks starting `offset` blocks
    /// behind the tip.
    pub async fn blocks(&self, num: i64, offset: i64) -> Result<Vec<Block>> {
        self.get_json("blocks_page", "/blocks", &[("num", num), ("offset", offset)])
            .await
    }

    /// Free-text lookup. The backend answers `{ "url": ... }` on a hit and a
    /// plain HTTP error on a miss, which surfaces here as `Err`.
    pub async fn search(&self, query: &str) -> Result<SearchHit> {
        self.get_json("search", &format!("/search/{}", query), &[])
            .await
    }

    pub async fn transaction(&self, txid: &str) -> Result<Transaction> {
        self.get_json("transaction", &format!("/transactions/{}", txid), &[])
            .await
    }

    pub async fn block(&self, identifier: &str) -> Result<Block> {
        self.get_json("block", &format!("/blocks/{}", identifier), &[])
            .await
    }

    pub async fn block_transactions(&self, identifier: &str) -> Result<Vec<Transaction>> {
        self.get_json(
            "block_transactions",
            &format!("/blocks/{}/transactions", identifier),
            &[],
        )
        .await
    }

    async fn get_json<T>(&self, endpoint: &'static str, path: &str, query: &[(&str, i64)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let started = Instant::now();
        let mut request = self.client.get(format!("{}{}", self.base_url, path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let value = request
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        metrics::record_fetch_duration(endpoint, started.elapsed());
        Ok(value)
    }
}

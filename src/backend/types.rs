use serde::{Deserialize, Serialize};

/// Block as served by the explorer API. The backend emits more fields than the
/// dashboard shows; unknown ones are ignored and absent ones fall back to
/// defaults so a newer or older backend doesn't break rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    pub hash: String,
    pub height: i64,
    /// Unix seconds.
    pub time: i64,
    pub num_transactions: i64,
    pub size: i64,
    pub difficulty: String,
    pub total: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub txid: String,
    pub time: Option<i64>,
    pub blocktime: Option<i64>,
    pub blockhash: Option<String>,
    pub total: f64,
}

/// `/network/status` payload: the indexer's own height plus whatever the
/// node client reported through `getinfo`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkStatus {
    pub height: i64,
    pub client: ClientInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientInfo {
    pub blocks: i64,
    pub version: Option<i64>,
    pub connections: Option<i64>,
    pub difficulty: Option<String>,
    pub balance: Option<String>,
}

/// Successful search lookups answer with the page to navigate to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
}

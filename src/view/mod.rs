pub mod format;
mod pager;

pub use pager::Pager;

use chrono::{DateTime, Utc};

use crate::backend::{Block, NetworkStatus, Transaction};
use format::Countdown;

/// Node information panel: sync state plus the countdown to the halving date.
pub struct StatusView {
    pub height: i64,
    pub client_blocks: i64,
    pub client_version: String,
    pub connections: String,
    pub sync_percentage: String,
    pub synced: bool,
    pub countdown: Countdown,
}

impl StatusView {
    pub fn new(status: &NetworkStatus, halving_timestamp_ms: i64, now: DateTime<Utc>) -> Self {
        Self {
            height: status.height,
            client_blocks: status.client.blocks,
            client_version: status
                .client
                .version
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
            connections: status
                .client
                .connections
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
            sync_percentage: format::sync_percentage(status.height, status.client.blocks),
            synced: format::is_synced(status.height, status.client.blocks),
            countdown: format::countdown_until(halving_timestamp_ms, now.timestamp_millis()),
        }
    }
}

pub struct BlockRow {
    pub height: i64,
    pub hash: String,
    pub age: String,
    pub num_transactions: i64,
    pub total: f64,
}

impl BlockRow {
    pub fn new(block: &Block, now: DateTime<Utc>) -> Self {
        Self {
            height: block.height,
            hash: block.hash.clone(),
            age: format::relative_age(block.time, now),
            num_transactions: block.num_transactions,
            total: block.total,
        }
    }
}

pub struct TransactionRow {
    pub txid: String,
    pub txid_short: String,
    pub time: String,
    pub total: f64,
}

impl TransactionRow {
    /// Row for the latest-transactions table, with a relative age.
    pub fn latest(tx: &Transaction, now: DateTime<Utc>) -> Self {
        Self {
            txid: tx.txid.clone(),
            txid_short: format::short_txid(&tx.txid),
            time: tx
                .time
                .map(|t| format::relative_age(t, now))
                .unwrap_or_else(|| "-".to_string()),
            total: tx.total,
        }
    }

    /// Row for a block-detail listing, with an absolute timestamp.
    pub fn detailed(tx: &Transaction) -> Self {
        Self {
            txid: tx.txid.clone(),
            txid_short: format::short_txid(&tx.txid),
            time: tx
                .time
                .or(tx.blocktime)
                .map(format::format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
            total: tx.total,
        }
    }
}

/// Transaction-detail page, with absolute timestamps the way the original
/// explorer formats them.
pub struct TransactionDetails {
    pub txid: String,
    pub time: String,
    pub blocktime: String,
    pub blockhash: Option<String>,
    pub total: f64,
}

impl TransactionDetails {
    pub fn new(tx: &Transaction) -> Self {
        Self {
            txid: tx.txid.clone(),
            time: tx
                .time
                .map(format::format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
            blocktime: tx
                .blocktime
                .map(format::format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
            blockhash: tx.blockhash.clone(),
            total: tx.total,
        }
    }
}

pub struct BlockDetails {
    pub height: i64,
    pub hash: String,
    pub time: String,
    pub num_transactions: i64,
    pub size: i64,
    pub difficulty: String,
    pub total: f64,
}

impl BlockDetails {
    pub fn new(block: &Block) -> Self {
        Self {
            height: block.height,
            hash: block.hash.clone(),
            time: format::format_timestamp(block.time),
            num_transactions: block.num_transactions,
            size: block.size,
            difficulty: block.difficulty.clone(),
            total: block.total,
        }
    }
}

/// Plain-field view of a `Pager` for the templates.
pub struct PagerView {
    pub older_offset: i64,
    pub newer_offset: i64,
    pub older_disabled: bool,
    pub newer_disabled: bool,
}

impl From<&Pager> for PagerView {
    fn from(pager: &Pager) -> Self {
        Self {
            older_offset: pager.older_offset(),
            newer_offset: pager.newer_offset(),
            older_disabled: pager.older_disabled(),
            newer_disabled: pager.newer_disabled(),
        }
    }
}

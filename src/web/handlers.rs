use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{header::REFERER, HeaderMap},
    response::{Html, Redirect},
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

use super::templates::{
    BlockDetailsTemplate, BrowseBlocksTemplate, IndexTemplate, TransactionDetailsTemplate,
};
use super::types::WebError;
use super::AppState;
use crate::view::{
    BlockDetails, BlockRow, Pager, PagerView, StatusView, TransactionDetails, TransactionRow,
};

/// Dashboard: node information, sync status, halving countdown and the two
/// latest tables, all rendered from the polled snapshot.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let now = Utc::now();
    let snapshot = state.snapshot.read().await;

    let page = IndexTemplate {
        current_path: "/",
        status: snapshot
            .status
            .as_ref()
            .map(|s| StatusView::new(s, state.halving_timestamp_ms, now)),
        blocks: snapshot
            .latest_blocks
            .iter()
            .map(|b| BlockRow::new(b, now))
            .collect(),
        transactions: snapshot
            .latest_transactions
            .iter()
            .map(|t| TransactionRow::latest(t, now))
            .collect(),
    };

    Ok(Html(page.render()?))
}

#[derive(Deserialize)]
pub struct BrowseParams {
    #[serde(default)]
    pub offset: i64,
}

/// Paginated block browsing. Each navigation re-fetches one page from the
/// backend; a failed fetch logs and renders the placeholder row.
pub async fn browse_blocks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BrowseParams>,
) -> Result<Html<String>, WebError> {
    let now = Utc::now();
    // Without a known chain height the older boundary can't be computed, so
    // the link stays enabled, as on a dashboard that never got its status.
    let chain_height = state
        .snapshot
        .read()
        .await
        .status
        .as_ref()
        .map(|s| s.height)
        .unwrap_or(i64::MAX);
    let pager = Pager::new(params.offset, state.blocks_per_page, chain_height);

    let blocks = match state.api.blocks(state.blocks_per_page, pager.offset()).await {
        Ok(blocks) => blocks.iter().map(|b| BlockRow::new(b, now)).collect(),
        Err(e) => {
            error!("Failed to fetch blocks page at offset {}: {:?}", pager.offset(), e);
            Vec::new()
        }
    };

    let page = BrowseBlocksTemplate {
        current_path: "/blocks/browse",
        blocks,
        pager: PagerView::from(&pager),
    };

    Ok(Html(page.render()?))
}

/// Block-detail page: the block itself plus its transaction listing, fetched
/// once. A missing block is a 404; a failed transaction fetch logs and the
/// listing stays empty.
pub async fn block_details(
    State(state): State<Arc<AppState>>,
    Path(identifier): Path<String>,
) -> Result<Html<String>, WebError> {
    let block = state.api.block(&identifier).await.map_err(|e| {
        error!("Failed to fetch block {}: {:?}", identifier, e);
        WebError::NotFound
    })?;

    let transactions = match state.api.block_transactions(&identifier).await {
        Ok(txs) => txs.iter().map(TransactionRow::detailed).collect(),
        Err(e) => {
            error!("Failed to fetch transactions for block {}: {:?}", identifier, e);
            Vec::new()
        }
    };

    let page = BlockDetailsTemplate {
        current_path: "",
        block: BlockDetails::new(&block),
        transactions,
    };

    Ok(Html(page.render()?))
}

/// Transaction-detail page, the target of txid search hits. A transaction
/// the backend doesn't know is a 404.
pub async fn transaction_details(
    State(state): State<Arc<AppState>>,
    Path(txid): Path<String>,
) -> Result<Html<String>, WebError> {
    let transaction = state.api.transaction(&txid).await.map_err(|e| {
        error!("Failed to fetch transaction {}: {:?}", txid, e);
        WebError::NotFound
    })?;

    let page = TransactionDetailsTemplate {
        current_path: "",
        transaction: TransactionDetails::new(&transaction),
    };

    Ok(Html(page.render()?))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
    headers: HeaderMap,
) -> Redirect {
    try_search(&state, &query, &headers).await
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub async fn search_form(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Redirect {
    try_search(&state, &params.q, &headers).await
}

/// On a hit the backend supplies the URL to navigate to. On a miss nothing
/// happens beyond the log line: the redirect goes back where the request
/// came from.
async fn try_search(state: &AppState, query: &str, headers: &HeaderMap) -> Redirect {
    match state.api.search(query).await {
        Ok(hit) => Redirect::to(&hit.url),
        Err(e) => {
            error!("Search for {:?} failed: {:?}", query, e);
            let back = headers
                .get(REFERER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("/");
            Redirect::to(back)
        }
    }
}

mod handlers;
mod routes;
mod templates;
mod types;

#[cfg(test)]
pub mod test_helpers;

pub use routes::create_router;
pub use types::WebError;

use crate::backend::ExplorerApi;
use crate::poller::SharedSnapshot;

/// Shared handler state: the backend client, the polled snapshot and the
/// display knobs from configuration.
pub struct AppState {
    pub api: ExplorerApi,
    pub snapshot: SharedSnapshot,
    pub blocks_per_page: i64,
    pub halving_timestamp_ms: i64,
}

use askama::Template;

use crate::view::{
    BlockDetails, BlockRow, PagerView, StatusView, TransactionDetails, TransactionRow,
};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub current_path: &'static str,
    pub status: Option<StatusView>,
    pub blocks: Vec<BlockRow>,
    pub transactions: Vec<TransactionRow>,
}

#[derive(Template)]
#[template(path = "browse_blocks.html")]
pub struct BrowseBlocksTemplate {
    pub current_path: &'static str,
    pub blocks: Vec<BlockRow>,
    pub pager: PagerView,
}

#[derive(Template)]
#[template(path = "transaction.html")]
pub struct TransactionDetailsTemplate {
    pub current_path: &'static str,
    pub transaction: TransactionDetails,
}

#[derive(Template)]
#[template(path = "block.html")]
pub struct BlockDetailsTemplate {
    pub current_path: &'static str,
    pub block: BlockDetails,
    pub transactions: Vec<TransactionRow>,
}

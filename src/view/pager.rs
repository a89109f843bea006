/// Page offset state for block browsing. The offset counts blocks back from
/// the chain tip and is carried in the `?offset=` query parameter, so it is
/// clamped on the way in: it never goes negative, and the older/newer links
/// disable at the two boundaries.
#[derive(Debug, Clone, Copy)]
pub struct Pager {
    offset: i64,
    per_page: i64,
    chain_height: i64,
}

impl Pager {
    pub fn new(offset: i64, per_page: i64, chain_height: i64) -> Self {
        Self {
            offset: offset.max(0),
            per_page: per_page.max(1),
            chain_height,
        }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Offset for the "older blocks" link (further from the tip). Saturates
    /// so an absurd query-string offset can't wrap the link negative.
    pub fn older_offset(&self) -> i64 {
        self.offset.saturating_add(self.per_page)
    }

    /// Offset for the "newer blocks" link, clamped at the tip.
    pub fn newer_offset(&self) -> i64 {
        (self.offset - self.per_page).max(0)
    }

    /// Stepping older would move the window past the chain height.
    pub fn older_disabled(&self) -> bool {
        self.older_offset() >= self.chain_height
    }

    /// Already at the tip.
    pub fn newer_disabled(&self) -> bool {
        self.offset <= 0
    }
}

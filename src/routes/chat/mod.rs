pub(crate) mod add;
pub(crate) mod get;

/// Depth of the recent-history window served to clients.
pub(crate) const HISTORY_LIMIT: usize = 20;

//! # Query Pagination
//!
//! Offset pagination for the read-only query surface. Queries walk a
//! deterministic key order (see [`Store::prefix_scan`][crate::Store]),
//! so `(offset, limit)` pages are stable between blocks as long as the
//! underlying set does not change.

use serde::{Deserialize, Serialize};

/// Default page size when a request does not specify one.
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Hard ceiling on page size, to keep query handlers bounded.
pub const MAX_PAGE_LIMIT: usize = 1_000;

/// A pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PageRequest {
    /// Records to skip.
    pub offset: usize,
    /// Records to return; 0 means [`DEFAULT_PAGE_LIMIT`].
    pub limit: usize,
}

impl PageRequest {
    /// The effective limit, clamped to `1..=MAX_PAGE_LIMIT`.
    pub fn effective_limit(&self) -> usize {
        match self.limit {
            0 => DEFAULT_PAGE_LIMIT,
            n => n.min(MAX_PAGE_LIMIT),
        }
    }
}

/// A page of query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The requested slice, in key order.
    pub items: Vec<T>,
    /// Total matching records before pagination.
    pub total: usize,
}

impl<T> PageResponse<T> {
    /// Apply `page` to a fully collected result set.
    ///
    /// Queries here operate on module-sized sets (accounts, licenses), so
    /// collecting before slicing is acceptable; the scan itself is the
    /// bounded operation.
    pub fn paginate(all: Vec<T>, page: PageRequest) -> Self {
        let total = all.len();
        let items = all
            .into_iter()
            .skip(page.offset)
            .take(page.effective_limit())
            .collect();
        Self { items, total }
    }
}

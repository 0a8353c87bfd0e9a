//! Paginator — offset/limit windowing over an already-filtered sequence.

use crate::types::Pagination;

/// A window into an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Length of the whole sequence, counted before windowing.
    pub total_count: u64,
    pub has_more: bool,
}

/// Slice `items` to `[offset, offset + limit)`, clamping both bounds to the
/// sequence length. Out-of-range windows yield an empty page, never an error.
pub fn paginate<T>(items: &[T], page: Pagination) -> Page<'_, T> {
    let len = items.len();
    let start = usize::try_from(page.offset).unwrap_or(usize::MAX).min(len);
    let end = start
        .saturating_add(usize::try_from(page.limit).unwrap_or(usize::MAX))
        .min(len);
    let window = &items[start..end];
    let total_count = len as u64;

    Page {
        items: window,
        total_count,
        has_more: u64::from(page.offset) + (window.len() as u64) < total_count,
    }
}

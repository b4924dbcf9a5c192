/// Default number of cards per page; overridable through `AppConfig`.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Returns the 1-based page `page_number` of `items`, at most `page_size`
/// long. A page number past the end yields an empty slice; clamping a
/// too-large requested page back into range is the caller's job.
pub fn page_of<T>(items: &[T], page_size: usize, page_number: usize) -> &[T] {
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `total` items, zero when there are none.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

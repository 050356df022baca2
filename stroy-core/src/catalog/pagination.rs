//! Page slicing

use shared::{CatalogError, CatalogResult, PageInfo, PaginatedResult};

/// Slice `items` into page `page` (1-based) of `page_size` items.
///
/// Out-of-range pages (including `0`) produce empty data with metadata
/// computed as usual. `page_size == 0` is rejected.
pub fn paginate<T: Clone>(items: &[T], page: u32, page_size: u32) -> CatalogResult<PaginatedResult<T>> {
    if page_size == 0 {
        return Err(CatalogError::invalid_query("page size must be at least 1"));
    }

    let info = PageInfo::new(page, page_size, items.len() as u64);
    let data = match page {
        0 => Vec::new(),
        _ => {
            let start = (page as usize - 1).saturating_mul(page_size as usize);
            items
                .iter()
                .skip(start)
                .take(page_size as usize)
                .cloned()
                .collect()
        }
    };

    Ok(PaginatedResult::new(data, info))
}

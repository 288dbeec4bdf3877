//! Fixed-size pagination stage.

use gridkit_types::PaginationConfig;

/// Page metadata for one render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Clamped current page, 1-indexed.
    pub current_page: usize,
    /// Always at least 1, even over an empty collection.
    pub total_pages: usize,
    pub total_items: usize,
    /// Slice bounds into the sorted collection, clipped to `total_items`.
    pub start: usize,
    pub end: usize,
    /// Whether paging controls should be rendered at all. Suppressed (not
    /// merely disabled) when pagination is off or everything fits one page.
    pub controls_visible: bool,
}

impl PageInfo {
    /// Number of items on the current page.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Slice an ordered collection of `total_items` into pages and clamp the
/// requested page into `[1, total_pages]`.
///
/// Clamping here is what keeps the grid honest after a deletion empties the
/// last page: the orchestrator feeds the stale page number back in and gets
/// a valid one out. A `page_size` below 1 is treated as 1 (documented floor),
/// never a division by zero.
pub fn paginate(total_items: usize, config: &PaginationConfig, requested_page: usize) -> PageInfo {
    if !config.enabled {
        return PageInfo {
            current_page: 1,
            total_pages: 1,
            total_items,
            start: 0,
            end: total_items,
            controls_visible: false,
        };
    }
    let page_size = config.effective_page_size();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let current_page = requested_page.clamp(1, total_pages);
    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    PageInfo {
        current_page,
        total_pages,
        total_items,
        start,
        end,
        controls_visible: total_items > page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled(page_size: usize) -> PaginationConfig {
        PaginationConfig::page_size(page_size)
    }

    #[test]
    fn disabled_pagination_is_a_single_page() {
        let info = paginate(25, &PaginationConfig::default(), 3);
        assert_eq!(info.current_page, 1);
        assert_eq!(info.total_pages, 1);
        assert_eq!((info.start, info.end), (0, 25));
        assert!(!info.controls_visible);
    }

    #[test]
    fn pages_cover_the_collection_without_overlap() {
        let config = enabled(4);
        let mut seen = Vec::new();
        let total = 10;
        let info = paginate(total, &config, 1);
        for page in 1..=info.total_pages {
            let p = paginate(total, &config, page);
            seen.extend(p.start..p.end);
        }
        assert_eq!(seen, (0..total).collect::<Vec<_>>());
    }

    #[test]
    fn total_pages_has_a_floor_of_one() {
        let info = paginate(0, &enabled(8), 1);
        assert_eq!(info.total_pages, 1);
        assert_eq!(info.current_page, 1);
        assert!(info.is_empty());
        assert!(!info.controls_visible);
    }

    #[test]
    fn requested_page_clamps_both_ways() {
        let config = enabled(8);
        assert_eq!(paginate(10, &config, 0).current_page, 1);
        assert_eq!(paginate(10, &config, 99).current_page, 2);
    }

    #[test]
    fn shrinking_collection_reclamps_stale_page() {
        let config = enabled(8);
        // Page 2 held exactly one item; after its deletion page 2 is gone.
        let info = paginate(8, &config, 2);
        assert_eq!(info.current_page, 1);
        assert_eq!((info.start, info.end), (0, 8));
    }

    #[test]
    fn controls_hidden_when_everything_fits() {
        assert!(!paginate(8, &enabled(8), 1).controls_visible);
        assert!(paginate(9, &enabled(8), 1).controls_visible);
    }

    #[test]
    fn zero_page_size_clamps_to_one() {
        let config = PaginationConfig {
            enabled: true,
            page_size: 0,
        };
        let info = paginate(3, &config, 2);
        assert_eq!(info.total_pages, 3);
        assert_eq!((info.start, info.end), (1, 2));
    }

    #[test]
    fn ten_records_page_size_eight_shows_first_eight() {
        let info = paginate(10, &enabled(8), 1);
        assert_eq!((info.start, info.end), (0, 8));
        assert_eq!(info.total_pages, 2);
        assert!(info.has_next());
        assert!(!info.has_prev());
    }
}

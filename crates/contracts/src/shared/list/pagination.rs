/// Records per screen in the admin lists.
pub const PAGE_SIZE: usize = 5;

/// `ceil(len / page_size)`; an empty list has zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// One window of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page index as requested.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based index of the first record shown ("Showing a-b of n").
    pub fn first_index(&self) -> usize {
        let start = self.page.saturating_sub(1) * self.page_size;
        self.total_count.min(start + 1)
    }

    /// 1-based index of the last record shown.
    pub fn last_index(&self) -> usize {
        let start = self.page.saturating_sub(1) * self.page_size;
        self.total_count.min(start + self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slices page `page` (1-based) out of `items`.
///
/// Out-of-range requests are not clamped: they produce an empty window.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    let window = if page == 0 || start >= items.len() {
        Vec::new()
    } else {
        items[start..end].to_vec()
    };

    Page {
        items: window,
        page,
        page_size,
        total_pages: total_pages(items.len(), page_size),
        total_count: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_and_last_page() {
        let items: Vec<u32> = (0..8).collect();

        let first = paginate(&items, 1, PAGE_SIZE);
        assert_eq!(first.items, vec![0, 1, 2, 3, 4]);
        assert_eq!(first.total_pages, 2);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&items, 2, PAGE_SIZE);
        assert_eq!(last.items, vec![5, 6, 7]);
        assert_eq!((last.first_index(), last.last_index()), (6, 8));
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        let items: Vec<u32> = (0..3).collect();
        assert!(paginate(&items, 2, PAGE_SIZE).is_empty());
        assert!(paginate(&items, 0, PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, PAGE_SIZE);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!((page.first_index(), page.last_index()), (0, 0));
    }

    proptest! {
        #[test]
        fn page_count_and_window_sizes(n in 0usize..60) {
            let items: Vec<usize> = (0..n).collect();
            let pages = total_pages(n, PAGE_SIZE);
            prop_assert_eq!(pages, (n + PAGE_SIZE - 1) / PAGE_SIZE);

            if n > 0 {
                let first = paginate(&items, 1, PAGE_SIZE);
                prop_assert_eq!(first.items, items[..n.min(PAGE_SIZE)].to_vec());

                let last = paginate(&items, pages, PAGE_SIZE);
                let expected = if n % PAGE_SIZE == 0 { PAGE_SIZE } else { n % PAGE_SIZE };
                prop_assert_eq!(last.items.len(), expected);
            }

            // the windows tile the list exactly
            let joined: Vec<usize> = (1..=pages)
                .flat_map(|p| paginate(&items, p, PAGE_SIZE).items)
                .collect();
            prop_assert_eq!(joined, items);
        }
    }
}

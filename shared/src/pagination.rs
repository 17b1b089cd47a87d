//! Page arithmetic behind the collapsible paged lists.

/// Number of records shown per page in every paged list.
pub const PAGE_SIZE: usize = 10;

/// One entry of the page navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// Button jumping to the given 1-based page.
    Page(usize),
    /// Gap marker; the id keeps left and right gaps apart.
    Ellipsis(&'static str),
}

/// Total page count for `len` items; an empty list still has one page.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    if len == 0 {
        1
    } else {
        len.div_ceil(per_page)
    }
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// Items visible on `page`, after clamping it to the available range.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if items.is_empty() {
        return items;
    }
    let per_page = per_page.max(1);
    let page = clamp_page(page, total_pages(items.len(), per_page));
    let start = per_page.saturating_mul(page - 1);
    let end = usize::min(start + per_page, items.len());
    &items[start..end]
}

/// Navigation slots around `current`, collapsing long ranges with ellipses.
pub fn visible_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let current = clamp_page(current, total);
    let mut slots = vec![PageSlot::Page(1)];

    let (start, end) = if current <= 3 {
        (2, 5)
    } else if current + 2 >= total {
        (total.saturating_sub(4).max(2), total - 1)
    } else {
        (current - 2, current + 2)
    };

    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }
    slots.push(PageSlot::Page(total));

    slots
}

#[cfg(test)]
mod tests {
    use super::{clamp_page, page_slice, total_pages, visible_slots, PageSlot};

    #[test]
    fn empty_list_counts_as_one_page() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn page_slice_clamps_out_of_range_pages() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 3, 10), &[21, 22, 23]);
        assert_eq!(page_slice(&items, 9, 10), &[21, 22, 23]);
        assert_eq!(page_slice(&items, 0, 10), &items[0..10]);
        assert!(page_slice::<u32>(&[], 4, 10).is_empty());
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn short_ranges_list_every_page() {
        assert_eq!(
            visible_slots(2, 3),
            vec![PageSlot::Page(1), PageSlot::Page(2), PageSlot::Page(3)]
        );
    }

    #[test]
    fn long_ranges_collapse_both_sides() {
        assert_eq!(
            visible_slots(10, 20),
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis("left"),
                PageSlot::Page(8),
                PageSlot::Page(9),
                PageSlot::Page(10),
                PageSlot::Page(11),
                PageSlot::Page(12),
                PageSlot::Ellipsis("right"),
                PageSlot::Page(20),
            ]
        );
        assert_eq!(visible_slots(1, 20)[..5], [
            PageSlot::Page(1),
            PageSlot::Page(2),
            PageSlot::Page(3),
            PageSlot::Page(4),
            PageSlot::Page(5),
        ]);
        assert_eq!(visible_slots(20, 20)[1], PageSlot::Ellipsis("left"));
    }
}

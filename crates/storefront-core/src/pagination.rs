// Paging helpers: slice a list into pages and build the pager's label row
use crate::models::PageLabel;

/// Pagers with this many pages or fewer show every page number
const FULL_WINDOW_MAX_PAGES: usize = 5;

/// Items on 1-indexed `page` when split into pages of `page_size`
///
/// Anything out of range (page 0, past the end, zero page size) is an empty
/// slice rather than an error.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `count` items; never less than 1
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }

    count.div_ceil(page_size).max(1)
}

/// Labels for a pager showing `current` out of `total` pages
///
/// Short pagers list every page. Longer ones keep the first and last page,
/// the neighbours of `current`, and put an ellipsis over each gap.
pub fn page_window(current: usize, total: usize) -> Vec<PageLabel> {
    let total = total.max(1);

    if total <= FULL_WINDOW_MAX_PAGES {
        return (1..=total).map(PageLabel::Page).collect();
    }

    let mut labels = vec![PageLabel::Page(1)];

    if current > 3 {
        labels.push(PageLabel::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total - 1);
    for page in start..=end {
        if !labels.contains(&PageLabel::Page(page)) {
            labels.push(PageLabel::Page(page));
        }
    }

    if current + 2 < total {
        labels.push(PageLabel::Ellipsis);
    }

    if !labels.contains(&PageLabel::Page(total)) {
        labels.push(PageLabel::Page(total));
    }

    labels
}

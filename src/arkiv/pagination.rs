//! # Pagination Calculator
//!
//! Pure arithmetic over an already-computed result set: slicing out the
//! current page and describing the pagination bar as data. Rendering the
//! bar is the presentation layer's job.

/// One page of results plus the derived page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// A control in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    /// Jump to the page before the current one.
    Prev,
    Number { page: usize, active: bool },
    /// Jump to the page after the current one.
    Next,
}

/// Slices `results` down to the requested page.
///
/// `total_pages` is `ceil(len / page_size)`, zero for an empty result
/// set. An out-of-range page yields an empty slice; callers are expected
/// to clamp the page into range before asking (see `query::clamp_page`).
pub fn paginate<T>(results: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    if page_size == 0 {
        return Page {
            items: &results[0..0],
            total_pages: 0,
        };
    }

    let total_pages = results.len().div_ceil(page_size);
    let start = page.saturating_sub(1) * page_size;
    if page == 0 || start >= results.len() {
        return Page {
            items: &results[0..0],
            total_pages,
        };
    }

    let end = (start + page_size).min(results.len());
    Page {
        items: &results[start..end],
        total_pages,
    }
}

/// Describes a sliding window of at most `max_buttons` numbered buttons
/// around `current`, with prev/next controls when pages exist beyond
/// either edge of the window.
pub fn button_window(current: usize, total_pages: usize, max_buttons: usize) -> Vec<PageButton> {
    if total_pages == 0 || max_buttons == 0 {
        return Vec::new();
    }

    let mut start = current.saturating_sub(max_buttons / 2).max(1);
    let end = total_pages.min(start + max_buttons - 1);
    // Saturating: a current page beyond the last would otherwise put
    // start past end.
    if (end + 1).saturating_sub(start) < max_buttons {
        start = end.saturating_sub(max_buttons - 1).max(1);
    }

    let mut buttons = Vec::new();
    if start > 1 {
        buttons.push(PageButton::Prev);
    }
    for page in start..=end {
        buttons.push(PageButton::Number {
            page,
            active: page == current,
        });
    }
    if end < total_pages {
        buttons.push(PageButton::Next);
    }
    buttons
}

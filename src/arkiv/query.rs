//! # Query State
//!
//! The complete view state of a browsing session, mutated exclusively
//! through the named transition methods. Every filter-like transition
//! (filters, search term, sort key) resets to the first page; direct page
//! navigation clamps into range; the viewer-discretion toggle keeps the
//! page, since it does not change the result set.
//!
//! Each transition returns the page number the external location must now
//! reflect (`None` when the page is untouched). The facade performs the
//! actual location push.

/// Year filter: a specific year or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    Year(i32),
}

impl DateFilter {
    /// Boundary parser: a year selects it, anything else means "all".
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i32>() {
            Ok(year) => DateFilter::Year(year),
            Err(_) => DateFilter::All,
        }
    }
}

/// Media filter: a case-insensitive substring of the item's media field,
/// or everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MediaFilter {
    #[default]
    All,
    Kind(String),
}

impl MediaFilter {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("all") {
            MediaFilter::All
        } else {
            MediaFilter::Kind(input.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending by date.
    #[default]
    Recent,
    /// Ascending by date.
    Oldest,
    /// Case-insensitive ascending by name.
    Name,
}

impl SortKey {
    /// Total parser for boundary input. Unrecognized keys fall back to
    /// the default ordering instead of failing.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "oldest" => SortKey::Oldest,
            "name" => SortKey::Name,
            _ => SortKey::Recent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Oldest => "oldest",
            SortKey::Name => "name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub date: DateFilter,
    pub media: MediaFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub filters: Filters,
    pub search_term: String,
    pub sort_key: SortKey,
    pub content_visible: bool,
    pub current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            search_term: String::new(),
            sort_key: SortKey::Recent,
            content_visible: false,
            current_page: 1,
        }
    }
}

impl QueryState {
    pub fn set_filters(&mut self, filters: Filters) -> Option<usize> {
        self.filters = filters;
        Some(self.reset_page())
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> Option<usize> {
        self.search_term = term.into();
        Some(self.reset_page())
    }

    pub fn set_sort_key(&mut self, key: SortKey) -> Option<usize> {
        self.sort_key = key;
        Some(self.reset_page())
    }

    /// Flips the viewer-discretion gate. The flag never participates in
    /// the pipeline predicates, so the result set and page count are
    /// unchanged and the user keeps their place.
    pub fn toggle_content_visibility(&mut self) -> Option<usize> {
        self.content_visible = !self.content_visible;
        None
    }

    /// Navigates to `page`, clamped into `[1, total_pages]`. With no
    /// pages at all the state pins at 1 and the slice stays empty.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> Option<usize> {
        self.current_page = clamp_page(page, total_pages);
        Some(self.current_page)
    }

    fn reset_page(&mut self) -> usize {
        self.current_page = 1;
        1
    }
}

pub(crate) fn clamp_page(page: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        1
    } else {
        page.clamp(1, total_pages)
    }
}

//! # Browser Facade
//!
//! One browsing session over one catalog. The facade is a **thin
//! dispatcher**: state updates live in [`query`](crate::query), the
//! result set in [`pipeline`](crate::pipeline), page math in
//! [`pagination`](crate::pagination). What the facade adds is the
//! session wiring:
//!
//! - the location is read once at mount and pushed after every
//!   page-changing transition,
//! - every transition restarts the loading gate, invalidating any
//!   outstanding reveal,
//! - [`Browser::view`] derives everything the presentation layer needs
//!   in one structured value.
//!
//! Generic over [`Location`] so clients and tests supply their own
//! location backend; the facade itself never touches I/O.

use crate::catalog::Catalog;
use crate::config::BrowseConfig;
use crate::loading::{LoadTicket, LoadingGate};
use crate::location::{self, Location};
use crate::model::Item;
use crate::pagination::{self, PageButton};
use crate::pipeline;
use crate::query::{self, Filters, QueryState, SortKey};

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// The current page's items, in pipeline order.
    pub items: Vec<Item>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Size of the whole filtered result set, not just this page.
    pub total_items: usize,
    pub buttons: Vec<PageButton>,
    pub status: ViewStatus,
    /// Whether sensitive items should be shown unmasked.
    pub content_visible: bool,
    /// The state that produced this view, for reflecting active
    /// filter/sort/search controls.
    pub state: QueryState,
}

/// Distinguishes "still pausing" from "genuinely nothing matched", so
/// the UI can show an empty-state message instead of a blank grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Empty,
    Ready,
}

pub struct Browser<L: Location> {
    catalog: Catalog,
    config: BrowseConfig,
    state: QueryState,
    location: L,
    gate: LoadingGate,
}

impl<L: Location> Browser<L> {
    /// Starts a session.
    ///
    /// Reads the `page` parameter from the location—the one and only
    /// location read—and clamps it against the default-query result set,
    /// so the page invariant holds from the first render. The session
    /// begins in the loading state; call [`Browser::finish_loading`]
    /// with the returned session's [`Browser::refresh`] ticket (or any
    /// later transition's) once the reveal pause has elapsed.
    pub fn mount(catalog: Catalog, config: BrowseConfig, location: L) -> Self {
        let mut browser = Self {
            catalog,
            config,
            state: QueryState::default(),
            location,
            gate: LoadingGate::new(),
        };
        let seeded = location::read_initial_page(browser.location.query());
        browser.state.current_page = query::clamp_page(seeded, browser.total_pages());
        browser.gate.begin();
        browser
    }

    pub fn set_filters(&mut self, filters: Filters) -> LoadTicket {
        let page = self.state.set_filters(filters);
        self.sync_location(page);
        self.gate.begin()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> LoadTicket {
        let page = self.state.set_search_term(term);
        self.sync_location(page);
        self.gate.begin()
    }

    pub fn set_sort_key(&mut self, key: SortKey) -> LoadTicket {
        let page = self.state.set_sort_key(key);
        self.sync_location(page);
        self.gate.begin()
    }

    /// Flips the viewer-discretion gate. No location push: the page does
    /// not change (see `query::QueryState::toggle_content_visibility`).
    pub fn toggle_content_visibility(&mut self) -> LoadTicket {
        let page = self.state.toggle_content_visibility();
        self.sync_location(page);
        self.gate.begin()
    }

    /// Navigates to `page`, clamped into the valid range for the
    /// current result set, and pushes the clamped page to the location.
    pub fn go_to_page(&mut self, page: usize) -> LoadTicket {
        let total = self.total_pages();
        let page = self.state.go_to_page(page, total);
        self.sync_location(page);
        self.gate.begin()
    }

    /// Restarts the loading pause without changing state.
    pub fn refresh(&mut self) -> LoadTicket {
        self.gate.begin()
    }

    /// Ends the reveal pause for `ticket`. Stale tickets (outrun by a
    /// newer transition) are ignored; returns whether the flip landed.
    pub fn finish_loading(&mut self, ticket: LoadTicket) -> bool {
        self.gate.finish(ticket)
    }

    /// Derives the renderable view for the current state.
    pub fn view(&self) -> View {
        let results = pipeline::compute(&self.catalog, &self.state);
        let page = pagination::paginate(&results, self.state.current_page, self.config.page_size);

        let status = if self.gate.is_loading() {
            ViewStatus::Loading
        } else if results.is_empty() {
            ViewStatus::Empty
        } else {
            ViewStatus::Ready
        };

        View {
            items: page.items.iter().map(|item| (*item).clone()).collect(),
            current_page: self.state.current_page,
            total_pages: page.total_pages,
            total_items: results.len(),
            buttons: pagination::button_window(
                self.state.current_page,
                page.total_pages,
                self.config.max_buttons,
            ),
            status,
            content_visible: self.state.content_visible,
            state: self.state.clone(),
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    fn total_pages(&self) -> usize {
        let results = pipeline::compute(&self.catalog, &self.state);
        pagination::paginate(&results, 1, self.config.page_size).total_pages
    }

    fn sync_location(&mut self, page: Option<usize>) {
        if let Some(page) = page {
            let query = location::push_page(self.location.query(), page);
            self.location.push(query);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::MemoryLocation;
    use crate::query::{DateFilter, MediaFilter};

    fn catalog_of_20() -> Catalog {
        let mut items = Vec::new();
        for n in 1..=10 {
            items.push(Item::new(format!("Piece 2020-{n:02}"), 2020, "Video"));
        }
        for n in 1..=10 {
            items.push(Item::new(format!("Piece 2021-{n:02}"), 2021, "Photography"));
        }
        Catalog::new(items)
    }

    fn mounted(query: &str) -> Browser<MemoryLocation> {
        Browser::mount(
            catalog_of_20(),
            BrowseConfig::default(),
            MemoryLocation::new(query),
        )
    }

    #[test]
    fn mount_seeds_the_page_from_the_location() {
        let browser = mounted("ref=mail&page=2");
        assert_eq!(browser.state().current_page, 2);
        // Seeding is a read, not a push.
        assert!(browser.location().history().is_empty());
    }

    #[test]
    fn mount_clamps_an_out_of_range_seed() {
        let browser = mounted("page=99");
        assert_eq!(browser.state().current_page, 2);

        let browser = mounted("page=garbage");
        assert_eq!(browser.state().current_page, 1);
    }

    #[test]
    fn recent_sort_pages_split_by_year() {
        let mut browser = mounted("");
        let ticket = browser.refresh();
        browser.finish_loading(ticket);

        let view = browser.view();
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.total_items, 20);
        assert_eq!(view.items.len(), 16);
        // The 16 most recent: all of 2021 first, in catalog order.
        assert!(view.items[..10].iter().all(|item| item.date == 2021));
        assert_eq!(view.items[0].name, "Piece 2021-01");
        assert!(view.items[10..].iter().all(|item| item.date == 2020));

        browser.go_to_page(2);
        let view = browser.view();
        assert_eq!(view.items.len(), 4);
        assert_eq!(view.current_page, 2);
    }

    #[test]
    fn filter_change_resets_page_and_pushes_page_one() {
        let mut browser = mounted("ref=mail&page=2");
        browser.set_filters(Filters {
            date: DateFilter::Year(2021),
            media: MediaFilter::All,
        });

        assert_eq!(browser.state().current_page, 1);
        assert_eq!(browser.location().query(), "ref=mail&page=1");
    }

    #[test]
    fn search_and_sort_also_reset_and_push() {
        let mut browser = mounted("page=2");
        browser.set_search_term("2020");
        assert_eq!(browser.location().query(), "page=1");

        browser.go_to_page(1);
        browser.set_sort_key(SortKey::Name);
        assert_eq!(browser.state().current_page, 1);
        assert_eq!(
            browser.location().history().last().map(String::as_str),
            Some("page=1")
        );
    }

    #[test]
    fn go_to_page_clamps_and_pushes_the_clamped_page() {
        let mut browser = mounted("");
        browser.go_to_page(99);
        assert_eq!(browser.state().current_page, 2);
        assert_eq!(browser.location().query(), "page=2");
    }

    #[test]
    fn toggle_pushes_nothing_and_keeps_the_page() {
        let mut browser = mounted("page=2");
        let before = browser.location().history().len();
        browser.toggle_content_visibility();

        assert_eq!(browser.state().current_page, 2);
        assert_eq!(browser.location().history().len(), before);
        assert!(browser.view().content_visible);
    }

    #[test]
    fn no_results_is_empty_not_loading() {
        let mut browser = mounted("");
        let ticket = browser.set_search_term("no such piece");
        browser.finish_loading(ticket);

        let view = browser.view();
        assert_eq!(view.status, ViewStatus::Empty);
        assert_eq!(view.total_pages, 0);
        assert!(view.items.is_empty());
        assert!(view.buttons.is_empty());
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn stale_reveal_never_unmasks_newer_state() {
        let mut browser = mounted("");
        let stale = browser.set_search_term("2020");
        let current = browser.set_search_term("2021");

        assert!(!browser.finish_loading(stale));
        assert_eq!(browser.view().status, ViewStatus::Loading);

        assert!(browser.finish_loading(current));
        assert_eq!(browser.view().status, ViewStatus::Ready);
    }

    #[test]
    fn view_is_loading_until_the_reveal_finishes() {
        let mut browser = mounted("");
        assert_eq!(browser.view().status, ViewStatus::Loading);
        let ticket = browser.refresh();
        browser.finish_loading(ticket);
        assert_eq!(browser.view().status, ViewStatus::Ready);
    }

    #[test]
    fn button_window_surrounds_the_current_page() {
        let mut items = Vec::new();
        for n in 0..100 {
            items.push(Item::new(format!("Piece {n:03}"), 2020, "Video"));
        }
        let mut browser = Browser::mount(
            Catalog::new(items),
            BrowseConfig::default(),
            MemoryLocation::new(""),
        );

        browser.go_to_page(4);
        let pages: Vec<usize> = browser
            .view()
            .buttons
            .iter()
            .filter_map(|b| match b {
                PageButton::Number { page, .. } => Some(*page),
                _ => None,
            })
            .collect();
        assert_eq!(pages, vec![2, 3, 4, 5]);
    }
}

//! # Location Synchronizer
//!
//! The navigable location's query string is shared external state—other
//! code (routing, trackers, deep links) owns parameters on it too. The
//! engine treats it as a message channel: one read at mount to seed the
//! starting page, and writes only through [`push_page`], a merge that
//! preserves everything it does not own.

use url::form_urlencoded;

/// The only query parameter the engine owns.
const PAGE_PARAM: &str = "page";

/// Reads the page a session should start on.
///
/// Absent, non-numeric, or zero values mean page 1—this is a sanitizing
/// read, not an error path. Called exactly once, at mount.
pub fn read_initial_page(query: &str) -> usize {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == PAGE_PARAM)
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1)
}

/// Returns `query` with `page` set to the given value.
///
/// Every other parameter is preserved in its original order; a duplicate
/// `page` parameter collapses into the single new one.
pub fn push_page(query: &str, page: usize) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut wrote_page = false;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key == PAGE_PARAM {
            if !wrote_page {
                serializer.append_pair(PAGE_PARAM, &page.to_string());
                wrote_page = true;
            }
        } else {
            serializer.append_pair(&key, &value);
        }
    }
    if !wrote_page {
        serializer.append_pair(PAGE_PARAM, &page.to_string());
    }
    serializer.finish()
}

/// Seam between the engine and whatever owns the real location.
///
/// A web shell would back this with the browser history; the CLI and the
/// test suite use [`MemoryLocation`]. Mirrors the storage seam pattern:
/// the engine stays testable without any environment.
pub trait Location {
    /// The current query string, without a leading `?`.
    fn query(&self) -> &str;

    /// Replace the location with a new query string.
    fn push(&mut self, query: String);
}

/// In-memory location that records every push, so tests can assert on
/// the full navigation history.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    query: String,
    history: Vec<String>,
}

impl MemoryLocation {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Location for MemoryLocation {
    fn query(&self) -> &str {
        &self.query
    }

    fn push(&mut self, query: String) {
        self.history.push(query.clone());
        self.query = query;
    }
}
